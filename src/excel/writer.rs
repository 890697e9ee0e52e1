//! Excel writer implementation - Grid → .xlsx

use crate::error::{RowmapError, RowmapResult};
use crate::types::{Cell, Grid};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Writes a [`Grid`] into a single-worksheet xlsx container.
///
/// The worksheet is named "Sheet1"; grid row 0 lands in the first
/// spreadsheet row. Empty cells are skipped rather than written, so a blank
/// column stays genuinely blank in the container.
pub struct XlsxWriter<'g> {
    grid: &'g Grid,
}

impl<'g> XlsxWriter<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Write the grid to an .xlsx file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RowmapResult<()> {
        let mut workbook = self.build()?;
        workbook
            .save(path.as_ref())
            .map_err(|e| RowmapError::Workbook(format!("Failed to save Excel file: {}", e)))?;
        Ok(())
    }

    /// Render the grid to in-memory .xlsx bytes (download responses)
    pub fn to_buffer(&self) -> RowmapResult<Vec<u8>> {
        let mut workbook = self.build()?;
        workbook
            .save_to_buffer()
            .map_err(|e| RowmapError::Workbook(format!("Failed to render Excel payload: {}", e)))
    }

    fn build(&self) -> RowmapResult<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name("Sheet1")
            .map_err(|e| RowmapError::Workbook(format!("Failed to set worksheet name: {}", e)))?;

        for (row_idx, row) in self.grid.rows().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let r = row_idx as u32;
                let c = col_idx as u16;
                match cell {
                    Cell::Empty => {}
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, s).map_err(|e| {
                            RowmapError::Workbook(format!("Failed to write cell: {}", e))
                        })?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n).map_err(|e| {
                            RowmapError::Workbook(format!("Failed to write cell: {}", e))
                        })?;
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).map_err(|e| {
                            RowmapError::Workbook(format!("Failed to write cell: {}", e))
                        })?;
                    }
                }
            }
        }
        Ok(workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_grid() -> Grid {
        Grid::from_rows(vec![
            vec![
                Cell::Text("name".to_string()),
                Cell::Text("score".to_string()),
                Cell::Text("passed".to_string()),
            ],
            vec![
                Cell::Text("ada".to_string()),
                Cell::Number(91.5),
                Cell::Bool(true),
            ],
            vec![Cell::Text("grace".to_string()), Cell::Empty, Cell::Bool(false)],
        ])
    }

    #[test]
    fn test_save_writes_a_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.xlsx");

        let grid = sample_grid();
        XlsxWriter::new(&grid).save(&path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_to_buffer_yields_a_zip_container() {
        let grid = sample_grid();
        let bytes = XlsxWriter::new(&grid).to_buffer().unwrap();

        // xlsx is a zip archive, so the payload starts with the PK magic
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_empty_grid_still_renders_a_workbook() {
        let grid = Grid::new();
        let bytes = XlsxWriter::new(&grid).to_buffer().unwrap();
        assert!(!bytes.is_empty());
    }
}
