//! Excel reader implementation - .xlsx → Grid

use crate::error::{RowmapError, RowmapResult};
use crate::types::{Cell, Grid};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Reads the first worksheet of an xlsx container into a [`Grid`].
///
/// Values only: dates arrive as their numeric serial and formula cells as
/// the cached result. Error cells read as blanks.
pub struct XlsxReader {
    source: Source,
}

enum Source {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl XlsxReader {
    /// Reader over an .xlsx file on disk
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            source: Source::Path(path.as_ref().to_path_buf()),
        }
    }

    /// Reader over an in-memory .xlsx payload (an uploaded body, typically)
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            source: Source::Bytes(bytes),
        }
    }

    /// Read the first worksheet into a grid
    pub fn read(&self) -> RowmapResult<Grid> {
        match &self.source {
            Source::Path(path) => {
                let mut workbook: Xlsx<_> = open_workbook(path)
                    .map_err(|e| RowmapError::Sheet(format!("Failed to open Excel file: {}", e)))?;
                Self::first_sheet_grid(&mut workbook)
            }
            Source::Bytes(bytes) => {
                let mut workbook: Xlsx<_> =
                    Xlsx::new(Cursor::new(bytes.as_slice())).map_err(|e| {
                        RowmapError::Sheet(format!("Failed to open Excel payload: {}", e))
                    })?;
                Self::first_sheet_grid(&mut workbook)
            }
        }
    }

    fn first_sheet_grid<RS: std::io::Read + std::io::Seek>(
        workbook: &mut Xlsx<RS>,
    ) -> RowmapResult<Grid> {
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| RowmapError::Sheet("Workbook has no worksheets".to_string()))?
            .map_err(|e| RowmapError::Sheet(format!("Failed to read worksheet: {}", e)))?;

        let mut grid = Grid::new();
        for row in range.rows() {
            grid.push_row(row.iter().map(Self::map_cell).collect());
        }
        Ok(grid)
    }

    /// calamine cell → Cell
    fn map_cell(data: &Data) -> Cell {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Empty,
        }
    }
}
