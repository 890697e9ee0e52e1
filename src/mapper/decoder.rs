//! Grid to records.

use crate::error::DecodeError;
use crate::record::GridRecord;
use crate::types::{Cell, FieldDescriptor, Grid};

use super::coerce;

/// Decodes a grid's data rows into typed records by matching header-cell
/// text to declared field names.
///
/// The decoder holds no state across calls and never mutates the grid, so
/// one grid can be decoded into several record types, or from several
/// threads, without coordination.
pub struct GridDecoder<'g> {
    grid: &'g Grid,
}

impl<'g> GridDecoder<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Number of data rows (everything after the header row)
    pub fn record_count(&self) -> usize {
        self.grid.row_count().saturating_sub(1)
    }

    /// Decode every data row into a `T`, fail-fast.
    ///
    /// A grid with no rows, or with only a header row, decodes to an empty
    /// vec. The first cell that cannot be coerced aborts the whole call with
    /// a [`DecodeError`]; rows decoded before the failure are discarded.
    pub fn decode<T: GridRecord>(&self) -> Result<Vec<T>, DecodeError> {
        let columns = self.resolve_columns::<T>();
        let mut records = Vec::with_capacity(self.record_count());
        for row in 1..self.grid.row_count() {
            records.push(self.decode_row_with(row, &columns)?);
        }
        Ok(records)
    }

    /// Decode a single data row by grid index (the header is row 0).
    ///
    /// This is the escape hatch for partial-success callers: iterate the
    /// data rows yourself and handle each row's error individually instead
    /// of losing the whole batch to one bad cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` is 0 or past the last row.
    pub fn decode_row<T: GridRecord>(&self, row: usize) -> Result<T, DecodeError> {
        assert!(
            row >= 1 && row < self.grid.row_count(),
            "row {} is not a data row",
            row
        );
        let columns = self.resolve_columns::<T>();
        self.decode_row_with(row, &columns)
    }

    /// Match header-cell text to field names: exact and case-sensitive.
    /// Columns without a matching field (or with non-text header cells) stay
    /// unmatched and are skipped. A duplicated header name resolves for both
    /// columns; the later column wins because assignment runs in column
    /// order.
    fn resolve_columns<T: GridRecord>(&self) -> Vec<Option<&'static FieldDescriptor>> {
        let Some(header) = self.grid.header() else {
            return Vec::new();
        };
        header
            .iter()
            .map(|cell| match cell {
                Cell::Text(name) => T::fields().iter().find(|f| f.name == name),
                _ => None,
            })
            .collect()
    }

    fn decode_row_with<T: GridRecord>(
        &self,
        row: usize,
        columns: &[Option<&'static FieldDescriptor>],
    ) -> Result<T, DecodeError> {
        let mut record = T::default();
        for (col, descriptor) in columns.iter().enumerate() {
            let Some(descriptor) = descriptor else {
                continue;
            };
            let cell = self.grid.cell(row, col);
            if cell.is_empty() {
                // absent cell: the field keeps its default
                continue;
            }
            let value =
                coerce::cell_to_value(cell, descriptor.kind).ok_or_else(|| DecodeError {
                    row,
                    field: descriptor.name,
                    value: cell.clone(),
                    expected: descriptor.kind,
                })?;
            record.set_field(descriptor.name, value);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Sample {
        code: i64,
        title: String,
    }

    crate::grid_record!(Sample {
        code: Integer,
        title: Text,
    });

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_decode_empty_grid_yields_no_records() {
        let grid = Grid::new();
        let decoder = GridDecoder::new(&grid);
        let records: Vec<Sample> = decoder.decode().unwrap();
        assert_eq!(records, Vec::<Sample>::new());
        assert_eq!(decoder.record_count(), 0);
    }

    #[test]
    fn test_non_text_header_cells_stay_unmatched() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Number(1.0), text("title")],
            vec![Cell::Number(9.0), text("nine")],
        ]);
        let records: Vec<Sample> = GridDecoder::new(&grid).decode().unwrap();
        // the numeric header cell cannot name a field, so `code` keeps its default
        assert_eq!(records, vec![Sample { code: 0, title: "nine".to_string() }]);
    }

    #[test]
    fn test_decode_row_reports_single_row() {
        let grid = Grid::from_rows(vec![
            vec![text("code"), text("title")],
            vec![Cell::Number(1.0), text("one")],
            vec![text("oops"), text("two")],
        ]);
        let decoder = GridDecoder::new(&grid);

        let first: Sample = decoder.decode_row(1).unwrap();
        assert_eq!(first.code, 1);

        let err = decoder.decode_row::<Sample>(2).unwrap_err();
        assert_eq!(err.row, 2);
        assert_eq!(err.field, "code");
        assert_eq!(err.value, text("oops"));
    }
}
