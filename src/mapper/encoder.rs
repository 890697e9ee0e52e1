//! Records to grid.

use crate::record::GridRecord;
use crate::types::{Cell, Grid};

use super::coerce;

/// Encodes a slice of records into a grid: one header row of field names in
/// declaration order, then one data row per record.
///
/// Encoding never fails. Fields of unsupported kinds encode as empty text
/// cells (silent narrowing, never an error).
///
/// An empty slice encodes to a grid with no rows at all, not even a header.
/// Decoding accepts both the no-rows and the header-only shape and yields no
/// records for either, so the record round trip still holds; what the
/// asymmetry loses is the header row itself.
pub struct GridEncoder<'r, T: GridRecord> {
    records: &'r [T],
}

impl<'r, T: GridRecord> GridEncoder<'r, T> {
    pub fn new(records: &'r [T]) -> Self {
        Self { records }
    }

    /// Build the grid. Output is rectangular: every row carries one cell per
    /// declared field.
    pub fn encode(&self) -> Grid {
        let mut grid = Grid::new();
        if self.records.is_empty() {
            return grid;
        }

        let fields = T::fields();
        grid.push_row(
            fields
                .iter()
                .map(|f| Cell::Text(f.name.to_string()))
                .collect(),
        );
        for record in self.records {
            grid.push_row(
                fields
                    .iter()
                    .map(|f| coerce::value_to_cell(record.field(f.name)))
                    .collect(),
            );
        }
        grid
    }
}
