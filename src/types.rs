use std::fmt;

//==============================================================================
// Cells & Grid
//==============================================================================

/// A single spreadsheet cell, stripped of all formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell (also stands in for missing trailing cells)
    Empty,
    /// Text content
    Text(String),
    /// Numeric content (xlsx stores every number as f64)
    Number(f64),
    /// Boolean content
    Bool(bool),
}

impl Cell {
    /// Check if the cell is blank
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the cell type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Text(_) => "text",
            Cell::Number(_) => "number",
            Cell::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "<empty>"),
            Cell::Text(s) => write!(f, "\"{}\"", s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Row-major grid of cells. Row 0 is the header row; rows 1.. are data rows.
///
/// Rows may be ragged: a data row shorter than the header simply has absent
/// cells, which [`Grid::cell`] reports as [`Cell::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Total number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the grid has no rows at all (not even a header)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// The header row (row 0), if the grid has any rows
    pub fn header(&self) -> Option<&[Cell]> {
        self.rows.first().map(|r| r.as_slice())
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    /// Cell at (row, col). Absent cells (short row, or row out of range)
    /// come back as [`Cell::Empty`].
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Header width (0 for a grid with no rows)
    pub fn width(&self) -> usize {
        self.header().map_or(0, |h| h.len())
    }
}

//==============================================================================
// Field layout
//==============================================================================

/// The coercion class a record field declares.
///
/// `Unsupported` covers declared member types outside the coercion table
/// (timestamps, nested values): such fields are skipped on decode and encode
/// as a blank cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Real,
    Boolean,
    Unsupported,
}

impl FieldKind {
    /// Get the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Real => "real",
            FieldKind::Boolean => "boolean",
            FieldKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A coerced field value in transit between a record member and a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Unsupported,
}

impl FieldValue {
    /// The kind this value belongs to
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Integer(_) => FieldKind::Integer,
            FieldValue::Real(_) => FieldKind::Real,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Unsupported => FieldKind::Unsupported,
        }
    }
}

/// One field in a record's declared layout.
///
/// Declaration order is the column order on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
}
