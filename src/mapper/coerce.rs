//! The coercion table shared by both mapper directions.

use crate::types::{Cell, FieldKind, FieldValue};

/// Coerce a cell into a value of the given kind.
///
/// `None` means the cell's type does not fit the kind (a decode mismatch).
/// `Unsupported` kinds accept any cell and carry nothing, so a matched
/// column for an unsupported field never fails a decode.
pub(crate) fn cell_to_value(cell: &Cell, kind: FieldKind) -> Option<FieldValue> {
    match kind {
        FieldKind::Text => match cell {
            Cell::Text(s) => Some(FieldValue::Text(s.clone())),
            _ => None,
        },
        FieldKind::Integer => match cell {
            Cell::Number(n) => Some(FieldValue::Integer(*n as i64)),
            _ => None,
        },
        FieldKind::Real => match cell {
            Cell::Number(n) => Some(FieldValue::Real(*n)),
            _ => None,
        },
        FieldKind::Boolean => match cell {
            Cell::Bool(b) => Some(FieldValue::Boolean(*b)),
            _ => None,
        },
        FieldKind::Unsupported => Some(FieldValue::Unsupported),
    }
}

/// Reverse coercion: value to cell. Never fails; `Unsupported` narrows to an
/// empty text cell.
pub(crate) fn value_to_cell(value: FieldValue) -> Cell {
    match value {
        FieldValue::Text(s) => Cell::Text(s),
        FieldValue::Integer(i) => Cell::Number(i as f64),
        FieldValue::Real(f) => Cell::Number(f),
        FieldValue::Boolean(b) => Cell::Bool(b),
        FieldValue::Unsupported => Cell::Text(String::new()),
    }
}
