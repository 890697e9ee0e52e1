use thiserror::Error;

use crate::types::{Cell, FieldKind};

pub type RowmapResult<T> = Result<T, RowmapError>;

#[derive(Error, Debug)]
pub enum RowmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Sheet read error: {0}")]
    Sheet(String),

    #[error("Workbook write error: {0}")]
    Workbook(String),

    #[error("Conversion error: {0}")]
    Convert(String),

    #[error("Codegen error: {0}")]
    Codegen(String),
}

/// First cell that could not be coerced during a decode pass. Decoding is
/// fail-fast: the error names the grid row (zero-based, header = row 0), the
/// field, the offending value and the kind the field required.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("row {row}, field '{field}': cannot coerce {value} into {expected}")]
pub struct DecodeError {
    pub row: usize,
    pub field: &'static str,
    pub value: Cell,
    pub expected: FieldKind,
}
