//! Excel container module
//!
//! This module moves grids in and out of the xlsx container:
//! - Read: .xlsx (file or in-memory bytes) → [`crate::types::Grid`]
//! - Write: [`crate::types::Grid`] → .xlsx (file or in-memory bytes)
//!
//! Only cell values travel; formatting, formulas and extra worksheets are
//! outside the mapper's world.

mod reader;
mod writer;

pub use reader::XlsxReader;
pub use writer::XlsxWriter;
