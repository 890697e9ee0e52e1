//! Rowmap - typed records ⇄ spreadsheet grids
//!
//! This library moves strongly-typed records in and out of spreadsheet-like
//! grids. Columns are matched to record fields by header name; a declarative
//! per-type field layout drives the cell coercions, so no per-type converter
//! is ever written by hand.
//!
//! # Features
//!
//! - Field-name driven decode (grid → records), fail-fast with row/field
//!   error context
//! - Infallible encode (records → grid), unsupported kinds become blank
//!   cells
//! - xlsx read/write (files or in-memory payloads)
//! - HTTP API around the user table, plus a PDF-to-Markdown subprocess
//!   wrapper with a bounded wait
//!
//! # Example
//!
//! ```no_run
//! use rowmap::excel::XlsxReader;
//! use rowmap::mapper::GridDecoder;
//! use rowmap::user::User;
//!
//! let grid = XlsxReader::new("users.xlsx").read()?;
//! let users: Vec<User> = GridDecoder::new(&grid).decode()?;
//!
//! println!("{} users", users.len());
//! # Ok::<(), rowmap::error::RowmapError>(())
//! ```

pub mod api;
pub mod cli;
pub mod codegen;
pub mod convert;
pub mod error;
pub mod excel;
pub mod mapper;
pub mod record;
pub mod types;
pub mod user;

// Re-export commonly used types
pub use error::{DecodeError, RowmapError, RowmapResult};
pub use mapper::{GridDecoder, GridEncoder};
pub use record::GridRecord;
pub use types::{Cell, FieldDescriptor, FieldKind, FieldValue, Grid};
