//! The tabular data mapper: bidirectional, field-name driven conversion
//! between a [`crate::types::Grid`] and strongly-typed records.
//!
//! [`GridDecoder`] turns data rows into records (fail-fast on the first cell
//! that cannot be coerced); [`GridEncoder`] turns records into a grid with a
//! header row (never fails). Both directions share one coercion table and
//! match columns to fields by exact header text.

pub mod coerce;
pub mod decoder;
pub mod encoder;

pub use decoder::GridDecoder;
pub use encoder::GridEncoder;
