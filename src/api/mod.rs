//! Rowmap API server module
//!
//! HTTP REST API for the user table and document conversion.
//! Run with `rowmap-server`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;
