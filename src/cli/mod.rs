//! CLI command handlers

pub mod commands;

pub use commands::{convert, export, generate, import};
