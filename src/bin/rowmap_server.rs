//! Rowmap API server binary
//!
//! HTTP REST API for the user table: list, spreadsheet export/import, and
//! PDF-to-Markdown conversion.

use std::path::PathBuf;

use clap::Parser;
use rowmap::api::{run_api_server, server::ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "rowmap-server")]
#[command(version)]
#[command(about = "Rowmap API Server - HTTP REST API for the user table")]
#[command(long_about = r#"
Rowmap API Server

Endpoints:
  - GET  /api/v1/users         - List the user table
  - GET  /api/v1/users/export  - Download the table as an xlsx file
  - POST /api/v1/users/import  - Upload an xlsx payload, replace the table
  - POST /api/v1/convert       - Convert a PDF on disk to Markdown

Additional endpoints:
  - GET  /health               - Health check
  - GET  /version              - Server version info
  - GET  /                     - API documentation

Features:
  - CORS enabled for cross-origin requests
  - Graceful shutdown on SIGINT/SIGTERM
  - JSON response envelope with request IDs
  - Tracing and structured logging

Example usage:
  rowmap-server                           # Start on localhost:8080
  rowmap-server --host 0.0.0.0 --port 3000

  curl http://localhost:8080/api/v1/users
  curl -OJ http://localhost:8080/api/v1/users/export
  curl -X POST http://localhost:8080/api/v1/users/import \
    --data-binary @users.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "ROWMAP_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "ROWMAP_PORT")]
    port: u16,

    /// Converter script used by /api/v1/convert
    #[arg(
        long,
        default_value = "scripts/pdf_to_markdown.py",
        env = "ROWMAP_CONVERT_SCRIPT"
    )]
    convert_script: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        convert_script: args.convert_script,
    };

    run_api_server(config).await
}
