use clap::{Parser, Subcommand};
use rowmap::cli;
use rowmap::error::RowmapResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowmap")]
#[command(about = "Move typed records in and out of Excel spreadsheets.")]
#[command(long_about = "Rowmap - typed records ⇄ spreadsheet grids

Columns are matched to record fields by header name; field kinds drive the
cell coercions. The same layout powers the HTTP API (rowmap-server).

COMMANDS:
  export    - User records (JSON) to Excel (.xlsx)
  import    - Excel (.xlsx) to user records
  convert   - PDF to Markdown via the converter script
  generate  - Render a new record module from field specs

EXAMPLES:
  rowmap export users.json users.xlsx
  rowmap import users.xlsx --output users.json
  rowmap convert report.pdf report.md --timeout 120
  rowmap generate t_order order_id:integer label:text paid:bool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Export user records to an Excel .xlsx file.

The input is a JSON array of user records. The output workbook has one
worksheet: a header row of field names, then one row per record. Timestamp
fields are outside the cell coercion table and export as a blank column.

EXAMPLE:
  rowmap export users.json users.xlsx")]
    /// Export user records (JSON) to Excel .xlsx
    Export {
        /// Path to the JSON records file
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Import an Excel .xlsx file into user records.

Reads the first worksheet: row 1 must be the header row; columns are matched
to record fields by exact header name, unmatched columns are ignored. The
import is fail-fast: the first cell that cannot be coerced aborts with the
offending row, field and value.

EXAMPLES:
  rowmap import users.xlsx                     # print as a table
  rowmap import users.xlsx --output users.json # write JSON")]
    /// Import Excel .xlsx into user records
    Import {
        /// Path to the Excel file (.xlsx)
        input: PathBuf,

        /// Write records to a JSON file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose import steps
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Convert a PDF to Markdown via the converter script.

Spawns `<interpreter> <script> <input> <output>` and waits with a deadline.
Script stdout/stderr are relayed to the log for diagnosis; on failure or
timeout the child is killed and a partially written output file is removed.

EXAMPLES:
  rowmap convert report.pdf report.md
  rowmap convert report.pdf report.md --timeout 120
  rowmap convert scan.pdf scan.md --script tools/my_converter.py")]
    /// Convert a PDF to Markdown
    Convert {
        /// Path to the PDF file
        input: PathBuf,

        /// Output Markdown file path
        output: PathBuf,

        /// Converter script to run
        #[arg(long, default_value = "scripts/pdf_to_markdown.py")]
        script: PathBuf,

        /// Interpreter binary for the script
        #[arg(long, default_value = "python3")]
        interpreter: String,

        /// Deadline in seconds before the conversion is killed
        #[arg(long, default_value = "60")]
        timeout: u64,
    },

    #[command(long_about = "Render the source of a new record module.

Field specs are name:kind pairs; kinds are text, integer, real, boolean and
datetime (datetime members sit outside the cell coercion table: blank on
export, ignored on import). Without --output the module prints to stdout.

EXAMPLES:
  rowmap generate t_order order_id:integer label:text paid:bool
  rowmap generate t_order order_id:integer placed:datetime -o src/order.rs")]
    /// Render a new record module from field specs
    Generate {
        /// Record name (snake_case, becomes a PascalCase struct)
        name: String,

        /// Field specs as name:kind pairs
        #[arg(required = true)]
        fields: Vec<String>,

        /// Write the module to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> RowmapResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            verbose,
        } => cli::export(input, output, verbose),

        Commands::Import {
            input,
            output,
            verbose,
        } => cli::import(input, output, verbose),

        Commands::Convert {
            input,
            output,
            script,
            interpreter,
            timeout,
        } => cli::convert(input, output, script, interpreter, timeout),

        Commands::Generate {
            name,
            fields,
            output,
        } => cli::generate(name, fields, output),
    }
}
