//! nq CLI - Notion page report and journal appender.
//!
//! Prints a page's metadata and properties, the last non-empty block of each
//! configured child page, and, given `LABEL CONTENT`, appends a labeled entry
//! to the target child page unless one with that label already exists.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::ReportArgs;
use output::Output;

/// nq - Notion page report and journal appender.
#[derive(Parser)]
#[command(name = "nq", version, about)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// Enable verbose output (request logging).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Before parsing, so .env values reach env-backed flags
    nq_config::load_dotenv();

    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to errors only
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.report.execute(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
