//! StratMatrix CLI
//!
//! Keeps a use case catalog in a CSV file and renders it as a priority
//! matrix layout.
//!
//! # Commands
//!
//! - `add`: Append a use case
//! - `import` / `export`: Replace the catalog from CSV, or write it out
//! - `list`, `rename`, `remove`, `reset`: Inspect and edit the catalog
//! - `render`: Emit the layout description as JSON
//! - `classify`: Show the quadrant for a pair of ratings

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use stratmatrix::Rating;

mod commands;
mod error;

/// StratMatrix - use case priority matrix
#[derive(Parser)]
#[command(name = "stratmatrix")]
#[command(version)]
#[command(about = "Catalog use cases and lay them out on a priority matrix")]
#[command(propagate_version = true)]
struct Cli {
    /// CSV file holding the saved catalog
    #[arg(long, global = true, default_value = "stratmatrix.csv")]
    data: PathBuf,

    /// TOML configuration file; defaults apply if it does not exist
    #[arg(long, global = true, default_value = "stratmatrix.toml")]
    config: PathBuf,

    /// Print colored progress events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a use case to the catalog
    Add {
        /// Use case name
        name: String,
        /// Actionability rating (Low, Medium, High)
        #[arg(short, long)]
        actionability: Rating,
        /// Feasibility rating (Low, Medium, High)
        #[arg(short, long)]
        feasibility: Rating,
        /// Business value rating (Low, Medium, High)
        #[arg(short, long)]
        business_value: Rating,
    },
    /// Replace the catalog with a validated CSV file
    Import { file: PathBuf },
    /// Write the catalog as CSV, to stdout if no file is given
    Export { file: Option<PathBuf> },
    /// List the catalog with row indices and quadrants
    List,
    /// Rename the use case at a row index
    Rename { index: usize, name: String },
    /// Remove the use case at a row index
    Remove { index: usize },
    /// Remove every use case
    Reset,
    /// Render the matrix layout as JSON
    Render {
        /// Seed the jitter for a reproducible layout
        #[arg(long)]
        seed: Option<u64>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the quadrant for an actionability and feasibility rating
    Classify {
        actionability: Rating,
        feasibility: Rating,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        stratmatrix::console::init();
    }

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
