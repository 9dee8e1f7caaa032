//! CLI commands and argument parsing

use crate::types::SqlMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Spreadsheet to SQL INSERT exporter
#[derive(Parser, Debug)]
#[command(name = "sheet2sql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job definition file (YAML)
    #[arg(short, long, global = true)]
    pub job: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write INSERT statements to a file
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Destination .sql file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print INSERT statements to stdout
    Preview {
        #[command(flatten)]
        source: SourceArgs,

        /// Maximum statements to print
        #[arg(long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate the job definition
    Validate,

    /// List sheet names of a workbook
    Sheets {
        /// Spreadsheet file
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Source file plus overrides for the job definition
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Spreadsheet file (.xlsx, .xls, .ods, .csv, ...)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target table
    #[arg(short, long)]
    pub table: Option<String>,

    /// Sheet to read (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Statement mode
    #[arg(short, long)]
    pub mode: Option<SqlMode>,

    /// Rows per batched statement
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Keep the first row instead of treating it as a header
    #[arg(long)]
    pub no_skip_header: bool,

    /// Keys mapped to source columns 0..n-1 (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub header: Vec<String>,

    /// Literal column as KEY=VALUE (repeatable)
    #[arg(long = "column", value_name = "KEY=VALUE")]
    pub columns: Vec<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw SQL, one statement per line
    Text,
    /// JSON output (one statement per line)
    Json,
}
