//! CLI module
//!
//! Command-line interface for exporting spreadsheets as SQL.
//!
//! # Commands
//!
//! - `export` - Write INSERT statements to a .sql file
//! - `preview` - Print INSERT statements to stdout
//! - `validate` - Check a job definition
//! - `sheets` - List the sheets of a workbook

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, SourceArgs};
pub use runner::Runner;
