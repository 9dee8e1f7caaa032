// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # sheet2sql
//!
//! Turn spreadsheet rows into SQL `INSERT` statements.
//!
//! ## Features
//!
//! - **Column mapping**: map output columns to sheet columns, by position or explicitly
//! - **Literal columns**: add fixed values to every row
//! - **Valuers**: transform any column with a closure or a built-in
//! - **Single or batched**: one INSERT per row, or multi-row INSERTs of N rows
//! - **Workbooks and CSV**: xlsx/xls/xlsm/xlsb/ods via calamine, CSV via csv
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheet2sql::{export_sql, Result, SqlBuilder, SqlMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let statements = SqlBuilder::open("data/test.xlsx")
//!         .sql_mode(SqlMode::Batch)
//!         .batch_size(10)
//!         .table_name("test")
//!         .sheet_name("Sheet1")
//!         .mapped("idx", 0)
//!         .header(["id", "name"])
//!         .column("foo", "bar")
//!         .valuer("idx", |v| {
//!             v.parse::<i64>().map(|n| (n - 1).to_string()).unwrap_or_default()
//!         })
//!         .build()
//!         .await?;
//!
//!     for statement in &statements {
//!         println!("{}", statement.render());
//!     }
//!
//!     export_sql("data/test.sql", &statements)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────────────┐   ┌──────────────┐   ┌────────┐
//! │ SqlBuilder   │──▶│ RowPipeline              │──▶│ StatementPlan│──▶│ output │
//! │ ColumnSpec   │   │ reader ─mpsc(10)─▶ proc. │   │ single/batch │   │ .sql   │
//! │ ExportOptions│   │ (RowSource)              │   │ render()     │   │        │
//! └──────────────┘   └──────────────────────────┘   └──────────────┘   └────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Export options
pub mod config;

/// Column mapping and valuers
pub mod columns;

/// Row sources (workbooks, CSV, memory)
pub mod source;

/// Reader/processor row pipeline
pub mod pipeline;

/// Statement assembly and rendering
pub mod statement;

/// Fluent builder
pub mod builder;

/// SQL file output
pub mod output;

/// YAML job definitions
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use builder::SqlBuilder;
pub use config::ExportOptions;
pub use loader::{load_job, load_job_from_str, JobDefinition};
pub use output::export_sql;
pub use statement::Statement;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
