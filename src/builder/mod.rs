//! Builder module
//!
//! Fluent entry point: declare columns and options, then `build()`.
//!
//! # Example
//!
//! ```rust,ignore
//! use sheet2sql::{SqlBuilder, SqlMode};
//!
//! let statements = SqlBuilder::open("users.xlsx")
//!     .sql_mode(SqlMode::Batch)
//!     .batch_size(100)
//!     .table_name("users")
//!     .mapped("idx", 0)
//!     .header(["id", "name"])
//!     .column("source", "import")
//!     .valuer("idx", |v| v.trim().to_string())
//!     .build()
//!     .await?;
//! ```

use crate::columns::{ColumnSpec, Valuer};
use crate::config::ExportOptions;
use crate::error::Result;
use crate::loader::JobDefinition;
use crate::pipeline::{PipelineStats, RowPipeline};
use crate::source::{open_source, RowSource};
use crate::statement::{Statement, StatementPlan};
use crate::types::{ColumnKey, SqlMode};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds INSERT statements from a row source
///
/// Configuration never fails; invalid options are reported by `build`.
/// The builder is consumed by `build`, so each instance runs once.
pub struct SqlBuilder {
    /// Where rows come from
    source: Box<dyn RowSource>,
    /// Statement and reading options
    options: ExportOptions,
    /// Column rules
    columns: ColumnSpec,
}

impl SqlBuilder {
    /// Create a builder over any row source
    pub fn new<S: RowSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            options: ExportOptions::default(),
            columns: ColumnSpec::new(),
        }
    }

    /// Create a builder over a file, choosing the reader by extension
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(open_source(path))
    }

    /// Create a builder from a YAML job definition
    pub fn from_job<S: RowSource + 'static>(source: S, job: &JobDefinition) -> Result<Self> {
        Ok(Self {
            source: Box::new(source),
            options: job.options(),
            columns: job.column_spec()?,
        })
    }

    // ------------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------------

    /// Replace all options at once
    #[must_use]
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Set single or batch mode
    #[must_use]
    pub fn sql_mode(mut self, mode: SqlMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Set rows per batched statement
    #[must_use]
    pub fn batch_size(mut self, size: usize) -> Self {
        self.options.batch_size = size;
        self
    }

    /// Discard (or keep) the first source row
    #[must_use]
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.options.skip_header = skip;
        self
    }

    /// Set the target table
    #[must_use]
    pub fn table_name(mut self, table: impl Into<String>) -> Self {
        self.options.table = table.into();
        self
    }

    /// Read a specific sheet instead of the first one
    #[must_use]
    pub fn sheet_name(mut self, sheet: impl Into<String>) -> Self {
        self.options.sheet = Some(sheet.into());
        self
    }

    // ------------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------------

    /// Map keys to source columns 0..n-1
    #[must_use]
    pub fn header<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ColumnKey>,
    {
        self.columns.header(keys);
        self
    }

    /// Map a key to an explicit source column
    #[must_use]
    pub fn mapped(mut self, key: impl Into<ColumnKey>, index: usize) -> Self {
        self.columns.mapped(key, index);
        self
    }

    /// Add a column with a fixed value
    #[must_use]
    pub fn column(mut self, key: impl Into<ColumnKey>, value: impl Into<String>) -> Self {
        self.columns.column(key, value);
        self
    }

    /// Transform the value resolved for `key`
    #[must_use]
    pub fn valuer<F>(mut self, key: impl Into<ColumnKey>, valuer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.columns.valuer(key, Arc::new(valuer));
        self
    }

    /// Attach several transforms at once
    #[must_use]
    pub fn valuers<I, K>(mut self, valuers: I) -> Self
    where
        I: IntoIterator<Item = (K, Valuer)>,
        K: Into<ColumnKey>,
    {
        self.columns.valuers(valuers);
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Current options
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Current column rules
    pub fn columns(&self) -> &ColumnSpec {
        &self.columns
    }

    // ------------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------------

    /// Read every row and build the statements
    pub async fn build(self) -> Result<Vec<Statement>> {
        let (statements, _) = self.build_with_stats().await?;
        Ok(statements)
    }

    /// Read every row and build the statements, returning pipeline stats
    pub async fn build_with_stats(self) -> Result<(Vec<Statement>, PipelineStats)> {
        let plan = StatementPlan::from_options(&self.options, &self.columns)?;

        if self.options.table.is_empty() {
            warn!("No table name configured, statements will target an empty identifier");
        }
        if self.columns.is_empty() {
            warn!("No columns declared, statements will have an empty column list");
        }

        let output = RowPipeline::new(Arc::new(self.columns))
            .with_skip_header(self.options.skip_header)
            .with_sheet(self.options.sheet.clone())
            .run(self.source)
            .await?;

        let statements = plan.assemble(&output.rows);
        info!(
            "Built {} {} statements from {} rows",
            statements.len(),
            plan.mode(),
            output.rows.len()
        );

        Ok((statements, output.stats))
    }
}

#[cfg(test)]
mod tests;
