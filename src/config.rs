//! Export options
//!
//! Statement-level settings shared by the builder, the YAML job loader and
//! the CLI.

use crate::error::{Error, Result};
use crate::types::SqlMode;
use serde::{Deserialize, Serialize};

/// Default number of rows per batched INSERT
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Options that control how rows are read and how statements are grouped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Single or batched statements
    #[serde(default)]
    pub mode: SqlMode,

    /// Rows per statement in batch mode
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Treat the first source row as a header and discard it
    #[serde(default = "default_skip_header")]
    pub skip_header: bool,

    /// Target table name
    #[serde(default)]
    pub table: String,

    /// Sheet to read (None = first sheet)
    #[serde(default)]
    pub sheet: Option<String>,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_skip_header() -> bool {
    true
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: SqlMode::Single,
            batch_size: DEFAULT_BATCH_SIZE,
            skip_header: true,
            table: String::new(),
            sheet: None,
        }
    }
}

impl ExportOptions {
    /// Create options with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL mode
    #[must_use]
    pub fn with_mode(mut self, mode: SqlMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the batch size
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Skip (or keep) the first source row
    #[must_use]
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Set the table name
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the sheet name
    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Check the options before any row is read
    pub fn validate(&self) -> Result<()> {
        if self.mode == SqlMode::Batch && self.batch_size == 0 {
            return Err(Error::InvalidBatchSize {
                size: self.batch_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_options_default() {
        let opts = ExportOptions::default();
        assert_eq!(opts.mode, SqlMode::Single);
        assert_eq!(opts.batch_size, 10);
        assert!(opts.skip_header);
        assert!(opts.table.is_empty());
        assert!(opts.sheet.is_none());
    }

    #[test]
    fn test_export_options_builder() {
        let opts = ExportOptions::new()
            .with_mode(SqlMode::Batch)
            .with_batch_size(3)
            .with_skip_header(false)
            .with_table("users")
            .with_sheet("Sheet2");

        assert_eq!(opts.mode, SqlMode::Batch);
        assert_eq!(opts.batch_size, 3);
        assert!(!opts.skip_header);
        assert_eq!(opts.table, "users");
        assert_eq!(opts.sheet.as_deref(), Some("Sheet2"));
    }

    #[test]
    fn test_validate_zero_batch_size() {
        let opts = ExportOptions::new()
            .with_mode(SqlMode::Batch)
            .with_batch_size(0);
        assert!(matches!(
            opts.validate(),
            Err(Error::InvalidBatchSize { size: 0 })
        ));

        // batch size is irrelevant in single mode
        let opts = ExportOptions::new().with_batch_size(0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: ExportOptions = serde_json::from_str(r#"{"table": "t", "mode": "batch"}"#).unwrap();
        assert_eq!(opts.table, "t");
        assert_eq!(opts.mode, SqlMode::Batch);
        assert_eq!(opts.batch_size, 10);
        assert!(opts.skip_header);
    }
}
