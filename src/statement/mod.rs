//! Statement module
//!
//! Groups transformed rows into INSERT statements and renders them.
//!
//! # Overview
//!
//! - `StatementPlan` - validated table/keys/mode/batch size, built before any
//!   row is read
//! - `Statement` - immutable single or batched INSERT; `render()` is pure
//!
//! In batch mode row `i` lands in statement `i / batch_size`; only the last
//! statement may carry fewer than `batch_size` rows.

mod render;
mod types;

pub use render::{quote_identifier, quote_value};
pub use types::{BatchInsert, SingleInsert, Statement};

use crate::columns::ColumnSpec;
use crate::config::ExportOptions;
use crate::error::{Error, Result};
use crate::types::{ColumnKey, SqlMode, TransformedRow};
use std::sync::Arc;

/// How transformed rows become statements
#[derive(Debug, Clone)]
pub struct StatementPlan {
    table: Arc<str>,
    keys: Arc<[ColumnKey]>,
    mode: SqlMode,
    batch_size: usize,
}

impl StatementPlan {
    /// Create a plan, rejecting a zero batch size in batch mode
    pub fn new(
        table: impl Into<String>,
        keys: Arc<[ColumnKey]>,
        mode: SqlMode,
        batch_size: usize,
    ) -> Result<Self> {
        if mode == SqlMode::Batch && batch_size == 0 {
            return Err(Error::InvalidBatchSize { size: batch_size });
        }
        Ok(Self {
            table: Arc::from(table.into()),
            keys,
            mode,
            batch_size,
        })
    }

    /// Create a plan from export options and the declared columns
    pub fn from_options(options: &ExportOptions, columns: &ColumnSpec) -> Result<Self> {
        options.validate()?;
        Self::new(
            options.table.clone(),
            columns.shared_keys(),
            options.mode,
            options.batch_size,
        )
    }

    /// Statement mode
    pub fn mode(&self) -> SqlMode {
        self.mode
    }

    /// Rows per batched statement
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Build statements from rows, preserving row order
    pub fn assemble(&self, rows: &[TransformedRow]) -> Vec<Statement> {
        match self.mode {
            SqlMode::Single => rows
                .iter()
                .map(|row| {
                    Statement::Single(SingleInsert {
                        table: Arc::clone(&self.table),
                        keys: Arc::clone(&self.keys),
                        values: self.ordered_values(row),
                    })
                })
                .collect(),
            SqlMode::Batch => rows
                .chunks(self.batch_size)
                .map(|group| {
                    Statement::Batch(BatchInsert {
                        table: Arc::clone(&self.table),
                        keys: Arc::clone(&self.keys),
                        rows: group.iter().map(|row| self.ordered_values(row)).collect(),
                    })
                })
                .collect(),
        }
    }

    fn ordered_values(&self, row: &TransformedRow) -> Vec<String> {
        self.keys
            .iter()
            .map(|key| row.get(key).cloned().unwrap_or_default())
            .collect()
    }
}
