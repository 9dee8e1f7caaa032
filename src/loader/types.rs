//! Loader types
//!
//! Declarative job definition types for YAML parsing.

use crate::columns::{builtin, chain, ColumnSpec, Valuer};
use crate::config::{ExportOptions, DEFAULT_BATCH_SIZE};
use crate::error::{Error, Result};
use crate::types::SqlMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Job Definition
// ============================================================================

/// Top-level export job definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobDefinition {
    /// Target table
    pub table: String,
    /// Sheet to read (default: first sheet)
    #[serde(default)]
    pub sheet: Option<String>,
    /// Single or batch statements
    #[serde(default)]
    pub mode: SqlMode,
    /// Rows per batched statement
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Discard the first source row
    #[serde(default = "default_skip_header")]
    pub skip_header: bool,
    /// Column declarations, applied in order
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
    /// Key -> built-in valuer names, applied left to right
    #[serde(default)]
    pub valuers: BTreeMap<String, Vec<String>>,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_skip_header() -> bool {
    true
}

impl JobDefinition {
    /// Export options described by this job
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            mode: self.mode,
            batch_size: self.batch_size,
            skip_header: self.skip_header,
            table: self.table.clone(),
            sheet: self.sheet.clone(),
        }
    }

    /// Build the column rules described by this job
    pub fn column_spec(&self) -> Result<ColumnSpec> {
        let mut spec = ColumnSpec::new();
        for column in &self.columns {
            match column {
                ColumnDefinition::Header { keys } => {
                    spec.header(keys.iter().cloned());
                }
                ColumnDefinition::Mapped { key, index } => {
                    spec.mapped(key.clone(), *index);
                }
                ColumnDefinition::Literal { key, value } => {
                    spec.column(key.clone(), value.clone());
                }
            }
        }

        for (key, names) in &self.valuers {
            spec.valuer(key.clone(), resolve_valuers(names)?);
        }
        Ok(spec)
    }

    /// Declared keys in order, duplicates included
    pub fn keys(&self) -> Vec<&str> {
        self.columns
            .iter()
            .flat_map(|column| match column {
                ColumnDefinition::Header { keys } => keys.iter().map(String::as_str).collect(),
                ColumnDefinition::Mapped { key, .. } | ColumnDefinition::Literal { key, .. } => {
                    vec![key.as_str()]
                }
            })
            .collect()
    }
}

/// Turn a list of built-in names into one chained valuer
fn resolve_valuers(names: &[String]) -> Result<Valuer> {
    let valuers = names
        .iter()
        .map(|name| {
            builtin(name).ok_or_else(|| Error::UnknownValuer { name: name.clone() })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(chain(valuers))
}

// ============================================================================
// Column Definition
// ============================================================================

/// One column declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnDefinition {
    /// Keys mapped to source columns 0..n-1
    Header {
        /// Output keys
        keys: Vec<String>,
    },
    /// Key mapped to one source column
    Mapped {
        /// Output key
        key: String,
        /// Zero-based source column
        index: usize,
    },
    /// Key with a fixed value
    Literal {
        /// Output key
        key: String,
        /// Value for every row
        value: String,
    },
}
