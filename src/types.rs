//! Common types used throughout sheet2sql
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Name of one output SQL column
pub type ColumnKey = String;

/// One row as produced by a row source: cell strings in column order
pub type RawRow = Vec<String>;

/// One processed row: output column name to resolved value
pub type TransformedRow = HashMap<ColumnKey, String>;

// ============================================================================
// SQL Mode
// ============================================================================

/// How transformed rows are grouped into INSERT statements
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SqlMode {
    /// One INSERT per row
    #[default]
    Single,
    /// Multi-row INSERTs of up to `batch_size` rows
    Batch,
}

impl SqlMode {
    /// Lowercase name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlMode::Single => "single",
            SqlMode::Batch => "batch",
        }
    }
}

impl fmt::Display for SqlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqlMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(SqlMode::Single),
            "batch" => Ok(SqlMode::Batch),
            other => Err(Error::config(format!(
                "Unknown SQL mode '{other}' (expected 'single' or 'batch')"
            ))),
        }
    }
}
