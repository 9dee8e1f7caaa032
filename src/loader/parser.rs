//! YAML parser for job definitions
//!
//! Parses and validates export job files.

use crate::columns::{builtin, BUILTIN_VALUERS};
use crate::error::{Error, Result};
use crate::loader::types::{ColumnDefinition, JobDefinition};
use std::fs;
use std::path::Path;

/// Load a job definition from a file path
pub fn load_job(path: impl AsRef<Path>) -> Result<JobDefinition> {
    let content = fs::read_to_string(path)?;
    load_job_from_str(&content)
}

/// Load a job definition from a YAML string
pub fn load_job_from_str(yaml: &str) -> Result<JobDefinition> {
    let def: JobDefinition = serde_yaml::from_str(yaml)?;

    validate_job(&def)?;
    Ok(def)
}

/// Validate a job definition
fn validate_job(def: &JobDefinition) -> Result<()> {
    if def.table.trim().is_empty() {
        return Err(Error::config("Job table cannot be empty"));
    }

    def.options().validate()?;

    for column in &def.columns {
        validate_column(column)?;
    }

    for (key, names) in &def.valuers {
        if key.is_empty() {
            return Err(Error::config("Valuer key cannot be empty"));
        }
        if let Some(unknown) = names.iter().find(|name| builtin(name).is_none()) {
            return Err(Error::config(format!(
                "Unknown valuer '{}' for key '{}'. Built-in valuers: {}",
                unknown,
                key,
                BUILTIN_VALUERS.join(", ")
            )));
        }
    }

    Ok(())
}

/// Validate a column declaration
fn validate_column(column: &ColumnDefinition) -> Result<()> {
    match column {
        ColumnDefinition::Header { keys } => {
            if keys.is_empty() {
                return Err(Error::config("Header declaration must list at least one key"));
            }
            if keys.iter().any(String::is_empty) {
                return Err(Error::config("Header keys cannot be empty"));
            }
        }
        ColumnDefinition::Mapped { key, .. } | ColumnDefinition::Literal { key, .. } => {
            if key.is_empty() {
                return Err(Error::config("Column key cannot be empty"));
            }
        }
    }
    Ok(())
}
