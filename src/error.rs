//! Error types for sheet2sql
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for sheet2sql
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid batch size {size}: batch mode requires a positive batch size")]
    InvalidBatchSize { size: usize },

    #[error("Unknown valuer '{name}'")]
    UnknownValuer { name: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Row Source Errors
    // ============================================================================
    #[error("Failed to open source '{path}': {message}")]
    SourceOpen { path: String, message: String },

    #[error("Sheet '{sheet}' not found")]
    SheetNotFound { sheet: String },

    #[error("Malformed row: {message}")]
    MalformedRow { message: String },

    // ============================================================================
    // Pipeline Errors
    // ============================================================================
    #[error("Pipeline error: {message}")]
    Pipeline { message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to write '{path}': {message}")]
    Sink { path: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a source-open error
    pub fn source_open(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceOpen {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(message: impl Into<String>) -> Self {
        Self::MalformedRow {
            message: message.into(),
        }
    }

    /// Create a pipeline error
    pub fn pipeline(message: impl Into<String>) -> Self {
        Self::Pipeline {
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Sink {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error came from reading the row source
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Error::SourceOpen { .. } | Error::SheetNotFound { .. } | Error::MalformedRow { .. }
        )
    }

    /// Process exit status for the CLI: 2 for row-source failures, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_source_error() {
            2
        } else {
            1
        }
    }
}

/// Result type alias for sheet2sql
pub type Result<T> = std::result::Result<T, Error>;
