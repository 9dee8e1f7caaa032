//! SQL file writer
//!
//! Provides utilities for writing rendered statements, one per line.

use crate::error::{Error, Result};
use crate::statement::Statement;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered, line-oriented statement writer
pub struct SqlWriter<W: Write> {
    /// Buffered sink
    writer: BufWriter<W>,
    /// Destination label used in error messages
    destination: String,
    /// Number of statements written
    statements_written: usize,
}

impl SqlWriter<File> {
    /// Create (or truncate) the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            Error::sink(
                path.display().to_string(),
                format!("Failed to create file: {e}"),
            )
        })?;
        Ok(Self::new(file, path.display().to_string()))
    }
}

impl<W: Write> SqlWriter<W> {
    /// Wrap an arbitrary sink
    pub fn new(inner: W, destination: impl Into<String>) -> Self {
        Self {
            writer: BufWriter::new(inner),
            destination: destination.into(),
            statements_written: 0,
        }
    }

    /// Write one already-rendered statement followed by a newline
    pub fn write_line(&mut self, sql: &str) -> Result<()> {
        writeln!(self.writer, "{sql}").map_err(|e| {
            Error::sink(
                self.destination.clone(),
                format!("Failed to write statement: {e}"),
            )
        })?;
        self.statements_written += 1;
        Ok(())
    }

    /// Render and write a statement
    pub fn write(&mut self, statement: &Statement) -> Result<()> {
        self.write_line(&statement.render())
    }

    /// Get the number of statements written so far
    #[must_use]
    pub fn statements_written(&self) -> usize {
        self.statements_written
    }

    /// Flush the sink and return the number of statements written
    pub fn close(mut self) -> Result<usize> {
        self.writer.flush().map_err(|e| {
            Error::sink(
                self.destination.clone(),
                format!("Failed to flush output: {e}"),
            )
        })?;
        Ok(self.statements_written)
    }
}

/// Write statements to any sink, one per line
pub fn write_statements<W: Write>(
    sink: W,
    destination: &str,
    statements: &[Statement],
) -> Result<usize> {
    let mut writer = SqlWriter::new(sink, destination);
    for statement in statements {
        writer.write(statement)?;
    }
    writer.close()
}

/// Write statements to the file at `path`, one per line
pub fn export_sql(path: impl AsRef<Path>, statements: &[Statement]) -> Result<usize> {
    let path = path.as_ref();
    let mut writer = SqlWriter::create(path)?;
    for statement in statements {
        writer.write(statement)?;
    }
    let written = writer.close()?;

    tracing::info!("Total: {} SQL statements written to {}", written, path.display());
    Ok(written)
}
