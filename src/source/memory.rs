//! In-memory row source
//!
//! Useful when rows already live in memory (another parser, a database
//! cursor, tests). Individual rows can be marked malformed and the whole
//! source can be made to fail on open.

use super::types::{RowIter, RowSource};
use crate::error::{Error, Result};
use crate::types::RawRow;

/// Name of the single sheet exposed by a memory source
pub const MEMORY_SHEET_NAME: &str = "Sheet1";

/// Row source backed by a `Vec` of rows
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// Rows, or an error message for rows that fail to read
    rows: Vec<std::result::Result<RawRow, String>>,
    /// Error returned by `open`, if set
    open_error: Option<String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from rows of cells
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut source = Self::new();
        for row in rows {
            source = source.with_row(row);
        }
        source
    }

    /// Create a source that fails to open
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            open_error: Some(message.into()),
        }
    }

    /// Append a row
    #[must_use]
    pub fn with_row<R, S>(mut self, row: R) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(Ok(row.into_iter().map(Into::into).collect()));
        self
    }

    /// Append a row that fails to read
    #[must_use]
    pub fn with_malformed_row(mut self, message: impl Into<String>) -> Self {
        self.rows.push(Err(message.into()));
        self
    }

    /// Number of rows, malformed ones included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the source has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for MemorySource {
    fn open(&mut self, sheet: Option<&str>) -> Result<RowIter> {
        if let Some(message) = &self.open_error {
            return Err(Error::source_open("memory", message.clone()));
        }
        if let Some(sheet) = sheet {
            if sheet != MEMORY_SHEET_NAME {
                return Err(Error::SheetNotFound {
                    sheet: sheet.to_string(),
                });
            }
        }

        let rows = std::mem::take(&mut self.rows)
            .into_iter()
            .map(|row| row.map_err(Error::malformed_row));
        Ok(Box::new(rows))
    }

    fn sheet_names(&mut self) -> Result<Vec<String>> {
        Ok(vec![MEMORY_SHEET_NAME.to_string()])
    }

    fn describe(&self) -> String {
        format!("memory:{} rows", self.rows.len())
    }
}
