//! CSV row source
//!
//! Reads delimited text with the `csv` crate. Every record becomes one raw
//! row; no header handling happens here (the pipeline skips the first row).

use super::types::{RowIter, RowSource};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Name reported for the single "sheet" of a CSV file
const CSV_SHEET_NAME: &str = "csv";

/// CSV file row source with configurable delimiter
#[derive(Debug, Clone)]
pub struct CsvSource {
    /// File to read
    path: PathBuf,
    /// Field delimiter
    delimiter: u8,
}

impl CsvSource {
    /// Create a comma-separated source
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_delimiter(path, b',')
    }

    /// Create a source with a custom delimiter
    pub fn with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter,
        }
    }

    /// Field delimiter
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl RowSource for CsvSource {
    fn open(&mut self, sheet: Option<&str>) -> Result<RowIter> {
        if let Some(sheet) = sheet {
            tracing::debug!("Ignoring sheet '{}' for CSV source", sheet);
        }

        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(|e| Error::source_open(self.path.display().to_string(), e.to_string()))?;

        let rows = reader.into_records().map(|record| {
            record
                .map(|r| r.iter().map(String::from).collect())
                .map_err(|e| Error::malformed_row(e.to_string()))
        });
        Ok(Box::new(rows))
    }

    fn sheet_names(&mut self) -> Result<Vec<String>> {
        Ok(vec![CSV_SHEET_NAME.to_string()])
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
