//! Row source module
//!
//! Supports: xlsx/xls/xlsm/xlsb/ods workbooks, CSV, in-memory rows
//!
//! # Overview
//!
//! A row source yields ordered rows of cell strings from one sheet.
//! Failing to open the source aborts a build; a single row that cannot be
//! read is reported as an item error and dropped by the pipeline.

mod delimited;
mod memory;
mod types;
mod workbook;

pub use delimited::CsvSource;
pub use memory::MemorySource;
pub use types::{RowIter, RowSource};
pub use workbook::WorkbookSource;

use std::path::Path;

/// Extensions handled by [`WorkbookSource`]
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Pick a row source from the file extension
///
/// `.csv` and `.tsv` files get a [`CsvSource`]; everything else is opened
/// as a workbook.
pub fn open_source(path: impl AsRef<Path>) -> Box<dyn RowSource> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Box::new(CsvSource::new(path)),
        "tsv" => Box::new(CsvSource::with_delimiter(path, b'\t')),
        ext if WORKBOOK_EXTENSIONS.contains(&ext) => Box::new(WorkbookSource::new(path)),
        _ => {
            tracing::debug!(
                "Unrecognized extension for {}, trying workbook reader",
                path.display()
            );
            Box::new(WorkbookSource::new(path))
        }
    }
}
