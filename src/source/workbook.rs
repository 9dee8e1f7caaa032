//! Workbook row source
//!
//! Reads one worksheet of an xlsx/xls/xlsm/xlsb/ods file with `calamine`.
//! Cells are rendered through their `Display` impl; empty cells become "".

use super::types::{RowIter, RowSource};
use crate::error::{Error, Result};
use crate::types::RawRow;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Spreadsheet workbook row source
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    /// Workbook file
    path: PathBuf,
}

impl WorkbookSource {
    /// Create a source for the workbook at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn open_workbook(&self) -> Result<Sheets<BufReader<File>>> {
        open_workbook_auto(&self.path)
            .map_err(|e| Error::source_open(self.path.display().to_string(), e.to_string()))
    }
}

impl RowSource for WorkbookSource {
    fn open(&mut self, sheet: Option<&str>) -> Result<RowIter> {
        let mut workbook = self.open_workbook()?;
        let names = workbook.sheet_names();

        let sheet = match sheet {
            Some(name) if names.iter().any(|n| n == name) => name.to_string(),
            Some(name) => {
                return Err(Error::SheetNotFound {
                    sheet: name.to_string(),
                })
            }
            None => names.into_iter().next().ok_or_else(|| {
                Error::source_open(self.path.display().to_string(), "workbook has no sheets")
            })?,
        };

        tracing::debug!("Reading sheet '{}' from {}", sheet, self.path.display());

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|e| Error::source_open(self.path.display().to_string(), e.to_string()))?;

        let rows: Vec<Result<RawRow>> = range_to_rows(&range).into_iter().map(Ok).collect();
        Ok(Box::new(rows.into_iter()))
    }

    fn sheet_names(&mut self) -> Result<Vec<String>> {
        Ok(self.open_workbook()?.sheet_names())
    }

    fn describe(&self) -> String {
        format!("workbook:{}", self.path.display())
    }
}

/// Convert a used range to rows anchored at cell A1
///
/// calamine trims leading empty rows and columns from the used range; they
/// are padded back so raw-row indices match spreadsheet column positions.
fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<RawRow> = (0..start_row).map(|_| RawRow::new()).collect();
    for cells in range.rows() {
        let mut row = vec![String::new(); start_col as usize];
        row.extend(cells.iter().map(cell_to_string));
        rows.push(row);
    }
    rows
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
