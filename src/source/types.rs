//! Row source traits

use crate::error::Result;
use crate::types::RawRow;

/// Lazy, finite sequence of raw rows
pub type RowIter = Box<dyn Iterator<Item = Result<RawRow>> + Send>;

/// Trait for anything that can produce spreadsheet-like rows
pub trait RowSource: Send {
    /// Open the source and enumerate the rows of `sheet` (None = first sheet)
    fn open(&mut self, sheet: Option<&str>) -> Result<RowIter>;

    /// Names of the sheets in the source
    fn sheet_names(&mut self) -> Result<Vec<String>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

impl RowSource for Box<dyn RowSource> {
    fn open(&mut self, sheet: Option<&str>) -> Result<RowIter> {
        (**self).open(sheet)
    }

    fn sheet_names(&mut self) -> Result<Vec<String>> {
        (**self).sheet_names()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
