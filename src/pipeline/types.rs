//! Pipeline types
//!
//! Statistics and output of one pipeline run.

use crate::types::TransformedRow;

/// Statistics from a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Rows pulled from the source, header included
    pub rows_read: usize,
    /// Header rows discarded
    pub rows_skipped: usize,
    /// Rows that failed to read and were dropped
    pub rows_dropped: usize,
    /// Rows transformed by the processor stage
    pub rows_transformed: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl PipelineStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a row pulled from the source
    pub fn add_read(&mut self) {
        self.rows_read += 1;
    }

    /// Count a skipped header row
    pub fn add_skipped(&mut self) {
        self.rows_skipped += 1;
    }

    /// Count a dropped row
    pub fn add_dropped(&mut self) {
        self.rows_dropped += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Ordered rows produced by a completed pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// Transformed rows in source order
    pub rows: Vec<TransformedRow>,
    /// Run statistics
    pub stats: PipelineStats,
}
