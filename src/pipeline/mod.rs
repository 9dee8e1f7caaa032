//! Row pipeline module
//!
//! Two-stage reader/processor pipeline that turns raw rows into
//! transformed rows.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐  bounded mpsc (10)  ┌──────────────┐  oneshot  ┌────────┐
//! │ reader       │────────────────────▶│ processor    │──────────▶│ caller │
//! │ (blocking)   │      RawRow         │ (tokio task) │  rows     │        │
//! └──────────────┘                     └──────────────┘           └────────┘
//! ```
//!
//! The reader closes the handoff when the source is exhausted or fails to
//! open. The processor drains the handoff and sends the completion signal
//! exactly once. Rows keep source order end to end.

mod types;

pub use types::{PipelineOutput, PipelineStats};

use crate::columns::ColumnSpec;
use crate::error::{Error, Result};
use crate::source::RowSource;
use crate::types::{RawRow, TransformedRow};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Capacity of the reader -> processor handoff
pub const HANDOFF_CAPACITY: usize = 10;

/// Single-use pipeline over one row source
#[derive(Debug, Clone)]
pub struct RowPipeline {
    /// Column rules applied by the processor
    columns: Arc<ColumnSpec>,
    /// Discard the first source row
    skip_header: bool,
    /// Sheet to read (None = first sheet)
    sheet: Option<String>,
}

impl RowPipeline {
    /// Create a pipeline that keeps every source row
    pub fn new(columns: Arc<ColumnSpec>) -> Self {
        Self {
            columns,
            skip_header: false,
            sheet: None,
        }
    }

    /// Discard (or keep) the first source row
    #[must_use]
    pub fn with_skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Read a specific sheet
    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Run the pipeline to completion
    ///
    /// Returns every transformed row in source order, or the first source
    /// error with no rows.
    pub async fn run<S>(self, source: S) -> Result<PipelineOutput>
    where
        S: RowSource + 'static,
    {
        let start = Instant::now();
        let description = source.describe();
        debug!("Starting row pipeline for {}", description);

        let (row_tx, row_rx) = mpsc::channel::<RawRow>(HANDOFF_CAPACITY);
        let (done_tx, done_rx) = oneshot::channel::<Vec<TransformedRow>>();

        let sheet = self.sheet;
        let skip_header = self.skip_header;
        let reader = tokio::task::spawn_blocking(move || {
            read_rows(source, sheet.as_deref(), skip_header, row_tx)
        });
        let processor = tokio::spawn(process_rows(self.columns, row_rx, done_tx));

        let rows = done_rx
            .await
            .map_err(|_| Error::pipeline("processor stage stopped before completion"))?;
        processor
            .await
            .map_err(|e| Error::pipeline(format!("processor stage failed: {e}")))?;
        let mut stats = reader
            .await
            .map_err(|e| Error::pipeline(format!("reader stage failed: {e}")))??;

        stats.rows_transformed = rows.len();
        stats.set_duration(start.elapsed().as_millis() as u64);

        debug!(
            "Completed row pipeline for {}: {} rows transformed, {} dropped in {}ms",
            description, stats.rows_transformed, stats.rows_dropped, stats.duration_ms
        );

        Ok(PipelineOutput { rows, stats })
    }
}

/// Reader stage: pull rows from the source and forward them
///
/// Dropping `handoff` on return closes the channel for the processor.
fn read_rows<S: RowSource>(
    mut source: S,
    sheet: Option<&str>,
    skip_header: bool,
    handoff: mpsc::Sender<RawRow>,
) -> Result<PipelineStats> {
    let mut stats = PipelineStats::new();
    let mut rows = source.open(sheet)?;

    if skip_header && rows.next().is_some() {
        stats.add_read();
        stats.add_skipped();
    }

    for row in rows {
        stats.add_read();
        match row {
            Ok(row) => {
                if handoff.blocking_send(row).is_err() {
                    return Err(Error::pipeline("processor stage closed the handoff"));
                }
            }
            Err(e) => {
                stats.add_dropped();
                warn!("Dropping unreadable row {}: {}", stats.rows_read, e);
            }
        }
    }

    Ok(stats)
}

/// Processor stage: resolve each raw row, then signal completion
async fn process_rows(
    columns: Arc<ColumnSpec>,
    mut handoff: mpsc::Receiver<RawRow>,
    done: oneshot::Sender<Vec<TransformedRow>>,
) {
    let mut rows = Vec::new();
    while let Some(raw) = handoff.recv().await {
        rows.push(columns.resolve(&raw));
    }

    if done.send(rows).is_err() {
        debug!("Pipeline caller went away before completion");
    }
}
