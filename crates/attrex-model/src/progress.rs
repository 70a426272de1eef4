//! Minimal progress-reporting seam.
//!
//! The aggregation core reports coarse events through this trait so that
//! it carries no console or formatting dependency; the CLI drives a real
//! progress bar through it.

/// Receiver for extraction progress events. All methods default to no-ops.
pub trait ExtractProgress {
    /// A document's table scan is about to start.
    fn document_started(&mut self, _document: &str, _tables: usize) {}

    /// One table of the current document was scanned (matched or not).
    fn table_scanned(&mut self) {}

    /// One data row was aggregated into the attribute set.
    fn row_ingested(&mut self) {}

    /// Final duplicate count, reported once after all documents.
    fn duplicates_counted(&mut self, _count: usize) {}
}

/// Progress sink that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ExtractProgress for NoopProgress {}
