//! The `ReportWriter` trait implemented by all report backends.

use crate::{Report, ReportResult};

/// Trait implemented by the text, CSV, and JSON writers.
pub trait ReportWriter {
    /// Write one report.
    fn write_report(&mut self, report: &Report) -> ReportResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
