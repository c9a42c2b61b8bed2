//! JSON output backend.

use std::io::Write;

use crate::report::Report;
use crate::writer::ReportWriter;
use crate::ReportResult;

/// Serialises each report as pretty-printed JSON followed by a newline.
pub struct JsonReportWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> ReportResult<()> {
        serde_json::to_writer_pretty(&mut self.out, report)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
