//! CSV output backend.
//!
//! One row per ranked area:
//!
//! ```csv
//! rank,name,severity,zone,distance_from_center_km,priority_score,lat,lon,path,path_km,served
//! 1,Area A,9,high,5.000,85.000,28.6579,77.2295,Relief Center > Area A,10.000,true
//! ```
//!
//! `path` is empty when no path was requested and `unreachable` when the
//! area is disconnected; `path_km` is empty in both cases.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use log::debug;

use crate::report::{PathOutcome, Report};
use crate::writer::ReportWriter;
use crate::ReportResult;

const HEADER: [&str; 11] = [
    "rank",
    "name",
    "severity",
    "zone",
    "distance_from_center_km",
    "priority_score",
    "lat",
    "lon",
    "path",
    "path_km",
    "served",
];

/// Writes ranked areas as CSV rows.
pub struct CsvReportWriter<W: Write> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvReportWriter<File> {
    /// Open (or create) `path` and write the header row.
    pub fn new(path: &Path) -> ReportResult<Self> {
        debug!("writing CSV report to {}", path.display());
        Self::from_writer(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvReportWriter<W> {
    /// Wrap an existing sink and write the header row.
    pub fn from_sink(sink: W) -> ReportResult<Self> {
        Self::from_writer(Writer::from_writer(sink))
    }

    fn from_writer(mut rows: Writer<W>) -> ReportResult<Self> {
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the sink.
    pub fn into_inner(self) -> ReportResult<W> {
        self.rows.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> ReportResult<()> {
        for e in &report.entries {
            let (path, path_km) = match &e.path {
                PathOutcome::Found { path, total_km } => (path.join(" > "), format!("{total_km:.3}")),
                PathOutcome::NoPath => ("unreachable".to_owned(), String::new()),
                PathOutcome::NotRequested => (String::new(), String::new()),
            };
            self.rows.write_record(&[
                e.rank.to_string(),
                e.name.clone(),
                e.severity.to_string(),
                e.zone.label().to_owned(),
                format!("{:.3}", e.distance_from_center_km),
                format!("{:.3}", e.priority_score),
                format!("{:.4}", e.lat),
                format!("{:.4}", e.lon),
                path,
                path_km,
                e.served.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
