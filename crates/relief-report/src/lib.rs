//! `relief-report` — the structured allocation report and its writers.
//!
//! [`build_report`] turns a ranked list plus per-area path results into a
//! [`Report`], the value handed to presentation layers.  Three writers are
//! provided:
//!
//! | Writer             | Output                                               |
//! |--------------------|------------------------------------------------------|
//! | `TextReportWriter` | The plain-text allocation report (`Display` layout)  |
//! | `CsvReportWriter`  | One row per ranked area                              |
//! | `JsonReportWriter` | The whole `Report` as pretty JSON                    |
//!
//! All writers implement [`ReportWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use relief_report::{build_report, CsvReportWriter, ReportWriter};
//!
//! let report = build_report(&ranked, &paths);
//! let mut w = CsvReportWriter::new(Path::new("ranking.csv"))?;
//! w.write_report(&report)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod report;
pub mod text;
pub mod writer;


pub use self::csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use json::JsonReportWriter;
pub use report::{PathOutcome, Report, ReportEntry, ZoneSummary, build_report};
pub use text::TextReportWriter;
pub use writer::ReportWriter;
