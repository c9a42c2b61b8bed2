//! Plain-text allocation report.
//!
//! ```text
//! === DISASTER RELIEF ALLOCATION REPORT ===
//!
//! PRIORITY ORDER FOR RELIEF DISTRIBUTION:
//! ==================================================
//! 1. Area A
//!    Severity: 9/10 | RED ZONE
//!    Distance from Center: 5.0 km
//!    Priority Score: 85.0
//!    Shortest Path: Relief Center → Area A
//!    Path Distance: 10.0 km
//! ------------------------------
//! ```
//!
//! Areas already served get an extra `Status: relief delivered` line, and a
//! `Served: n of m areas` line precedes the zone totals once any area is
//! served.

use std::fmt;
use std::io::Write;

use crate::report::{PathOutcome, Report};
use crate::writer::ReportWriter;
use crate::ReportResult;

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== DISASTER RELIEF ALLOCATION REPORT ===")?;
        writeln!(f)?;
        writeln!(f, "PRIORITY ORDER FOR RELIEF DISTRIBUTION:")?;
        writeln!(f, "{}", "=".repeat(50))?;

        for e in &self.entries {
            writeln!(f, "{}. {}", e.rank, e.name)?;
            writeln!(f, "   Severity: {}/10 | {}", e.severity, e.zone.legacy_name())?;
            writeln!(f, "   Distance from Center: {:.1} km", e.distance_from_center_km)?;
            writeln!(f, "   Priority Score: {:.1}", e.priority_score)?;
            match &e.path {
                PathOutcome::Found { path, total_km } => {
                    writeln!(f, "   Shortest Path: {}", path.join(" → "))?;
                    writeln!(f, "   Path Distance: {total_km:.1} km")?;
                }
                PathOutcome::NoPath => writeln!(f, "   Shortest Path: unreachable")?,
                PathOutcome::NotRequested => {}
            }
            if e.served {
                writeln!(f, "   Status: relief delivered")?;
            }
            writeln!(f, "{}", "-".repeat(30))?;
        }

        writeln!(f)?;
        let served = self.served_count();
        if served > 0 {
            writeln!(f, "Served: {served} of {} areas", self.entries.len())?;
        }
        write!(
            f,
            "Zones: {} red, {} yellow, {} green",
            self.zones.high, self.zones.medium, self.zones.low
        )?;
        writeln!(f)
    }
}

/// Writes the [`Display`](fmt::Display) layout of each report to `W`.
pub struct TextReportWriter<W: Write> {
    out: W,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> ReportResult<()> {
        write!(self.out, "{report}")?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
