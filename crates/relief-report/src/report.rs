//! Report value types and the assembler.

use std::collections::HashMap;

use serde::Serialize;

use relief_core::Zone;
use relief_network::Route;
use relief_priority::PriorityRecord;

/// Result of routing from the relief center to one area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Found { path: Vec<String>, total_km: f64 },
    /// The area exists but no road chain reaches it.
    NoPath,
    /// No path was computed for this area.
    NotRequested,
}

impl From<Route> for PathOutcome {
    fn from(route: Route) -> Self {
        PathOutcome::Found { path: route.path, total_km: route.total_km }
    }
}

/// One ranked area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    /// 1-based position in the priority order.
    pub rank:                    usize,
    pub name:                    String,
    pub severity:                u8,
    pub zone:                    Zone,
    pub distance_from_center_km: f64,
    pub priority_score:          f64,
    pub lat:                     f64,
    pub lon:                     f64,
    pub path:                    PathOutcome,
    /// Relief has been delivered to this area.
    pub served:                  bool,
}

/// Area counts per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ZoneSummary {
    pub high:   usize,
    pub medium: usize,
    pub low:    usize,
}

impl ZoneSummary {
    fn count(&mut self, zone: Zone) {
        match zone {
            Zone::High => self.high += 1,
            Zone::Medium => self.medium += 1,
            Zone::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Everything a presentation layer needs to show one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub zones:   ZoneSummary,
}

impl Report {
    /// The highest-priority area, if any.
    pub fn top(&self) -> Option<&ReportEntry> {
        self.entries.first()
    }

    pub fn entry(&self, name: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of areas marked served.
    pub fn served_count(&self) -> usize {
        self.entries.iter().filter(|e| e.served).count()
    }

    /// Entries whose path was computed and came back empty-handed.
    pub fn unreachable(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.path == PathOutcome::NoPath)
    }
}

/// Package a ranked list and per-area paths into a [`Report`].
///
/// Entries keep the order of `ranked`.  Areas missing from `paths_by_area`
/// get [`PathOutcome::NotRequested`].
pub fn build_report(
    ranked: &[PriorityRecord],
    paths_by_area: &HashMap<String, PathOutcome>,
) -> Report {
    let mut zones = ZoneSummary::default();

    let entries = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let zone = r.zone();
            zones.count(zone);
            ReportEntry {
                rank: i + 1,
                name: r.name.clone(),
                severity: r.severity.get(),
                zone,
                distance_from_center_km: r.distance_km,
                priority_score: r.score,
                lat: r.position.lat,
                lon: r.position.lon,
                path: paths_by_area
                    .get(&r.name)
                    .cloned()
                    .unwrap_or(PathOutcome::NotRequested),
                served: r.served,
            }
        })
        .collect();

    Report { entries, zones }
}
