//! Ranked output of the priority engine.

use relief_core::{GeoPoint, Severity, Zone};

/// One area's standing in a priority computation.
///
/// Recomputed on every call; never stored in the network model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriorityRecord {
    pub name:        String,
    pub severity:    Severity,
    /// Haversine distance from the relief center.
    pub distance_km: f64,
    pub score:       f64,
    pub position:    GeoPoint,
    /// Copied from the area at ranking time.
    pub served:      bool,
}

impl PriorityRecord {
    /// Zone derived from severity; the single source of truth for
    /// colour-coding.
    #[inline]
    pub fn zone(&self) -> Zone {
        self.severity.zone()
    }
}
