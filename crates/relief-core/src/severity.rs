//! Disaster severity and the zone classification derived from it.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Severity of an affected area, guaranteed to lie in `1..=10`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "u8"))]
pub struct Severity(u8);

impl Severity {
    pub const MIN: Severity = Severity(1);
    pub const MAX: Severity = Severity(10);

    /// Validate a raw severity value.
    pub fn new(value: i32) -> CoreResult<Self> {
        if (Self::MIN.0 as i32..=Self::MAX.0 as i32).contains(&value) {
            Ok(Severity(value as u8))
        } else {
            Err(CoreError::InvalidSeverity(value))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zone this severity falls into.
    #[inline]
    pub fn zone(self) -> Zone {
        Zone::for_severity(self)
    }
}

impl TryFrom<i32> for Severity {
    type Error = CoreError;
    fn try_from(value: i32) -> CoreResult<Self> {
        Severity::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> u8 {
        s.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

// ── Zone ──────────────────────────────────────────────────────────────────────

/// Three-tier classification used for colour-coding by presentation layers.
///
/// | Zone     | Severity | Colour  |
/// |----------|----------|---------|
/// | `High`   | 8..=10   | red     |
/// | `Medium` | 5..=7    | orange  |
/// | `Low`    | 1..=4    | green   |
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Zone {
    High,
    Medium,
    Low,
}

impl Zone {
    pub fn for_severity(severity: Severity) -> Zone {
        match severity.get() {
            8.. => Zone::High,
            5..=7 => Zone::Medium,
            _ => Zone::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::High => "high",
            Zone::Medium => "medium",
            Zone::Low => "low",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Zone::High => "red",
            Zone::Medium => "orange",
            Zone::Low => "green",
        }
    }

    /// Name used by the plain-text allocation report.
    pub fn legacy_name(self) -> &'static str {
        match self {
            Zone::High => "RED ZONE",
            Zone::Medium => "YELLOW ZONE",
            Zone::Low => "GREEN ZONE",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
