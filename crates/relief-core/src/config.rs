//! Engine configuration.
//!
//! # Legacy behaviours
//!
//! Two historical front-ends disagreed on how areas get coordinates, how the
//! relief center is wired into the road graph, and how strongly distance
//! penalises the priority score.  Rather than pick one silently, each of
//! these is an explicit field here:
//!
//! | Field                     | File-driven (default) | Desktop (`legacy_desktop`) |
//! |---------------------------|-----------------------|----------------------------|
//! | `coordinate_policy`       | `Explicit` at (0, 0)  | `Grid`, 0.08° step, 4 rows |
//! | `center_links`            | `Manual`              | `AutoHaversine`            |
//! | `distance_penalty_factor` | 1.0                   | 0.1                        |

use crate::{CoreError, CoreResult, GeoPoint};

/// Default relief-center location (New Delhi).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(28.6129, 77.2295);

/// Default name of the relief-center node.
pub const DEFAULT_CENTER_NAME: &str = "Relief Center";

// ── CoordinatePolicy ──────────────────────────────────────────────────────────

/// How `add_area_auto` picks a position for an area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CoordinatePolicy {
    /// Coordinates come from the caller.  Areas added without any are parked
    /// at `fallback` until updated.
    Explicit { fallback: GeoPoint },

    /// The n-th area is laid out on a grid: `n % rows` steps north of
    /// `origin` and `n / rows` steps east.
    Grid {
        origin:   GeoPoint,
        step_deg: f64,
        rows:     u32,
    },
}

impl CoordinatePolicy {
    /// Position for the area that would be registered with `area_index`
    /// areas already present.
    pub fn position_for(&self, area_index: usize) -> GeoPoint {
        match *self {
            CoordinatePolicy::Explicit { fallback } => fallback,
            CoordinatePolicy::Grid { origin, step_deg, rows } => {
                let rows = rows.max(1) as usize;
                let lat_steps = (area_index % rows) as f64;
                let lon_steps = (area_index / rows) as f64;
                origin.offset(lat_steps * step_deg, lon_steps * step_deg)
            }
        }
    }

    fn validate(&self) -> CoreResult<()> {
        match *self {
            CoordinatePolicy::Explicit { fallback } => {
                fallback.validate()?;
            }
            CoordinatePolicy::Grid { origin, step_deg, rows } => {
                origin.validate()?;
                if !step_deg.is_finite() || step_deg <= 0.0 {
                    return Err(CoreError::Config(format!(
                        "grid step must be a positive number of degrees, got {step_deg}"
                    )));
                }
                if rows == 0 {
                    return Err(CoreError::Config("grid rows must be at least 1".into()));
                }
            }
        }
        Ok(())
    }
}

impl Default for CoordinatePolicy {
    fn default() -> Self {
        CoordinatePolicy::Explicit { fallback: GeoPoint::new(0.0, 0.0) }
    }
}

// ── CenterLinkPolicy ──────────────────────────────────────────────────────────

/// Whether the relief center is wired to areas automatically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CenterLinkPolicy {
    /// Only roads declared by the caller touch the center.
    #[default]
    Manual,
    /// Every area gets a center road weighted by its haversine distance.
    /// Declared roads on the same pair take precedence.
    AutoHaversine,
}

// ── ReliefConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the session builder.  Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReliefConfig {
    /// Name of the relief-center node.  Reserved: no area may use it.
    pub center_name: String,

    /// Fixed relief-center location.
    pub center: GeoPoint,

    /// Multiplier applied to distance-from-center in the priority score:
    /// `score = severity * 10 - distance_km * distance_penalty_factor`.
    pub distance_penalty_factor: f64,

    pub coordinate_policy: CoordinatePolicy,

    pub center_links: CenterLinkPolicy,
}

impl ReliefConfig {
    /// Configuration reproducing the desktop front-end: grid-placed areas
    /// around the center, automatic center roads, and a `d / 10` penalty.
    pub fn legacy_desktop() -> Self {
        Self {
            coordinate_policy: CoordinatePolicy::Grid {
                origin:   DEFAULT_CENTER,
                step_deg: 0.08,
                rows:     4,
            },
            center_links: CenterLinkPolicy::AutoHaversine,
            distance_penalty_factor: 0.1,
            ..Self::default()
        }
    }

    /// Check every field; the network model refuses an invalid config.
    pub fn validate(&self) -> CoreResult<()> {
        if self.center_name.trim().is_empty() {
            return Err(CoreError::Config("center name must not be empty".into()));
        }
        self.center.validate()?;
        validate_penalty_factor(self.distance_penalty_factor)?;
        self.coordinate_policy.validate()
    }
}

impl Default for ReliefConfig {
    fn default() -> Self {
        Self {
            center_name:             DEFAULT_CENTER_NAME.to_owned(),
            center:                  DEFAULT_CENTER,
            distance_penalty_factor: 1.0,
            coordinate_policy:       CoordinatePolicy::default(),
            center_links:            CenterLinkPolicy::default(),
        }
    }
}

/// A penalty factor must be finite and non-negative.
pub fn validate_penalty_factor(factor: f64) -> CoreResult<f64> {
    if factor.is_finite() && factor >= 0.0 {
        Ok(factor)
    } else {
        Err(CoreError::InvalidPenaltyFactor(factor))
    }
}
