//! `relief-core` — foundational types for the relief allocation engine.
//!
//! This crate is a dependency of every other `relief-*` crate.  It has no
//! `relief-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `GeoPoint`, haversine `distance_km`                   |
//! | [`severity`]    | `Severity` (1..=10), `Zone` classification           |
//! | [`config`]      | `ReliefConfig`, `CoordinatePolicy`, `CenterLinkPolicy`|
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (TOML config |
//! |         | loading, JSON reports).                                    |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod severity;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CenterLinkPolicy, CoordinatePolicy, ReliefConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, distance_km};
pub use ids::NodeId;
pub use severity::{Severity, Zone};
