//! `relief-priority` — rank affected areas for relief distribution.
//!
//! ```text
//! score = severity * 10 - distance_from_center_km * distance_penalty_factor
//! ```
//!
//! Records are sorted by score, highest first; equal scores keep area
//! insertion order.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use relief_priority::PriorityEngine;
//!
//! let ranked = PriorityEngine::from_config(&config)?.compute(&network)?;
//! for (rank, r) in ranked.iter().enumerate() {
//!     println!("{}. {} ({}, score {:.1})", rank + 1, r.name, r.zone(), r.score);
//! }
//! ```

pub mod engine;
pub mod error;
pub mod record;

#[cfg(test)]
mod tests;

pub use engine::{PriorityEngine, compute_priority, priority_score};
pub use error::{PriorityError, PriorityResult};
pub use record::PriorityRecord;
