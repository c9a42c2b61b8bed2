//! `relief-session` — one relief-allocation workspace.
//!
//! A [`ReliefSession`] owns the [`NetworkModel`](relief_network::NetworkModel),
//! the [`PriorityEngine`](relief_priority::PriorityEngine) built from the
//! session config and a [`PathFinder`](relief_network::PathFinder).  It
//! strings them together:
//!
//! ```text
//! allocate(selection):
//!   ① Rank      — PriorityEngine::compute over every area.
//!   ② Route     — one single-source search from the relief center to the
//!                 areas picked by `selection` (none / top only / all).
//!   ③ Assemble  — build_report(ranked, paths).
//! ```
//!
//! Areas the center cannot reach show up as `PathOutcome::NoPath`; every
//! other failure is returned to the caller.
//!
//! `dispatch()` runs the same pass over every area and then marks each
//! reachable one as served in the network.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use relief_core::ReliefConfig;
//! use relief_session::{PathSelection, SessionBuilder};
//!
//! let mut session = SessionBuilder::new(ReliefConfig::default()).build()?;
//! session.load_input_file(Path::new("input.txt"))?;
//! let report = session.allocate(PathSelection::All)?;
//! print!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod session;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use session::{PathSelection, ReliefSession};
