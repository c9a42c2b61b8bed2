//! `relief-network` — area/road model, spatial lookup, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `NetworkModel` (adjacency list + R-tree), `Area`, `Road`    |
//! | [`router`]  | `PathFinder` trait, `Route`, `DijkstraPathFinder`          |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use network::{Area, Link, NetworkModel, Road, RoadKind};
pub use router::{DijkstraPathFinder, PathFinder, Route};
