//! `relief-input` — load areas, coordinates, and roads from a text file.
//!
//! # Format
//!
//! ```text
//! # Flood response, day 2
//! AREAS
//! North Camp 9
//! Riverside 4
//!
//! COORDINATES
//! North Camp 28.7041 77.1025
//! Riverside 28.5355 77.3910
//!
//! ROADS
//! Relief Center North Camp 12.5
//! North Camp Riverside 20
//! ```
//!
//! Fields are whitespace-delimited and the trailing fields are numeric, so
//! names may contain spaces.  See [`loader`] for the exact rules.

pub mod error;
pub mod loader;


pub use error::{InputError, InputResult};
pub use loader::{
    AreaRecord, CoordinateRecord, ReliefInput, RoadRecord, load_input_file, parse_input,
};
