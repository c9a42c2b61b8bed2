//! Network-subsystem error type.

use thiserror::Error;

use relief_core::CoreError;

/// Errors produced by `relief-network`.
///
/// A name that was never registered is `UnknownNode`; two registered but
/// disconnected nodes give `NoPathFound`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("road endpoint {0:?} is not a registered area")]
    MissingEndpoint(String),

    #[error("node {0:?} not found in network")]
    UnknownNode(String),

    #[error("no path from {from:?} to {to:?}")]
    NoPathFound { from: String, to: String },

    #[error("road {from:?} - {to:?} has invalid distance {distance_km} km")]
    InvalidDistance { from: String, to: String, distance_km: f64 },

    #[error("{0:?} is reserved for the relief center")]
    ReservedName(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
