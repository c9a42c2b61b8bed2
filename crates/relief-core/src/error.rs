//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so a caller can always match down to the exact
//! failure kind.

use thiserror::Error;

/// Errors raised by `relief-core` validation and geo math.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("severity {0} is outside the allowed range 1..=10")]
    InvalidSeverity(i32),

    #[error("coordinate ({lat}, {lon}) is non-finite or out of range")]
    NumericDomain { lat: f64, lon: f64 },

    #[error("distance penalty factor {0} must be finite and non-negative")]
    InvalidPenaltyFactor(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `relief-core`.
pub type CoreResult<T> = Result<T, CoreError>;
