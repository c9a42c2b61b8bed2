use thiserror::Error;

use relief_core::CoreError;
use relief_input::InputError;
use relief_network::NetworkError;
use relief_priority::PriorityError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("prioritization error: {0}")]
    Priority(#[from] PriorityError),

    #[error("input error: {0}")]
    Input(#[from] InputError),
}

pub type SessionResult<T> = Result<T, SessionError>;
