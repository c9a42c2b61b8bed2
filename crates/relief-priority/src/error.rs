use thiserror::Error;

use relief_core::CoreError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriorityError {
    #[error("no areas registered; nothing to prioritize")]
    EmptyNetwork,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type PriorityResult<T> = Result<T, PriorityError>;
