use thiserror::Error;

use relief_network::NetworkError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: coordinates given for unknown area {name:?}")]
    UnknownArea { line: usize, name: String },

    #[error("line {line}: cannot split {text:?} into two known endpoints ({candidates} candidate splits)")]
    AmbiguousRoad { line: usize, text: String, candidates: usize },

    #[error("line {line}: {source}")]
    Network { line: usize, source: NetworkError },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
