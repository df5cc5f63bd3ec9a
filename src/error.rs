//! Error types for keyqueue.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Unknown key, empty queue, or a bounded wait that ran out.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid wait budget: {0:?} is not a non-negative whole number of seconds")]
    InvalidWaitBudget(String),

    #[error("Missing value: the 'v' query parameter is required")]
    MissingValue,

    /// A primitive was used on a key the caller should have checked first,
    /// or the repository lock was poisoned.
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn not_found(key: impl Into<String>) -> Self {
        Error::NotFound(key.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
