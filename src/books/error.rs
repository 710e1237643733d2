//! Book resource error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("data not found")]
    NotFound,

    #[error("invalid id")]
    InvalidId,

    /// A client-supplied book payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// The storage backend failed; never caused by client input.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type BookResult<T> = Result<T, BookError>;
