//! Cleanup error types

use thiserror::Error;

/// Errors produced by the URL cleanup engine.
///
/// The first three variants are caller-input errors; `Reparse` signals a
/// logic defect (an assembled URL no longer parses) and is reported
/// distinctly so it never gets blamed on the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CleanerError {
    /// The input string is not a syntactically valid absolute URL.
    #[error("malformed url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// Redirection was requested for a host outside the byfood domain family.
    #[error("invalid domain url: {0}")]
    InvalidDomain(String),

    /// The operation string matches none of the recognized variants.
    #[error("invalid operation key: {0}")]
    InvalidOperation(String),

    /// A URL assembled by a transform failed to re-parse.
    #[error("cleaned url failed to re-parse: {0}")]
    Reparse(url::ParseError),
}

pub type CleanerResult<T> = Result<T, CleanerError>;
