//! # ByFood App Library
//!
//! Backend for the byfood book library: a small HTTP API around two
//! concerns.
//!
//! ## Module organization
//!
//! - `cleaner` - URL cleanup engine (canonical / redirection / all)
//! - `books` - book models, validation logic and storage backends
//! - `web` - axum HTTP server, routes and handlers
//! - `env` - typed environment variable access

pub mod books;
pub mod cleaner;
pub mod env;
pub mod web;

// Re-export commonly used items for convenience
pub use books::{Book, BookDraft, BookError, BookService, BookStore};
pub use cleaner::{clean_url, CleanerError, CleanerResult, Operation, ParsedUrl};
