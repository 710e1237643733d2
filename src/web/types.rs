//! Web data types

use serde::{Deserialize, Serialize};

use crate::books::{Book, BookService, Metadata};

/// Shared application state
pub struct AppState {
    pub books: BookService,
}

/// URL cleanup request
#[derive(Deserialize)]
pub struct UrlCleanupRequest {
    pub url: String,
    /// One of `canonical`, `redirection`, `all` (case-insensitive).
    pub operation: String,
}

/// URL cleanup response
#[derive(Serialize)]
pub struct UrlCleanupResponse {
    pub processed_url: String,
}

/// Query parameters accepted by the book listing endpoint
#[derive(Deserialize)]
pub struct BookListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

/// Paged book listing response
#[derive(Serialize)]
pub struct BookListResponse {
    pub message: String,
    pub data: Vec<Book>,
    pub metadata: Metadata,
}

/// Single-book response
#[derive(Serialize)]
pub struct BookResponse {
    pub message: String,
    pub data: Book,
}

/// Bare acknowledgement response
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
