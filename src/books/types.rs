//! Book data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book record as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Storage-assigned opaque identifier.
    pub id: String,
    pub title: String,
    pub author: String,
    pub publish_year: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied book payload, used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publish_year: i64,
}

/// Free-text filter for book listings, matched case-insensitively against
/// title or author.
#[derive(Debug, Clone, Default)]
pub struct BookSearchParams {
    pub search: Option<String>,
}
