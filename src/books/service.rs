//! Book business logic
//!
//! Validates client input before it reaches the store. Storage errors pass
//! through untouched so the HTTP layer can map them to status codes.

use crate::books::error::{BookError, BookResult};
use crate::books::pagination::{Metadata, Page};
use crate::books::store::BookStore;
use crate::books::types::{Book, BookDraft, BookSearchParams};

pub struct BookService {
    store: BookStore,
}

impl BookService {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// Paged listing ordered by id. An empty result is a normal response,
    /// not an error.
    pub async fn list_books(
        &self,
        params: &BookSearchParams,
        page: &Page,
    ) -> BookResult<(Vec<Book>, Metadata)> {
        self.store.list(params, page).await
    }

    pub async fn get_book(&self, id: &str) -> BookResult<Book> {
        if id.is_empty() {
            return Err(BookError::InvalidId);
        }

        self.store.get(id).await
    }

    pub async fn store_book(&self, draft: BookDraft) -> BookResult<Book> {
        validate_draft(&draft)?;
        self.store.insert(draft).await
    }

    pub async fn update_book(&self, id: &str, draft: BookDraft) -> BookResult<Book> {
        if id.is_empty() {
            return Err(BookError::InvalidId);
        }
        validate_draft(&draft)?;

        self.store.update(id, &draft).await
    }

    pub async fn delete_book(&self, id: &str) -> BookResult<()> {
        if id.is_empty() {
            return Err(BookError::InvalidId);
        }

        self.store.delete(id).await
    }
}

fn validate_draft(draft: &BookDraft) -> BookResult<()> {
    if draft.title.is_empty() {
        return Err(BookError::Validation(
            "title field must not be empty".to_string(),
        ));
    }
    if draft.author.is_empty() {
        return Err(BookError::Validation(
            "author field must not be empty".to_string(),
        ));
    }
    if draft.publish_year <= 0 {
        return Err(BookError::Validation(
            "publish year field must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
