//! Storage backend dispatch

use crate::books::error::BookResult;
use crate::books::memory::MemoryBookStore;
use crate::books::mongo::MongoBookStore;
use crate::books::pagination::{Metadata, Page};
use crate::books::types::{Book, BookDraft, BookSearchParams};

/// The configured storage backend. Selected once at startup; MongoDB in
/// deployments, the in-process store in tests or when no database is
/// reachable.
pub enum BookStore {
    Mongo(MongoBookStore),
    Memory(MemoryBookStore),
}

impl BookStore {
    pub async fn list(
        &self,
        params: &BookSearchParams,
        page: &Page,
    ) -> BookResult<(Vec<Book>, Metadata)> {
        match self {
            BookStore::Mongo(store) => store.list(params, page).await,
            BookStore::Memory(store) => store.list(params, page),
        }
    }

    pub async fn get(&self, id: &str) -> BookResult<Book> {
        match self {
            BookStore::Mongo(store) => store.get(id).await,
            BookStore::Memory(store) => store.get(id),
        }
    }

    pub async fn insert(&self, draft: BookDraft) -> BookResult<Book> {
        match self {
            BookStore::Mongo(store) => store.insert(draft).await,
            BookStore::Memory(store) => store.insert(draft),
        }
    }

    pub async fn update(&self, id: &str, draft: &BookDraft) -> BookResult<Book> {
        match self {
            BookStore::Mongo(store) => store.update(id, draft).await,
            BookStore::Memory(store) => store.update(id, draft),
        }
    }

    pub async fn delete(&self, id: &str) -> BookResult<()> {
        match self {
            BookStore::Mongo(store) => store.delete(id).await,
            BookStore::Memory(store) => store.delete(id),
        }
    }
}
