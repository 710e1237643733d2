//! In-process book store
//!
//! Used by tests and as the startup fallback when MongoDB is not
//! reachable. Ids are counter-derived numeric strings; deletes are hard
//! deletes since there is no audit trail to preserve in memory.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::books::error::{BookError, BookResult};
use crate::books::pagination::{Metadata, Page};
use crate::books::types::{Book, BookDraft, BookSearchParams};

#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<BTreeMap<u64, Book>>,
    next_id: AtomicU64,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(
        &self,
        params: &BookSearchParams,
        page: &Page,
    ) -> BookResult<(Vec<Book>, Metadata)> {
        let books = self.read()?;

        let matching: Vec<&Book> = books
            .values()
            .filter(|book| matches_search(book, params))
            .collect();

        let total = matching.len() as u64;
        let data = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok((data, Metadata::compute(total, page)))
    }

    pub fn get(&self, id: &str) -> BookResult<Book> {
        let key = parse_id(id)?;
        self.read()?.get(&key).cloned().ok_or(BookError::NotFound)
    }

    pub fn insert(&self, draft: BookDraft) -> BookResult<Book> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let now = Utc::now();
        let book = Book {
            id: id.to_string(),
            title: draft.title,
            author: draft.author,
            publish_year: draft.publish_year,
            created_at: now,
            updated_at: now,
        };

        self.write()?.insert(id, book.clone());
        Ok(book)
    }

    pub fn update(&self, id: &str, draft: &BookDraft) -> BookResult<Book> {
        let key = parse_id(id)?;
        let mut books = self.write()?;
        let book = books.get_mut(&key).ok_or(BookError::NotFound)?;

        book.title = draft.title.clone();
        book.author = draft.author.clone();
        book.publish_year = draft.publish_year;
        book.updated_at = Utc::now();

        Ok(book.clone())
    }

    pub fn delete(&self, id: &str) -> BookResult<()> {
        let key = parse_id(id)?;
        match self.write()?.remove(&key) {
            Some(_) => Ok(()),
            None => Err(BookError::NotFound),
        }
    }

    fn read(&self) -> BookResult<RwLockReadGuard<'_, BTreeMap<u64, Book>>> {
        self.books
            .read()
            .map_err(|_| BookError::Storage("book store lock poisoned".to_string()))
    }

    fn write(&self) -> BookResult<RwLockWriteGuard<'_, BTreeMap<u64, Book>>> {
        self.books
            .write()
            .map_err(|_| BookError::Storage("book store lock poisoned".to_string()))
    }
}

fn parse_id(id: &str) -> BookResult<u64> {
    id.parse::<u64>().map_err(|_| BookError::InvalidId)
}

fn matches_search(book: &Book, params: &BookSearchParams) -> bool {
    match params.search.as_deref() {
        Some(search) if !search.is_empty() => {
            let needle = search.to_lowercase();
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        }
        _ => true,
    }
}
