//! MongoDB book store
//!
//! Documents keep the `deleted_at` audit column from the original schema:
//! deletes set it instead of removing the document, and every read filters
//! on `deleted_at: null`.

use bson::oid::ObjectId;
use bson::{doc, DateTime, Document};
use futures::stream::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::books::error::{BookError, BookResult};
use crate::books::pagination::{Metadata, Page};
use crate::books::types::{Book, BookDraft, BookSearchParams};

/// Book document as stored in MongoDB.
#[derive(Debug, Serialize, Deserialize)]
struct BookDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    author: String,
    publish_year: i64,
    created_at: DateTime,
    updated_at: DateTime,
    deleted_at: Option<DateTime>,
}

impl BookDocument {
    fn into_book(self) -> Book {
        Book {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: self.title,
            author: self.author,
            publish_year: self.publish_year,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.to_chrono(),
        }
    }
}

pub struct MongoBookStore {
    collection: Collection<BookDocument>,
}

impl MongoBookStore {
    pub fn new(db: Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<BookDocument>(collection_name),
        }
    }

    pub async fn list(
        &self,
        params: &BookSearchParams,
        page: &Page,
    ) -> BookResult<(Vec<Book>, Metadata)> {
        let filter = filter_for(params);

        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(storage_err)?;

        let mut cursor = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(page.offset())
            .limit(page.limit as i64)
            .await
            .map_err(storage_err)?;

        let mut data = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(storage_err)? {
            data.push(document.into_book());
        }

        Ok((data, Metadata::compute(total, page)))
    }

    pub async fn get(&self, id: &str) -> BookResult<Book> {
        let found = self
            .collection
            .find_one(doc! { "_id": parse_object_id(id)?, "deleted_at": null })
            .await
            .map_err(storage_err)?;

        found.map(BookDocument::into_book).ok_or(BookError::NotFound)
    }

    pub async fn insert(&self, draft: BookDraft) -> BookResult<Book> {
        let now = DateTime::now();
        let mut document = BookDocument {
            id: None,
            title: draft.title,
            author: draft.author,
            publish_year: draft.publish_year,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(storage_err)?;

        document.id = result.inserted_id.as_object_id();
        Ok(document.into_book())
    }

    pub async fn update(&self, id: &str, draft: &BookDraft) -> BookResult<Book> {
        let filter = doc! { "_id": parse_object_id(id)?, "deleted_at": null };
        let update = doc! {
            "$set": {
                "title": draft.title.as_str(),
                "author": draft.author.as_str(),
                "publish_year": draft.publish_year,
                "updated_at": DateTime::now(),
            }
        };

        let updated = self
            .collection
            .find_one_and_update(filter, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(storage_err)?;

        updated.map(BookDocument::into_book).ok_or(BookError::NotFound)
    }

    /// Soft delete: stamps `deleted_at` and leaves the document in place.
    pub async fn delete(&self, id: &str) -> BookResult<()> {
        let filter = doc! { "_id": parse_object_id(id)?, "deleted_at": null };
        let update = doc! { "$set": { "deleted_at": DateTime::now() } };

        let result = self
            .collection
            .update_one(filter, update)
            .await
            .map_err(storage_err)?;

        // No match means the id is unknown or the document is already gone.
        if result.matched_count < 1 {
            return Err(BookError::NotFound);
        }

        Ok(())
    }
}

fn filter_for(params: &BookSearchParams) -> Document {
    match params.search.as_deref().filter(|search| !search.is_empty()) {
        Some(search) => doc! {
            "deleted_at": null,
            "$or": [
                { "title": { "$regex": search, "$options": "i" } },
                { "author": { "$regex": search, "$options": "i" } },
            ],
        },
        None => doc! { "deleted_at": null },
    }
}

fn parse_object_id(id: &str) -> BookResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| BookError::InvalidId)
}

fn storage_err(err: mongodb::error::Error) -> BookError {
    BookError::Storage(err.to_string())
}
