//! Web route definitions

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::web::handlers::{
    cleanup_url, delete_book, get_book_by_id, get_books, store_book, update_book,
};
use crate::web::types::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/url/cleanup", post(cleanup_url))
        .route("/books", get(get_books).post(store_book))
        .route(
            "/books/:id",
            get(get_book_by_id).put(update_book).delete(delete_book),
        )
}
