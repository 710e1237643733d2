//! Book endpoints

use std::sync::Arc;

use axum::extract::{Json as ExtractJson, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::books::{BookDraft, BookError, BookSearchParams, Page};
use crate::web::types::{
    AppState, BookListQuery, BookListResponse, BookResponse, MessageResponse,
};

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

pub async fn get_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BookListQuery>,
) -> Result<Json<BookListResponse>, ErrorResponse> {
    let page = Page::new(query.page, query.limit);
    let params = BookSearchParams {
        search: query.search,
    };

    match state.books.list_books(&params, &page).await {
        Ok((data, metadata)) => Ok(Json(BookListResponse {
            message: "books fetched".to_string(),
            data,
            metadata,
        })),
        Err(err) => Err(error_response(err, "failed to get book(s)")),
    }
}

pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookResponse>, ErrorResponse> {
    match state.books.get_book(&id).await {
        Ok(data) => Ok(Json(BookResponse {
            message: "book data fetched".to_string(),
            data,
        })),
        Err(err) => Err(error_response(err, "failed to get book data")),
    }
}

pub async fn store_book(
    State(state): State<Arc<AppState>>,
    ExtractJson(payload): ExtractJson<BookDraft>,
) -> Result<Json<BookResponse>, ErrorResponse> {
    match state.books.store_book(payload).await {
        Ok(data) => Ok(Json(BookResponse {
            message: "book data stored".to_string(),
            data,
        })),
        Err(err) => Err(error_response(err, "failed to store book data")),
    }
}

pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ExtractJson(payload): ExtractJson<BookDraft>,
) -> Result<Json<BookResponse>, ErrorResponse> {
    match state.books.update_book(&id, payload).await {
        Ok(data) => Ok(Json(BookResponse {
            message: "book data updated".to_string(),
            data,
        })),
        Err(err) => Err(error_response(err, "failed to update book data")),
    }
}

pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    match state.books.delete_book(&id).await {
        Ok(()) => Ok(Json(MessageResponse {
            message: "book data deleted".to_string(),
        })),
        Err(err) => Err(error_response(err, "failed to delete book data")),
    }
}

fn error_response(err: BookError, message: &str) -> ErrorResponse {
    tracing::error!("{}: {}", message, err);
    (
        status_code(&err),
        Json(serde_json::json!({
            "error": err.to_string(),
            "message": message,
        })),
    )
}

fn status_code(err: &BookError) -> StatusCode {
    match err {
        BookError::NotFound => StatusCode::NOT_FOUND,
        BookError::InvalidId | BookError::Validation(_) => StatusCode::BAD_REQUEST,
        BookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
