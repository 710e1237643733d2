//! URL cleanup endpoint

use axum::extract::Json as ExtractJson;
use axum::http::StatusCode;
use axum::response::Json;

use crate::cleaner::{self, CleanerError};
use crate::web::types::{UrlCleanupRequest, UrlCleanupResponse};

/// Cleans a URL up with either the canonical, redirection, or combined
/// (`all`) operation.
pub async fn cleanup_url(
    ExtractJson(request): ExtractJson<UrlCleanupRequest>,
) -> Result<Json<UrlCleanupResponse>, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!(
        "url cleanup requested: {} (operation: {})",
        request.url,
        request.operation
    );

    match cleaner::clean_url(&request.url, &request.operation) {
        Ok(processed_url) => Ok(Json(UrlCleanupResponse { processed_url })),
        Err(err) => {
            tracing::error!("failed to clean url up: {}", err);
            Err((
                status_code(&err),
                Json(serde_json::json!({
                    "error": err.to_string(),
                    "message": "failed to clean url up",
                })),
            ))
        }
    }
}

fn status_code(err: &CleanerError) -> StatusCode {
    match err {
        CleanerError::MalformedUrl(_)
        | CleanerError::InvalidDomain(_)
        | CleanerError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
        // Means a transform produced garbage; never the caller's fault.
        CleanerError::Reparse(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
