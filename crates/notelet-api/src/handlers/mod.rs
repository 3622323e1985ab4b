//! HTTP handlers.

pub mod notes;

use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub use notes::{
    create_note, delete_all_notes, delete_note, get_note, list_notes, update_note,
};

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unmatched routes.
///
/// Keeps the bare `{"error": ...}` shape rather than the endpoint error
/// envelope; the two shapes are intentionally distinct.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("{} not found", uri) })),
    )
}
