//! Error mapping from storage and request failures to API responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::wire::{ErrorBody, ErrorObject};

/// Handler-boundary error type.
///
/// Every failure a handler can produce maps onto one of these; the
/// `IntoResponse` impl is the single place the wire error shape is built.
#[derive(Debug)]
pub enum ApiError {
    /// The path identifier could not be parsed.
    InvalidId(String),
    /// Update/delete targeted a note that does not exist.
    NotFound(String),
    /// The request payload is structurally invalid.
    BadRequest(String),
    /// Any other store failure. The external taxonomy stays coarse:
    /// connectivity, constraint, and timeout failures all collapse here.
    Database(notelet_core::Error),
}

impl From<notelet_core::Error> for ApiError {
    fn from(err: notelet_core::Error) -> Self {
        match err {
            notelet_core::Error::InvalidId(raw) => ApiError::InvalidId(raw),
            notelet_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            notelet_core::Error::NoteNotFound(id) => ApiError::NotFound(id.to_string()),
            other => ApiError::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match self {
            ApiError::InvalidId(id) => ErrorObject::invalid_id(&id),
            ApiError::NotFound(id) => ErrorObject::note_not_found(&id),
            ApiError::BadRequest(msg) => ErrorObject::malformed_request(msg),
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Store operation failed");
                ErrorObject::server_error()
            }
        };
        let status = error
            .status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(ErrorBody {
            errors: vec![error],
        });
        (status, body).into_response()
    }
}
