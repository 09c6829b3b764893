//! Unified error handling.
//!
//! Provides a unified `AppError` type converted to a JSON error envelope at
//! the routing boundary. All route handlers return `Result<T, AppError>`.
//! No domain failure crashes the process; only fatal startup
//! misconfiguration terminates it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the forum backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Document store operation failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Request failed a presence or format check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Credentials did not match.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource already exists.
    #[error("Conflict: {0}")]
    Conflict(String),
}

/// JSON error envelope returned for every failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        // Log the underlying cause server-side; don't expose storage
        // details to clients
        let message = match &self {
            Self::Store(err) => {
                tracing::error!(error = %err, "Request failed in document store");
                "internal server error".to_string()
            }
            Self::Validation(msg) | Self::NotFound(msg) | Self::Unauthorized(msg) => msg.clone(),
            Self::Conflict(msg) => msg.clone(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
