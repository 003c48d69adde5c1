//! Error types for the birthdays API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failures reported by a user store backend.
///
/// The caching decorator produces no error kinds of its own; everything a
/// caller sees originated in the backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The redis backend rejected or failed the operation
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// A stored date of birth could not be parsed back into a calendar date
    #[error("invalid stored date of birth: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}

// == API Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No record exists for the requested username
    #[error("user not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The user store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(err) => {
                tracing::error!(error = %err, "user store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
