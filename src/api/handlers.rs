//! API Handlers
//!
//! HTTP request handlers for each birthdays API endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::greeting::birthday_message;
use crate::models::{validate_username, GreetingResponse, HealthResponse, PutUserRequest};
use crate::store::{User, UserStore};

/// Application state shared across all handlers.
///
/// Holds the user store behind a trait object so tests can swap the cached
/// redis store for a mock backend.
#[derive(Clone)]
pub struct AppState {
    /// The user store all handlers read and write through
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

/// Handler for PUT /hello/:username
///
/// Validates the username and date of birth, then stores the user.
/// Responds 204 No Content on success.
pub async fn put_hello_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(req): Json<PutUserRequest>,
) -> Result<StatusCode> {
    if let Some(error_msg) = validate_username(&username) {
        return Err(ApiError::InvalidRequest(error_msg));
    }
    if let Some(error_msg) = req.validate(Utc::now().date_naive()) {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let user = User {
        username,
        date_of_birth: req.date_of_birth,
    };
    state.store.put(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /hello/:username
///
/// Fetches the user and responds with their birthday greeting.
pub async fn get_hello_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<GreetingResponse>> {
    if let Some(error_msg) = validate_username(&username) {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let user = state
        .store
        .get(&username)
        .await?
        .ok_or(ApiError::NotFound(username))?;

    Ok(Json(GreetingResponse::new(birthday_message(&user))))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
