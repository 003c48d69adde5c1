//! API Module
//!
//! HTTP handlers and routing for the birthdays API.
//!
//! # Endpoints
//! - `PUT /hello/:username` - Store a user's date of birth
//! - `GET /hello/:username` - Fetch the birthday greeting for a user
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
