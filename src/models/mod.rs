//! Request and Response models for the birthdays API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{validate_username, PutUserRequest};
pub use responses::{ErrorResponse, GreetingResponse, HealthResponse};
