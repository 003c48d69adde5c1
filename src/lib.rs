//! Birthdays API - an HTTP service for birthday greetings
//!
//! Stores each username's date of birth in redis and answers lookups with a
//! greeting saying whether today is the birthday or how many days remain until
//! the next one. A read-through/write-through in-memory cache with sliding
//! expiry sits between the handlers and redis.

pub mod api;
pub mod config;
pub mod error;
pub mod greeting;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
