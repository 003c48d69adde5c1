//! User Store Module
//!
//! Defines the [`User`] entity, the [`UserStore`] capability, and its
//! implementations: the redis backend, the in-memory caching decorator, and a
//! mock double for tests.

mod cached;
mod mock;
mod redis;

// Re-export public types
pub use cached::CachedUserStore;
pub use mock::MockUserStore;
pub use redis::RedisUserStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A stored user: username plus date of birth.
///
/// Immutable value; an update replaces the whole record. The date of birth
/// carries no time-of-day or timezone component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The username the record is keyed by
    pub username: String,
    /// The user's date of birth
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: NaiveDate,
}

/// Storage capability for user records.
///
/// Implemented by the redis backend, the caching decorator, and test doubles.
/// `Ok(None)` from [`get`](UserStore::get) means "no record for this username"
/// and is distinct from an error outcome.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists or overwrites the user's record.
    async fn put(&self, user: &User) -> Result<(), StoreError>;

    /// Fetches a user by username, or `None` if no record exists.
    async fn get(&self, username: &str) -> Result<Option<User>, StoreError>;
}
