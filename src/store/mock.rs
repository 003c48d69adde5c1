//! Mock User Store
//!
//! In-memory [`UserStore`] double for tests. Records backend call counts and
//! can be primed to fail puts or gets, so tests can assert exactly how much
//! backend traffic the caching decorator generates.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::{User, UserStore};

/// In-memory store double with call counters and injectable failures.
#[derive(Default)]
pub struct MockUserStore {
    users: RwLock<HashMap<String, User>>,
    put_calls: AtomicU32,
    get_calls: AtomicU32,
    fail_puts: AtomicBool,
    fail_gets: AtomicBool,
}

impl MockUserStore {
    /// Creates an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user directly, without counting a put call.
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.username.clone(), user);
    }

    /// Number of put calls the store has received.
    pub fn put_calls(&self) -> u32 {
        self.put_calls.load(Ordering::SeqCst)
    }

    /// Number of get calls the store has received.
    pub fn get_calls(&self) -> u32 {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Makes every subsequent put fail with a backend error.
    pub fn set_fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent get fail with a backend error.
    pub fn set_fail_gets(&self, fail: bool) {
        self.fail_gets.store(fail, Ordering::SeqCst);
    }

    fn injected_error(message: &'static str) -> StoreError {
        StoreError::Redis(redis::RedisError::from((
            redis::ErrorKind::IoError,
            message,
        )))
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn put(&self, user: &User) -> Result<(), StoreError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(Self::injected_error("injected put failure"));
        }

        self.users
            .write()
            .await
            .insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_gets.load(Ordering::SeqCst) {
            return Err(Self::injected_error("injected get failure"));
        }

        Ok(self.users.read().await.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn joe() -> User {
        User {
            username: "joe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 5, 5).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_mock_put_and_get() {
        let mock = MockUserStore::new();

        mock.put(&joe()).await.unwrap();
        let fetched = mock.get("joe").await.unwrap();

        assert_eq!(fetched, Some(joe()));
        assert_eq!(mock.put_calls(), 1);
        assert_eq!(mock.get_calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_get_absent() {
        let mock = MockUserStore::new();
        assert_eq!(mock.get("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_mock_insert_does_not_count() {
        let mock = MockUserStore::new();
        mock.insert(joe()).await;
        assert_eq!(mock.put_calls(), 0);
    }

    #[tokio::test]
    async fn test_mock_injected_failures() {
        let mock = MockUserStore::new();

        mock.set_fail_puts(true);
        assert!(mock.put(&joe()).await.is_err());

        mock.set_fail_gets(true);
        assert!(mock.get("joe").await.is_err());
    }
}
