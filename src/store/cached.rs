//! Cached User Store Module
//!
//! A read-through/write-through caching decorator over any [`UserStore`].
//! Entries live for a fixed duration with sliding expiration: every cache hit
//! (read or unchanged write) pushes the deadline forward. There is no
//! background sweep; expired entries are reclaimed lazily on the access that
//! finds them, so memory for unaccessed keys is only reclaimed on their next
//! access.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use crate::error::StoreError;
use crate::store::{User, UserStore};

// == Cached User ==
/// A cached user together with its expiry deadline.
#[derive(Debug, Clone)]
struct CachedUser {
    user: User,
    expires_at: Instant,
}

impl CachedUser {
    fn new(user: User, duration: Duration) -> Self {
        Self {
            user,
            expires_at: Instant::now() + duration,
        }
    }
}

// == Cached User Store ==
/// Caching decorator presenting the same contract as the store it wraps.
///
/// The only observable differences from the bare store are bounded staleness
/// (up to the configured duration) and reduced backend call volume. A duration
/// of zero effectively disables caching since every entry expires immediately.
///
/// The cache map is guarded by a single mutex that is never held across
/// backend I/O, so concurrent callers only serialize on brief map accesses.
/// Two concurrent operations on the same username may therefore race; the
/// cache resolves this last-writer-wins, with the backend staying
/// authoritative.
pub struct CachedUserStore<S> {
    inner: Arc<S>,
    cache: Mutex<HashMap<String, CachedUser>>,
    duration: Duration,
}

impl<S: UserStore> CachedUserStore<S> {
    /// Creates a new caching decorator around `inner`.
    ///
    /// # Arguments
    /// * `inner` - The store to delegate to on cache misses and divergent writes
    /// * `duration` - How long an unaccessed entry stays live
    pub fn new(inner: Arc<S>, duration: Duration) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
            duration,
        }
    }
}

#[async_trait]
impl<S: UserStore + 'static> UserStore for CachedUserStore<S> {
    // == Put ==
    /// Persists a user, skipping the backend when the cached date of birth is
    /// calendar-equal to the incoming one.
    ///
    /// On a backend failure any previously cached entry for the username is
    /// removed: the cache must never retain data whose consistency with the
    /// backend is unknown.
    async fn put(&self, user: &User) -> Result<(), StoreError> {
        // Snapshot the cached date of birth; the lock is dropped before any
        // backend call
        let cached_dob = {
            let cache = self.cache.lock().await;
            cache
                .get(&user.username)
                .map(|entry| entry.user.date_of_birth)
        };

        // Unchanged write: refresh the expiry and skip the backend entirely
        if cached_dob == Some(user.date_of_birth) {
            let mut cache = self.cache.lock().await;
            if let Some(entry) = cache.get_mut(&user.username) {
                entry.expires_at = Instant::now() + self.duration;
            }
            trace!(username = %user.username, "unchanged put, cache refreshed");
            return Ok(());
        }

        match self.inner.put(user).await {
            Ok(()) => {
                let mut cache = self.cache.lock().await;
                cache.insert(
                    user.username.clone(),
                    CachedUser::new(user.clone(), self.duration),
                );
                trace!(username = %user.username, "put forwarded to backend, cache updated");
                Ok(())
            }
            Err(err) => {
                // The backend rejected the write; a previously cached value
                // for this username can no longer be trusted
                if cached_dob.is_some() {
                    let mut cache = self.cache.lock().await;
                    cache.remove(&user.username);
                    debug!(username = %user.username, "backend put failed, stale entry evicted");
                }
                Err(err)
            }
        }
    }

    // == Get ==
    /// Fetches a user, serving live cache entries without touching the backend.
    ///
    /// A hit slides the expiry forward; an expired entry is removed before the
    /// backend is consulted. Absent results are never cached.
    async fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        {
            let mut cache = self.cache.lock().await;
            if let Some(entry) = cache.get_mut(username) {
                if entry.expires_at > Instant::now() {
                    // Sliding expiration: a read pushes the deadline forward
                    entry.expires_at = Instant::now() + self.duration;
                    trace!(username, "cache hit");
                    return Ok(Some(entry.user.clone()));
                }
                cache.remove(username);
                debug!(username, "cache entry expired");
            }
        }

        let user = match self.inner.get(username).await? {
            Some(user) => user,
            // No negative caching: absent stays uncached
            None => return Ok(None),
        };

        let mut cache = self.cache.lock().await;
        cache.insert(
            user.username.clone(),
            CachedUser::new(user.clone(), self.duration),
        );
        trace!(username, "cache populated from backend");
        Ok(Some(user))
    }
}
