//! Redis User Store
//!
//! [`UserStore`] implementation backed by redis. Records are keyed by username
//! and store the date of birth as a `YYYY-MM-DD` string.

use async_trait::async_trait;
use chrono::NaiveDate;
use redis::{AsyncCommands, Client};
use tracing::trace;

use crate::error::StoreError;
use crate::store::{User, UserStore};

/// Wire format for dates stored in redis values.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Redis-backed user store.
pub struct RedisUserStore {
    client: Client,
}

impl RedisUserStore {
    /// Creates a store for the given redis connection URL.
    ///
    /// The URL is parsed eagerly but no connection is made until the first
    /// operation.
    pub fn new(url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            client: Client::open(url)?,
        })
    }
}

#[async_trait]
impl UserStore for RedisUserStore {
    async fn put(&self, user: &User) -> Result<(), StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value = user.date_of_birth.format(DATE_FORMAT).to_string();
        let _: () = conn.set(&user.username, value).await?;
        trace!(username = %user.username, "user persisted to redis");
        Ok(())
    }

    async fn get(&self, username: &str) -> Result<Option<User>, StoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(username).await?;

        match value {
            Some(raw) => {
                let date_of_birth = NaiveDate::parse_from_str(&raw, DATE_FORMAT)?;
                Ok(Some(User {
                    username: username.to_string(),
                    date_of_birth,
                }))
            }
            // Missing key means no record, not an error
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_malformed_url() {
        assert!(RedisUserStore::new("not-a-redis-url").is_err());
    }

    #[test]
    fn test_date_wire_format_round_trip() {
        let date = NaiveDate::from_ymd_opt(2000, 5, 5).unwrap();
        let raw = date.format(DATE_FORMAT).to_string();
        assert_eq!(raw, "2000-05-05");
        assert_eq!(NaiveDate::parse_from_str(&raw, DATE_FORMAT).unwrap(), date);
    }
}
