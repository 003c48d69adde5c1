//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Connection URL for the redis backend
    pub redis_url: String,
    /// How long a user stays cached, in seconds
    pub cache_duration_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `REDIS_URL` - Redis connection URL (default: redis://127.0.0.1:6379/)
    /// - `CACHE_DURATION_SECS` - Cache duration in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            redis_url: env::var("REDIS_URL")
                .ok()
                .unwrap_or_else(|| "redis://127.0.0.1:6379/".to_string()),
            cache_duration_secs: env::var("CACHE_DURATION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Returns the cache duration as a [`Duration`].
    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            redis_url: "redis://127.0.0.1:6379/".to_string(),
            cache_duration_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379/");
        assert_eq!(config.cache_duration_secs, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("REDIS_URL");
        env::remove_var("CACHE_DURATION_SECS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379/");
        assert_eq!(config.cache_duration_secs, 60);
    }

    #[test]
    fn test_cache_duration() {
        let config = Config {
            cache_duration_secs: 90,
            ..Config::default()
        };
        assert_eq!(config.cache_duration(), Duration::from_secs(90));
    }
}
