//! Configuration Module
//!
//! Describes where the external store lives.

use std::env;

/// Standard local Redis endpoint, database 0.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";

/// Connection settings for the external store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Redis connection URL, e.g. `redis://host:port/db`
    pub redis_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Redis connection URL (default: `redis://127.0.0.1:6379/`)
    pub fn from_env() -> Self {
        Self {
            redis_url: env::var("REDIS_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}
