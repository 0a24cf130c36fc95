//! Redis Backend
//!
//! Talks to a Redis server over a multiplexed tokio connection.

use std::fmt;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tracing::info;

use crate::cache::Backend;
use crate::error::{CacheError, Result};

// == Redis Backend ==
/// Backend that forwards every request to a Redis server.
///
/// The multiplexed connection is cloned per request; clones pipeline over the
/// same socket, so the backend can be shared across tasks without locking.
#[derive(Clone)]
pub struct RedisBackend {
    conn: MultiplexedConnection,
}

impl RedisBackend {
    // == Connect ==
    /// Opens a connection to the Redis server at `url`.
    ///
    /// # Errors
    /// - `InvalidConfig` if `url` cannot be parsed as a Redis URL
    /// - `StoreUnavailable` if the server cannot be reached
    pub async fn connect(url: &str) -> Result<Self> {
        let client =
            redis::Client::open(url).map_err(|e| CacheError::InvalidConfig(e.to_string()))?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Connected to Redis at {}", url);
        Ok(Self { conn })
    }
}

impl fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisBackend").finish_non_exhaustive()
    }
}

#[async_trait]
impl Backend for RedisBackend {
    async fn flush(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("FLUSHDB").query_async(&mut conn).await?;
        Ok(())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;
        Ok(value)
    }
}
