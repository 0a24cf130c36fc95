//! Cache Facade Module
//!
//! Stores values under generated identifiers and reads them back, optionally
//! converted, through a [`Backend`].

use std::error::Error as StdError;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cache::{convert, Backend, RedisBackend, Value};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache ==
/// Key-value cache facade over an external store.
///
/// Constructing a `Cache` flushes the store's database. Two facades pointed at
/// the same database therefore wipe each other's data when the second one is
/// created.
#[derive(Debug)]
pub struct Cache<B: Backend = RedisBackend> {
    backend: B,
}

impl Cache<RedisBackend> {
    // == Constructors ==
    /// Connects to Redis on the standard local endpoint and flushes it.
    pub async fn new() -> Result<Self> {
        Self::connect(&Config::default()).await
    }

    /// Connects to the Redis server named in `config` and flushes it.
    pub async fn connect(config: &Config) -> Result<Self> {
        let backend = RedisBackend::connect(&config.redis_url).await?;
        Self::with_backend(backend).await
    }
}

impl<B: Backend> Cache<B> {
    /// Wraps an existing backend, clearing everything it holds.
    pub async fn with_backend(backend: B) -> Result<Self> {
        backend.flush().await?;
        info!("Cache store flushed");
        Ok(Self { backend })
    }

    /// Returns the backend this facade talks to.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    // == Store ==
    /// Writes `value` under a fresh UUID v4 identifier and returns it.
    ///
    /// # Errors
    /// - `StoreUnavailable` if the write is not acknowledged
    pub async fn store(&self, value: impl Into<Value>) -> Result<String> {
        let value = value.into();
        let key = Uuid::new_v4().to_string();
        let bytes = value.to_bytes();

        self.backend.set(&key, &bytes).await?;
        debug!(key = %key, kind = value.kind(), len = bytes.len(), "stored value");

        Ok(key)
    }

    // == Get ==
    /// Reads the raw bytes stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent. A stored empty value comes back
    /// as `Ok(Some(vec![]))`.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let raw = self.backend.get(key).await?;
        debug!(key = %key, hit = raw.is_some(), "looked up value");
        Ok(raw)
    }

    /// Reads the value under `key` and passes it through `converter`.
    ///
    /// The converter is only called when the key exists. Its error is returned
    /// as `ConversionFailure` with the original error as source.
    pub async fn get_with<T, E, F>(&self, key: &str, converter: F) -> Result<Option<T>>
    where
        F: FnOnce(&[u8]) -> std::result::Result<T, E>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        let Some(raw) = self.get(key).await? else {
            return Ok(None);
        };

        match converter(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                let err: Box<dyn StdError + Send + Sync> = err.into();
                warn!(key = %key, error = %err, "converter rejected stored value");
                Err(CacheError::ConversionFailure(err))
            }
        }
    }

    /// Reads the value under `key` as UTF-8 text.
    pub async fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get_with(key, convert::utf8).await
    }

    /// Reads the value under `key` as a base-10 integer.
    pub async fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, convert::integer).await
    }

    /// Reads the value under `key` as a floating-point number.
    pub async fn get_float(&self, key: &str) -> Result<Option<f64>> {
        self.get_with(key, convert::float).await
    }
}
