//! Backend Module
//!
//! The seam between the cache facade and the external store.

use async_trait::async_trait;

use crate::error::Result;

// == Backend Trait ==
/// Minimal set of requests the facade sends to the external store.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Removes every key in the selected database.
    async fn flush(&self) -> Result<()>;

    /// Writes `value` under `key`, returning once the store acknowledged it.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Reads the raw bytes under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
}
