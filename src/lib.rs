//! Redis Cache - A minimal key-value cache facade over Redis
//!
//! Stores values under generated identifiers and reads them back with
//! optional type conversion.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Backend, Cache, MemoryBackend, RedisBackend, Value};
pub use config::Config;
pub use error::{CacheError, ConversionError, Result};
