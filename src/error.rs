//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache facade.
///
/// A missing key is not an error; lookups return `Ok(None)` for that.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The external store could not be reached or rejected a request
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] redis::RedisError),

    /// The converter rejected the stored bytes
    #[error("Conversion failed: {0}")]
    ConversionFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A configuration value cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Conversion Error Enum ==
/// Errors raised by the built-in converters in [`crate::cache::convert`].
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("value is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("value is not a base-10 integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("value is not a decimal number: {0}")]
    InvalidFloat(#[from] ParseFloatError),
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
