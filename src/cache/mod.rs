//! Cache Module
//!
//! Key-value cache facade with generated identifiers and typed reads, backed
//! by Redis or an in-process store.

mod backend;
pub mod convert;
mod memory;
mod redis_backend;
mod store;
mod value;


// Re-export public types
pub use backend::Backend;
pub use memory::MemoryBackend;
pub use redis_backend::RedisBackend;
pub use store::Cache;
pub use value::Value;
