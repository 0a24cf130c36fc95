//! Integration Tests for the Cache Facade
//!
//! The in-memory tests run everywhere. The Redis tests need a server at
//! `REDIS_URL` (default `redis://127.0.0.1:6379/`) and flush its database;
//! run them with `cargo test -- --ignored`.

use std::sync::{Arc, OnceLock};

use tokio::sync::{Mutex, MutexGuard};

use redis_cache::{Backend, Cache, CacheError, Config, MemoryBackend};

// == Helper Functions ==

/// Serializes the Redis tests: each one flushes the shared database.
async fn redis_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().await
}

async fn redis_cache() -> Cache {
    Cache::connect(&Config::from_env()).await.unwrap()
}

// == In-Memory Tests ==

#[tokio::test]
async fn test_memory_cache_public_api() {
    let cache = Cache::with_backend(MemoryBackend::new()).await.unwrap();

    let text = cache.store("hello").await.unwrap();
    let int = cache.store(42).await.unwrap();

    assert_eq!(cache.get_str(&text).await.unwrap().as_deref(), Some("hello"));
    assert_eq!(cache.get_int(&int).await.unwrap(), Some(42));
    assert_eq!(cache.get("never-issued").await.unwrap(), None);
}

#[tokio::test]
async fn test_concurrent_stores_never_collide() {
    let cache = Arc::new(Cache::with_backend(MemoryBackend::new()).await.unwrap());

    let mut handles = Vec::new();
    for i in 0..32 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move { cache.store(i).await.unwrap() }));
    }

    let mut keys = Vec::new();
    for handle in handles {
        keys.push(handle.await.unwrap());
    }
    keys.sort();
    keys.dedup();

    assert_eq!(keys.len(), 32);
    assert_eq!(cache.backend().len().await, 32);
}

#[tokio::test]
async fn test_unreachable_store() {
    let config = Config {
        redis_url: "redis://127.0.0.1:1/".to_string(),
    };

    let result = Cache::connect(&config).await;
    assert!(matches!(result, Err(CacheError::StoreUnavailable(_))));
}

// == Redis Tests ==

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_store_and_get() {
    let _guard = redis_lock().await;
    let cache = redis_cache().await;

    let text = cache.store("hello").await.unwrap();
    let int = cache.store(42).await.unwrap();
    let float = cache.store(2.5).await.unwrap();
    let bytes = cache.store(vec![0u8, 255, 10]).await.unwrap();

    assert_eq!(cache.get_str(&text).await.unwrap().as_deref(), Some("hello"));
    assert_eq!(cache.get_int(&int).await.unwrap(), Some(42));
    assert_eq!(cache.get_float(&float).await.unwrap(), Some(2.5));
    assert_eq!(cache.get(&bytes).await.unwrap(), Some(vec![0, 255, 10]));
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_missing_and_empty() {
    let _guard = redis_lock().await;
    let cache = redis_cache().await;

    let empty = cache.store("").await.unwrap();

    assert_eq!(cache.get(&empty).await.unwrap(), Some(Vec::new()));
    assert_eq!(cache.get("never-issued").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_conversion_failure() {
    let _guard = redis_lock().await;
    let cache = redis_cache().await;

    let key = cache.store("not a number").await.unwrap();

    assert!(matches!(
        cache.get_int(&key).await,
        Err(CacheError::ConversionFailure(_))
    ));
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_redis_construction_flushes() {
    let _guard = redis_lock().await;
    let first = redis_cache().await;
    let key = first.store("old session").await.unwrap();
    assert!(first.backend().get(&key).await.unwrap().is_some());

    let second = redis_cache().await;

    assert_eq!(second.get(&key).await.unwrap(), None);
}
