//! Redis Cache - smoke tool
//!
//! Connects to the configured Redis server, stores one value of each kind and
//! logs the typed read-back.
//!
//! The target database is flushed on startup.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_cache::{Cache, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: redis_url={}", config.redis_url);

    let cache = Cache::connect(&config)
        .await
        .with_context(|| format!("failed to open cache at {}", config.redis_url))?;

    let text_key = cache.store("hello").await?;
    let int_key = cache.store(42).await?;
    let float_key = cache.store(2.5).await?;
    let bytes_key = cache.store(b"\x00raw\xff".to_vec()).await?;

    info!("{} -> {:?}", text_key, cache.get_str(&text_key).await?);
    info!("{} -> {:?}", int_key, cache.get_int(&int_key).await?);
    info!("{} -> {:?}", float_key, cache.get_float(&float_key).await?);
    info!("{} -> {:?}", bytes_key, cache.get(&bytes_key).await?);
    info!("missing -> {:?}", cache.get("missing").await?);

    Ok(())
}
