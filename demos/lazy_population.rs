//! Lazy population walkthrough
//!
//! Stores, expires, and lazily recomputes values against the in-memory
//! handler, with debug logging on. Run with:
//!
//! ```sh
//! cargo run --example lazy_population
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use lazycache::{CacheService, Config, MemoryHandler, Ttl};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to debug level for the crate, overridable with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lazycache=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let handler = Arc::new(MemoryHandler::new());
    let service = CacheService::builder()
        .handler(handler.clone())
        .config(Config::new().with_compute_ttl(600))
        .build()?;

    // Plain write and read back.
    service.upsert("greeting", json!("hello"), None).await?;
    let record = service.get("greeting").await;
    info!(data = %record.data, "read back stored value");

    // A short-lived record, gone once its TTL passes.
    service
        .upsert("blink", json!("now you see me"), Some(Ttl::from(1)))
        .await?;
    tokio::time::sleep(Duration::from_millis(2_100)).await;
    let expired = service.get("blink").await;
    info!(blank = expired.is_blank(), "read after expiration");

    // Lazy population: computed on the first read, cached for the second.
    let report = service
        .get_or_compute(
            "report:today",
            || async {
                info!("computing report");
                Ok(json!({"visits": 1024, "errors": 3}))
            },
            None,
        )
        .await?;
    info!(%report, "first read computed the value");

    tokio::task::yield_now().await;
    let cached = service
        .get_or_compute(
            "report:today",
            || async {
                info!("computing report again");
                Ok(json!("never produced"))
            },
            None,
        )
        .await?;
    info!(%cached, "second read came from the cache");

    service.remove("greeting").await?;
    info!(remaining = handler.len().await, "records left in storage");

    Ok(())
}
