//! LazyCache - A lightweight TTL cache service
//!
//! Provides read-through caching with lazy expiration over pluggable
//! storage handlers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lazycache::{CacheService, MemoryHandler};
//! use serde_json::json;
//!
//! # async fn demo() -> lazycache::Result<()> {
//! let service = CacheService::new(Arc::new(MemoryHandler::new()));
//! service.upsert("greeting", json!("hello"), None).await?;
//!
//! let record = service.get("greeting").await;
//! assert_eq!(record.data, json!("hello"));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod handler;

pub use cache::{CacheRecord, CacheService, CacheServiceBuilder, Ttl};
pub use config::Config;
pub use error::{CacheError, Result};
pub use handler::{MemoryHandler, StorageHandler};
