//! Cache Service Module
//!
//! Orchestrates reads and writes against a pluggable storage handler:
//! expiration checks on the read path, lazy eviction of stale records,
//! and compute-then-populate for values not yet cached.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::record::CacheRecord;
use crate::cache::time::Ttl;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::handler::StorageHandler;

// == Cache Service ==
/// TTL-aware cache facade over a storage handler.
///
/// The service owns all freshness decisions; handlers store records
/// verbatim. Cloning is cheap and clones share the same handler.
#[derive(Clone)]
pub struct CacheService {
    handler: Arc<dyn StorageHandler>,
    config: Config,
}

impl CacheService {
    /// Creates a service over `handler` with the default configuration.
    pub fn new(handler: Arc<dyn StorageHandler>) -> Self {
        Self::with_config(handler, Config::new())
    }

    /// Creates a service over `handler` with an explicit configuration.
    pub fn with_config(handler: Arc<dyn StorageHandler>, config: Config) -> Self {
        Self { handler, config }
    }

    /// Starts building a service step by step.
    pub fn builder() -> CacheServiceBuilder {
        CacheServiceBuilder::default()
    }

    /// Looks up `key`, applying expiration on the way out.
    ///
    /// This path never fails: a handler error and a missing key both come
    /// back as a blank record. A stored record without an expiration
    /// marker is returned exactly as stored. A record past its expiration
    /// is removed from the handler and reported as a miss; removal
    /// failures are logged and otherwise ignored.
    ///
    /// # Arguments
    /// * `key` - The cache key to look up
    ///
    /// # Returns
    /// The live record, or a blank record on any kind of miss.
    pub async fn get(&self, key: &str) -> CacheRecord {
        let record = match self.handler.get(key).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(key = %key, "cache miss");
                return CacheRecord::blank();
            }
            Err(error) => {
                warn!(key = %key, %error, "storage handler failed on get, treating as miss");
                return CacheRecord::blank();
            }
        };

        let now = (self.config.current_time_fn)();
        if !record.is_expired(now) {
            // Fresh, or carrying no expiration marker: served as stored.
            return record;
        }

        debug!(key = %key, expires_at = ?record.expires_at, "record expired, evicting");
        if let Err(error) = self.handler.remove(key).await {
            warn!(key = %key, %error, "failed to evict expired record");
        }
        CacheRecord::blank()
    }

    /// Writes `data` under `key`, replacing any previous record whole.
    ///
    /// # Arguments
    /// * `key` - The cache key to write
    /// * `data` - The payload to store
    /// * `ttl` - Time to live; `None` falls back to the configured upsert
    ///   TTL. A TTL that cannot be resolved to seconds stores the record
    ///   without an expiration marker.
    ///
    /// # Returns
    /// The record as stored by the handler.
    pub async fn upsert(&self, key: &str, data: Value, ttl: Option<Ttl>) -> Result<CacheRecord> {
        let ttl = ttl.unwrap_or_else(|| Ttl::from(self.config.default_upsert_ttl));
        let expires_at = (self.config.add_seconds_fn)(&ttl);
        debug!(key = %key, ?expires_at, "upserting record");
        self.handler.upsert(key, data, expires_at).await
    }

    /// Deletes `key` from the handler.
    ///
    /// # Returns
    /// The handler's deletion result, unchanged.
    pub async fn remove(&self, key: &str) -> Result<bool> {
        debug!(key = %key, "removing record");
        self.handler.remove(key).await
    }

    /// Returns the cached value under `key`, computing it on a miss.
    ///
    /// A hit is any live record whose data is non-null; its data comes
    /// back without touching `compute`. On a miss `compute` runs, its
    /// value is returned to the caller immediately, and a background task
    /// writes it to the handler. A population failure is logged, never
    /// surfaced; the caller already has the value. A `compute` failure is
    /// returned as-is and nothing is stored.
    ///
    /// Concurrent callers missing on the same key each run their own
    /// `compute`; the last population to land wins.
    ///
    /// # Arguments
    /// * `key` - The cache key to look up or populate
    /// * `compute` - Producer for the value when the cache has none
    /// * `ttl` - Time to live for the populated record; `None` falls back
    ///   to the configured compute TTL
    ///
    /// # Returns
    /// The cached or freshly computed value.
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: &str,
        compute: F,
        ttl: Option<Ttl>,
    ) -> Result<Value>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value>>,
    {
        let record = self.get(key).await;
        if !record.data.is_null() {
            debug!(key = %key, "serving cached data");
            return Ok(record.data);
        }

        let value = compute().await?;

        let ttl = ttl.unwrap_or_else(|| Ttl::from(self.config.default_compute_ttl));
        let expires_at = (self.config.add_seconds_fn)(&ttl);
        let handler = Arc::clone(&self.handler);
        let task_key = key.to_string();
        let data = value.clone();
        tokio::spawn(async move {
            if let Err(error) = handler.upsert(&task_key, data, expires_at).await {
                warn!(key = %task_key, %error, "failed to populate cache after compute");
            }
        });

        Ok(value)
    }
}

// == Cache Service Builder ==
/// Step-by-step construction for [`CacheService`].
///
/// `build` is the one place assembly is checked: a service cannot exist
/// without a storage handler.
#[derive(Default)]
pub struct CacheServiceBuilder {
    handler: Option<Arc<dyn StorageHandler>>,
    config: Config,
}

impl CacheServiceBuilder {
    /// Sets the storage handler the service drives.
    pub fn handler(mut self, handler: Arc<dyn StorageHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Sets the service configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Assembles the service.
    ///
    /// # Returns
    /// The service, or `CacheError::Config` when no handler was given.
    pub fn build(self) -> Result<CacheService> {
        let handler = self
            .handler
            .ok_or_else(|| CacheError::Config("a storage handler is required".to_string()))?;
        Ok(CacheService {
            handler,
            config: self.config,
        })
    }
}
