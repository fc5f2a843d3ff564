//! Storage Handler Module
//!
//! The pluggable backend contract the cache service drives. A handler owns
//! raw record storage and nothing else: expiration checks, lazy population,
//! and eviction decisions all live in the service layer.
//!
//! Implementations might keep records in process memory, Redis, a database
//! table, or anything that can satisfy the three capabilities below.

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::CacheRecord;
use crate::error::Result;

mod memory;

pub use memory::MemoryHandler;

// == Storage Handler Trait ==
/// Capability set a storage backend must implement.
///
/// Handlers store and return records verbatim. In particular, `get` must
/// return stale records untouched; the service decides what "stale" means
/// and asks for removal itself.
#[async_trait]
pub trait StorageHandler: Send + Sync {
    /// Fetches the record stored under `key`.
    ///
    /// # Returns
    /// The stored record, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<CacheRecord>>;

    /// Stores a full replacement record under `key`.
    ///
    /// Always a complete overwrite: no field of a previously stored record
    /// survives. `expires_at` of `None` stores the record without an
    /// expiration marker.
    ///
    /// # Returns
    /// The record as stored.
    async fn upsert(&self, key: &str, data: Value, expires_at: Option<i64>) -> Result<CacheRecord>;

    /// Deletes `key` from storage.
    ///
    /// # Returns
    /// The backend's deletion result; idempotent backends return `true`
    /// whether or not the key existed.
    async fn remove(&self, key: &str) -> Result<bool>;
}
