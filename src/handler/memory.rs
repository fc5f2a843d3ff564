//! In-Memory Storage Handler
//!
//! Process-local record storage backed by a HashMap. Suitable for tests,
//! demos, and single-process deployments where cache contents may vanish
//! on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheRecord;
use crate::error::Result;
use crate::handler::StorageHandler;

// == Memory Handler ==
/// HashMap-backed storage handler guarded by an async read-write lock.
///
/// Infallible by construction: every operation resolves `Ok`. Removal is
/// idempotent and reports `true` whether or not the key was present.
pub struct MemoryHandler {
    records: RwLock<HashMap<String, CacheRecord>>,
}

impl MemoryHandler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Removes every stored record.
    pub async fn flush(&self) {
        let mut records = self.records.write().await;
        let dropped = records.len();
        records.clear();
        debug!(dropped, "flushed in-memory storage");
    }

    /// Number of records currently stored, stale ones included.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the handler holds no records at all.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for MemoryHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageHandler for MemoryHandler {
    async fn get(&self, key: &str) -> Result<Option<CacheRecord>> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn upsert(&self, key: &str, data: Value, expires_at: Option<i64>) -> Result<CacheRecord> {
        let record = CacheRecord::from_timestamp(key, data, expires_at);
        let mut records = self.records.write().await;
        records.insert(key.to_string(), record.clone());
        Ok(record)
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        records.remove(key);
        Ok(true)
    }
}

// == Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_new_handler_is_empty() {
        let handler = MemoryHandler::new();
        assert!(handler.is_empty().await);
        assert_eq!(handler.len().await, 0);
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let handler = MemoryHandler::new();
        let stored = handler
            .upsert("user:1", json!({"name": "Ada"}), Some(2_000))
            .await
            .unwrap();

        assert_eq!(stored.key.as_deref(), Some("user:1"));
        assert_eq!(stored.expires_at, Some(2_000));

        let fetched = handler.get("user:1").await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let handler = MemoryHandler::new();
        assert_eq!(handler.get("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_replaces_whole_record() {
        let handler = MemoryHandler::new();
        handler
            .upsert("k", json!("first"), Some(5_000))
            .await
            .unwrap();
        handler.upsert("k", json!("second"), None).await.unwrap();

        let record = handler.get("k").await.unwrap().unwrap();
        assert_eq!(record.data, json!("second"));
        // No field of the first record survives the overwrite.
        assert_eq!(record.expires_at, None);
        assert_eq!(record.seconds_to_expire, None);
    }

    #[tokio::test]
    async fn test_remove_existing_key() {
        let handler = MemoryHandler::new();
        handler.upsert("k", json!(1), None).await.unwrap();

        assert!(handler.remove("k").await.unwrap());
        assert_eq!(handler.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_missing_key_still_true() {
        let handler = MemoryHandler::new();
        assert!(handler.remove("never-stored").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_returns_stale_records_untouched() {
        let handler = MemoryHandler::new();
        // Expired long ago; the handler must not judge staleness itself.
        handler.upsert("old", json!("payload"), Some(1)).await.unwrap();

        let record = handler.get("old").await.unwrap();
        assert!(record.is_some());
        assert_eq!(handler.len().await, 1);
    }

    #[tokio::test]
    async fn test_flush_clears_all_records() {
        let handler = MemoryHandler::new();
        handler.upsert("a", json!(1), None).await.unwrap();
        handler.upsert("b", json!(2), Some(9_000)).await.unwrap();
        assert_eq!(handler.len().await, 2);

        handler.flush().await;
        assert!(handler.is_empty().await);
        assert_eq!(handler.get("a").await.unwrap(), None);
    }
}
