//! Cache Record Module
//!
//! Defines the unit of stored state: a keyed payload with an optional
//! absolute expiration timestamp. A record with every field unset (the
//! "blank" record) is the canonical representation of an absent key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::time;

// == Cache Record ==
/// A single cache record.
///
/// `expires_at` is immutable once the record exists; changing a TTL means
/// writing a full replacement record under the same key. `seconds_to_expire`
/// is a projection of the remaining lifetime at creation time, kept for
/// convenience, never a source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// The cache key; unset only in the blank record
    pub key: Option<String>,
    /// The stored payload; `Value::Null` means "no value"
    pub data: Value,
    /// Expiration timestamp (unix seconds, UTC); `None` means no expiration
    pub expires_at: Option<i64>,
    /// Remaining seconds at creation time, clamped to zero
    pub seconds_to_expire: Option<i64>,
}

impl CacheRecord {
    // == Blank ==
    /// Returns the blank record: all fields unset.
    ///
    /// This is what the service hands back for missing keys and for keys
    /// evicted on read.
    pub fn blank() -> Self {
        Self::default()
    }

    // == From TTL ==
    /// Creates a record expiring `ttl_seconds` from now.
    ///
    /// # Arguments
    /// * `key` - The cache key
    /// * `data` - The payload to store
    /// * `ttl_seconds` - Lifetime in seconds from the current instant
    pub fn from_ttl(key: impl Into<String>, data: Value, ttl_seconds: i64) -> Self {
        let expires_at = time::unix_now().checked_add(ttl_seconds);

        Self {
            key: Some(key.into()),
            data,
            expires_at,
            seconds_to_expire: expires_at.map(|_| ttl_seconds.max(0)),
        }
    }

    // == From Timestamp ==
    /// Creates a record from an absolute expiration timestamp.
    ///
    /// `seconds_to_expire` is derived from the timestamp and the current
    /// instant, clamped to zero for timestamps already past. A `None`
    /// timestamp produces a record with no expiration marker.
    pub fn from_timestamp(key: impl Into<String>, data: Value, expires_at: Option<i64>) -> Self {
        Self {
            key: Some(key.into()),
            data,
            expires_at,
            seconds_to_expire: expires_at.map(time::seconds_until),
        }
    }

    // == Is Expired ==
    /// Checks whether the record is stale at the given instant.
    ///
    /// Boundary condition: a record is stale only when `now` is strictly
    /// greater than `expires_at`; at the exact expiration second it still
    /// reads as fresh. Records without an expiration marker never expire.
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => now > expires_at,
            None => false,
        }
    }

    // == Is Blank ==
    /// Returns true when every field is unset.
    pub fn is_blank(&self) -> bool {
        self.key.is_none()
            && self.data.is_null()
            && self.expires_at.is_none()
            && self.seconds_to_expire.is_none()
    }
}
