//! Configuration Module
//!
//! Constructor-level configuration for the cache service: the pluggable
//! time functions and the default TTLs for the two write paths. Everything
//! has a working default; tests override the clock functions to get
//! deterministic expiration behavior.

use std::fmt;
use std::sync::Arc;

use crate::cache::time::{self, Ttl};

/// Source of "now" used for expiration comparisons.
pub type CurrentTimeFn = dyn Fn() -> i64 + Send + Sync;

/// Turns a TTL into an absolute expiration timestamp; `None` means the TTL
/// did not resolve and the record is stored without an expiration marker.
pub type AddSecondsFn = dyn Fn(&Ttl) -> Option<i64> + Send + Sync;

/// Cache service configuration.
///
/// The two function fields default to the built-in time provider. They are
/// independent: overriding one does not rewire the other.
#[derive(Clone)]
pub struct Config {
    /// Function producing the current unix timestamp in seconds
    pub current_time_fn: Arc<CurrentTimeFn>,
    /// Function computing an absolute expiration from a TTL
    pub add_seconds_fn: Arc<AddSecondsFn>,
    /// Default TTL in seconds for `upsert` when none is given
    pub default_upsert_ttl: i64,
    /// Default TTL in seconds for `get_or_compute` when none is given
    pub default_compute_ttl: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_time_fn: Arc::new(time::unix_now),
            add_seconds_fn: Arc::new(time::expire_after),
            default_upsert_ttl: 7200,
            default_compute_ttl: 3600,
        }
    }
}

impl Config {
    /// Creates a configuration with the built-in time provider and the
    /// standard defaults (2 hours for `upsert`, 1 hour for
    /// `get_or_compute`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the "now" source used for expiration comparisons.
    pub fn with_current_time_fn(mut self, f: impl Fn() -> i64 + Send + Sync + 'static) -> Self {
        self.current_time_fn = Arc::new(f);
        self
    }

    /// Overrides the TTL-to-expiration computation.
    pub fn with_add_seconds_fn(
        mut self,
        f: impl Fn(&Ttl) -> Option<i64> + Send + Sync + 'static,
    ) -> Self {
        self.add_seconds_fn = Arc::new(f);
        self
    }

    /// Sets the default TTL in seconds for `upsert`.
    pub fn with_upsert_ttl(mut self, seconds: i64) -> Self {
        self.default_upsert_ttl = seconds;
        self
    }

    /// Sets the default TTL in seconds for `get_or_compute`.
    pub fn with_compute_ttl(mut self, seconds: i64) -> Self {
        self.default_compute_ttl = seconds;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("default_upsert_ttl", &self.default_upsert_ttl)
            .field("default_compute_ttl", &self.default_compute_ttl)
            .finish_non_exhaustive()
    }
}
