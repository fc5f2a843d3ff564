//! Cache Module
//!
//! TTL-aware caching over pluggable storage: the record shape, clock and
//! TTL helpers, and the service that ties them to a storage handler.

pub mod record;
pub mod service;
pub mod time;


// Re-export public types
pub use record::CacheRecord;
pub use service::{CacheService, CacheServiceBuilder};
pub use time::Ttl;
