//! Time Provider Module
//!
//! Pure time functions used for TTL arithmetic: the current unix timestamp,
//! absolute expiration points, and remaining-seconds projections. The cache
//! service calls these through its configuration so tests can substitute
//! deterministic clocks.

use chrono::Utc;

// == Ttl ==
/// A time-to-live value, accepted either as a number of seconds or as a
/// numeric string (e.g. a value read straight out of an environment variable
/// or a JSON document).
///
/// Non-numeric text is not rejected here: it resolves to `None` and flows
/// downstream as an absent expiration. Validation is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ttl {
    /// TTL in whole seconds
    Seconds(i64),
    /// TTL as unparsed text
    Text(String),
}

impl Ttl {
    // == Seconds ==
    /// Resolves the TTL to a number of seconds.
    ///
    /// # Returns
    /// - `Some(seconds)` for the numeric form, or for text that parses
    /// - `None` for text that is not a whole number
    pub fn seconds(&self) -> Option<i64> {
        match self {
            Ttl::Seconds(secs) => Some(*secs),
            Ttl::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<i64> for Ttl {
    fn from(secs: i64) -> Self {
        Ttl::Seconds(secs)
    }
}

impl From<i32> for Ttl {
    fn from(secs: i32) -> Self {
        Ttl::Seconds(secs.into())
    }
}

impl From<u32> for Ttl {
    fn from(secs: u32) -> Self {
        Ttl::Seconds(secs.into())
    }
}

impl From<&str> for Ttl {
    fn from(text: &str) -> Self {
        Ttl::Text(text.to_string())
    }
}

impl From<String> for Ttl {
    fn from(text: String) -> Self {
        Ttl::Text(text)
    }
}

// == Current Timestamp ==
/// Returns the current unix timestamp in whole seconds, UTC.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

// == Expire After ==
/// Computes the absolute expiration timestamp for a TTL: `now + seconds`.
///
/// # Returns
/// - `Some(timestamp)` when the TTL resolves to a number and the addition
///   does not overflow
/// - `None` otherwise, which downstream code stores as "no expiration"
pub fn expire_after(ttl: &Ttl) -> Option<i64> {
    ttl.seconds().and_then(|secs| unix_now().checked_add(secs))
}

// == Seconds Until ==
/// Returns the number of seconds between now and `timestamp`, clamped to
/// zero for timestamps already in the past. Never negative.
pub fn seconds_until(timestamp: i64) -> i64 {
    (timestamp - unix_now()).max(0)
}
