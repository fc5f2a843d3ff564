//! Error types for the cache service
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache service.
///
/// Construction problems surface synchronously and loudly; steady-state
/// problems either propagate (`upsert`/`remove`) or are absorbed by the
/// read path, which never fails.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The service was assembled with an invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The storage handler reported a failure
    #[error("Storage handler error: {0}")]
    Handler(String),

    /// A caller-supplied compute function failed
    #[error("Compute error: {0}")]
    Compute(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::Config("handler is missing".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: handler is missing");

        let err = CacheError::Handler("backend offline".to_string());
        assert_eq!(err.to_string(), "Storage handler error: backend offline");
    }
}
