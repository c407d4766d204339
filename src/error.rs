//! Error types for the cache
//!
//! Cache operations themselves never fail: a missing key is reported as
//! `None` or `false`. Errors only arise while building a cache.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must hold at least one entry
    #[error("Invalid capacity: {0} (must be greater than 0)")]
    InvalidCapacity(usize),

    /// A configuration value could not be parsed or is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::InvalidCapacity(0).to_string(),
            "Invalid capacity: 0 (must be greater than 0)"
        );
        assert_eq!(
            CacheError::InvalidConfig("CACHE_MAX_ENTRIES=abc".to_string()).to_string(),
            "Invalid configuration: CACHE_MAX_ENTRIES=abc"
        );
    }
}
