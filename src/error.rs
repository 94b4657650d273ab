//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A cache was constructed with a byte limit of zero
    #[error("Cache capacity must be at least one byte")]
    ZeroCapacity,

    /// A single entry costs more than the whole cache can hold
    #[error("Entry of {cost} bytes exceeds cache capacity of {limit} bytes")]
    EntryTooLarge { cost: usize, limit: usize },

    /// Unknown eviction policy name
    #[error("Invalid eviction policy: {0}")]
    InvalidPolicy(String),
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
            CacheError::EntryTooLarge { cost: 12, limit: 10 }.to_string(),
            "Entry of 12 bytes exceeds cache capacity of 10 bytes"
        );
        assert_eq!(
            CacheError::InvalidPolicy("mru".to_string()).to_string(),
            "Invalid eviction policy: mru"
        );
    }
}
