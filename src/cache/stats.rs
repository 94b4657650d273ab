//! Cache Statistics Module
//!
//! Tracks lookup hits, misses, and budget-driven evictions.

use serde::Serialize;

// == Cache Stats ==
/// Monotonic cache counters. The cache never resets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of `get` calls that found their key
    pub hits: u64,
    /// Number of `get` calls that did not find their key
    pub misses: u64,
    /// Number of entries evicted to bring the cache back under budget
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Total Lookups ==
    /// Total number of `get` calls (hits + misses).
    pub fn total_lookups(&self) -> u64 {
        self.hits + self.misses
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
