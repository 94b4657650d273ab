//! Byte Cache - A byte-budgeted in-memory key/value cache
//!
//! Entries cost `key.len() + value.len()` bytes against a fixed capacity.
//! When a `set` pushes the cache over budget, entries are evicted in FIFO or
//! LRU order until it fits again. Caches are single-threaded; wrap one in a
//! mutex to share it.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{ByteCache, Cache, CacheStats, EvictionPolicy, FifoCache, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
