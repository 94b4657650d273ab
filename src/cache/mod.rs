//! Cache Module
//!
//! Byte-budgeted in-memory caching with FIFO and LRU eviction.

mod fifo;
mod list;
mod lru;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use fifo::FifoCache;
pub use lru::LruCache;
pub use policy::{ByteCache, Cache, EvictionPolicy};
pub use stats::CacheStats;
pub(crate) use store::ByteStore;
