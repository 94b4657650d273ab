//! Eviction Policy Module
//!
//! The operation set shared by every policy, plus a runtime-selected wrapper
//! for callers that pick the policy from configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::{CacheStats, FifoCache, LruCache};
use crate::error::{CacheError, Result};

// == Byte Cache Trait ==
/// Byte-budgeted key/value cache.
///
/// The cost of an entry is `key.len() + value.len()`. After every call,
/// `max_storage() - remaining_storage()` equals the summed cost of the
/// present entries.
pub trait ByteCache {
    /// Total capacity in bytes.
    fn max_storage(&self) -> usize;

    /// Unused bytes.
    fn remaining_storage(&self) -> usize;

    /// Number of entries currently stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> &CacheStats;

    /// Looks up `key`, counting a hit or a miss.
    fn get(&mut self, key: &[u8]) -> Option<&[u8]>;

    /// Value for `key` without counting a lookup or changing eviction order.
    fn peek(&self, key: &[u8]) -> Option<&[u8]>;

    fn contains(&self, key: &[u8]) -> bool {
        self.peek(key).is_some()
    }

    /// Removes `key` and returns its value. Does not count as a lookup.
    fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>>;

    /// Stores `value` under `key`, evicting as needed.
    ///
    /// Fails with [`CacheError::EntryTooLarge`] without touching the cache
    /// if the entry alone exceeds capacity.
    fn try_set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<()>;

    /// Like [`ByteCache::try_set`], reporting success as a bool.
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> bool {
        self.try_set(key, value).is_ok()
    }
}

// == Eviction Policy ==
/// Which entry to evict when the cache is over budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Oldest insertion first
    Fifo,
    /// Least recently used first
    #[default]
    Lru,
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            _ => Err(CacheError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => f.write_str("fifo"),
            Self::Lru => f.write_str("lru"),
        }
    }
}

// == Cache ==
/// A cache whose policy is chosen at construction time.
#[derive(Debug)]
pub enum Cache {
    Fifo(FifoCache),
    Lru(LruCache),
}

impl Cache {
    /// Creates an empty cache of `limit` bytes using `policy`.
    pub fn new(policy: EvictionPolicy, limit: usize) -> Result<Self> {
        Ok(match policy {
            EvictionPolicy::Fifo => Self::Fifo(FifoCache::new(limit)?),
            EvictionPolicy::Lru => Self::Lru(LruCache::new(limit)?),
        })
    }

    pub fn policy(&self) -> EvictionPolicy {
        match self {
            Self::Fifo(_) => EvictionPolicy::Fifo,
            Self::Lru(_) => EvictionPolicy::Lru,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $cache:ident => $body:expr) => {
        match $self {
            Cache::Fifo($cache) => $body,
            Cache::Lru($cache) => $body,
        }
    };
}

impl ByteCache for Cache {
    fn max_storage(&self) -> usize {
        dispatch!(self, c => c.max_storage())
    }

    fn remaining_storage(&self) -> usize {
        dispatch!(self, c => c.remaining_storage())
    }

    fn len(&self) -> usize {
        dispatch!(self, c => c.len())
    }

    fn stats(&self) -> &CacheStats {
        dispatch!(self, c => c.stats())
    }

    fn get(&mut self, key: &[u8]) -> Option<&[u8]> {
        dispatch!(self, c => c.get(key))
    }

    fn peek(&self, key: &[u8]) -> Option<&[u8]> {
        dispatch!(self, c => c.peek(key))
    }

    fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        dispatch!(self, c => c.remove(key))
    }

    fn try_set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        dispatch!(self, c => c.try_set(key, value))
    }
}
