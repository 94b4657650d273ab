//! Byte Store Module
//!
//! Key/value index plus byte-budget accounting shared by every eviction
//! policy. Each entry also carries the policy's handle to its place in the
//! eviction order (a FIFO ticket or an LRU list node).

use std::collections::HashMap;

use tracing::debug;

use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

// == Slot ==
#[derive(Debug)]
struct Slot<P> {
    value: Vec<u8>,
    position: P,
}

// == Byte Store ==
/// Byte-budgeted key/value index.
///
/// `used` is the sum of `key.len() + value.len()` over present entries. It
/// may exceed `limit` between an insertion and the eviction loop that
/// follows it, but never once a public cache operation returns.
#[derive(Debug)]
pub struct ByteStore<P> {
    entries: HashMap<Vec<u8>, Slot<P>>,
    limit: usize,
    used: usize,
    stats: CacheStats,
}

impl<P: Copy + PartialEq> ByteStore<P> {
    // == Constructor ==
    /// Creates an empty store holding at most `limit` bytes.
    pub fn new(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(Self {
            entries: HashMap::new(),
            limit,
            used: 0,
            stats: CacheStats::new(),
        })
    }

    // == Limit ==
    /// Returns the capacity in bytes fixed at construction.
    pub fn limit(&self) -> usize {
        self.limit
    }

    // == Remaining ==
    /// Returns the unused bytes, reading 0 while over budget.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.used)
    }

    // == Length ==
    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Stats ==
    /// Returns the hit, miss and eviction counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    // == Over Budget ==
    /// True while the entries cost more than the limit.
    pub fn over_budget(&self) -> bool {
        self.used > self.limit
    }

    // == Admit ==
    /// Returns the cost of an entry, or rejects it if it could never fit.
    pub fn admit(&self, key: &[u8], value: &[u8]) -> Result<usize> {
        let cost = key.len() + value.len();
        if cost > self.limit {
            debug!(cost, limit = self.limit, "rejecting oversized entry");
            return Err(CacheError::EntryTooLarge {
                cost,
                limit: self.limit,
            });
        }
        Ok(cost)
    }

    // == Lookup ==
    /// Looks up a key, recording a hit or a miss.
    ///
    /// Returns the value together with the entry's order position.
    pub fn lookup(&mut self, key: &[u8]) -> Option<(&[u8], P)> {
        match self.entries.get(key) {
            Some(slot) => {
                self.stats.record_hit();
                Some((slot.value.as_slice(), slot.position))
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Value for `key` without touching the stats.
    pub fn peek(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(|slot| slot.value.as_slice())
    }

    pub fn position(&self, key: &[u8]) -> Option<P> {
        self.entries.get(key).map(|slot| slot.position)
    }

    // == Upsert ==
    /// Stores `value` under `key` and charges the cost delta to the budget.
    ///
    /// `place` receives the key and its previous position (if the key was
    /// present) and returns the entry's new position in the eviction order.
    /// The caller must have called [`ByteStore::admit`] first.
    pub fn upsert<F>(&mut self, key: Vec<u8>, value: Vec<u8>, place: F)
    where
        F: FnOnce(&[u8], Option<P>) -> P,
    {
        match self.entries.get_mut(&key) {
            Some(slot) => {
                self.used = self.used - slot.value.len() + value.len();
                slot.value = value;
                slot.position = place(key.as_slice(), Some(slot.position));
            }
            None => {
                self.used += key.len() + value.len();
                let position = place(key.as_slice(), None);
                self.entries.insert(key, Slot { value, position });
            }
        }
    }

    // == Take ==
    /// Removes an entry and reclaims its cost.
    pub fn take(&mut self, key: &[u8]) -> Option<(Vec<u8>, P)> {
        let (key, slot) = self.entries.remove_entry(key)?;
        self.used -= key.len() + slot.value.len();
        Some((slot.value, slot.position))
    }

    // == Evict ==
    /// Removes an entry on behalf of the eviction loop.
    ///
    /// Returns the number of bytes reclaimed, or `None` if the key was absent.
    pub fn evict(&mut self, key: &[u8]) -> Option<usize> {
        let (value, _) = self.take(key)?;
        self.stats.record_eviction();
        Some(key.len() + value.len())
    }
}
