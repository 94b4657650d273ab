//! LRU Cache Module
//!
//! Least-recently-used eviction over a byte budget.
//!
//! Each stored entry carries the [`NodeId`] of its node in a
//! [`RecencyList`], so promotion on `get` and removal from the middle are
//! both O(1):
//! - Head = least recently used (next eviction candidate)
//! - Tail = most recently used

use tracing::debug;

use crate::cache::list::{NodeId, RecencyList};
use crate::cache::{ByteCache, ByteStore, CacheStats};
use crate::error::Result;

// == LRU Cache ==
#[derive(Debug)]
pub struct LruCache {
    store: ByteStore<NodeId>,
    order: RecencyList,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty LRU cache holding at most `limit` bytes.
    ///
    /// Fails with [`crate::error::CacheError::ZeroCapacity`] if `limit` is 0.
    pub fn new(limit: usize) -> Result<Self> {
        Ok(Self {
            store: ByteStore::new(limit)?,
            order: RecencyList::new(),
        })
    }

    /// Key that would be evicted next.
    pub fn peek_lru(&self) -> Option<&[u8]> {
        self.order.front()
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.order.iter()
    }

    // == Evict ==
    fn evict_until_within_budget(&mut self) {
        while self.store.over_budget() {
            let Some(key) = self.order.pop_front() else {
                break;
            };
            if let Some(reclaimed) = self.store.evict(&key) {
                debug!(
                    policy = "lru",
                    key_len = key.len(),
                    reclaimed,
                    remaining = self.store.remaining(),
                    "evicted entry"
                );
            }
        }
    }
}

impl ByteCache for LruCache {
    fn max_storage(&self) -> usize {
        self.store.limit()
    }

    fn remaining_storage(&self) -> usize {
        self.store.remaining()
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn stats(&self) -> &CacheStats {
        self.store.stats()
    }

    // == Get ==
    /// Looks up `key` and promotes it to most recently used on a hit.
    fn get(&mut self, key: &[u8]) -> Option<&[u8]> {
        let (value, node) = self.store.lookup(key)?;
        self.order.touch(node);
        Some(value)
    }

    fn peek(&self, key: &[u8]) -> Option<&[u8]> {
        self.store.peek(key)
    }

    fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        let (value, node) = self.store.take(key)?;
        let unlinked = self.order.unlink(node);
        debug_assert!(unlinked.is_some());
        Some(value)
    }

    // == Set ==
    /// Stores `value` under `key` as the most recently used entry, then
    /// evicts from the least recently used end until the cache fits.
    fn try_set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        self.store.admit(&key, &value)?;

        let order = &mut self.order;
        self.store.upsert(key, value, |key, previous| match previous {
            Some(node) => {
                order.touch(node);
                node
            }
            None => order.append(key.to_vec()),
        });

        self.evict_until_within_budget();
        debug_assert_eq!(self.order.len(), self.store.len());
        Ok(())
    }
}
