//! FIFO Cache Module
//!
//! First-in first-out eviction over a byte budget.
//!
//! Insertion order is kept in a queue of `(ticket, key)` pairs. Every `set`
//! hands out a fresh ticket and the store remembers each key's latest one.
//! `remove` and overwrites leave their old queue entries behind; eviction
//! skips any entry whose key is gone or whose ticket is no longer current.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::cache::{ByteCache, ByteStore, CacheStats};
use crate::error::Result;

/// Queue length allowed per live entry before stale tickets are purged.
const COMPACT_FACTOR: usize = 2;
/// Slack so small caches don't compact on every call.
const COMPACT_SLACK: usize = 32;

type Ticket = u64;

// == FIFO Cache ==
#[derive(Debug)]
pub struct FifoCache {
    store: ByteStore<Ticket>,
    queue: VecDeque<(Ticket, Vec<u8>)>,
    next_ticket: Ticket,
}

impl FifoCache {
    // == Constructor ==
    /// Creates an empty FIFO cache holding at most `limit` bytes.
    ///
    /// Fails with [`crate::error::CacheError::ZeroCapacity`] if `limit` is 0.
    pub fn new(limit: usize) -> Result<Self> {
        Ok(Self {
            store: ByteStore::new(limit)?,
            queue: VecDeque::new(),
            next_ticket: 0,
        })
    }

    /// Number of queue entries, including stale ones.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // == Evict ==
    fn evict_until_within_budget(&mut self) {
        while self.store.over_budget() {
            let Some((ticket, key)) = self.queue.pop_front() else {
                break;
            };
            if self.store.position(&key) != Some(ticket) {
                trace!(ticket, "skipping stale fifo entry");
                continue;
            }
            if let Some(reclaimed) = self.store.evict(&key) {
                debug!(
                    policy = "fifo",
                    key_len = key.len(),
                    reclaimed,
                    remaining = self.store.remaining(),
                    "evicted entry"
                );
            }
        }
    }

    // == Compact ==
    /// Drops stale tickets once they dominate the queue.
    fn maybe_compact(&mut self) {
        if self.queue.len() <= COMPACT_FACTOR * self.store.len() + COMPACT_SLACK {
            return;
        }
        let before = self.queue.len();
        let store = &self.store;
        self.queue
            .retain(|(ticket, key)| store.position(key) == Some(*ticket));
        trace!(before, after = self.queue.len(), "compacted fifo queue");
    }
}

impl ByteCache for FifoCache {
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

    fn get(&mut self, key: &[u8]) -> Option<&[u8]> {
        self.store.lookup(key).map(|(value, _)| value)
    }

    fn peek(&self, key: &[u8]) -> Option<&[u8]> {
        self.store.peek(key)
    }

    fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        let (value, _) = self.store.take(key)?;
        self.maybe_compact();
        Some(value)
    }

    fn try_set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<()> {
        self.store.admit(&key, &value)?;

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let queue = &mut self.queue;
        self.store.upsert(key, value, |key, _| {
            queue.push_back((ticket, key.to_vec()));
            ticket
        });

        self.evict_until_within_budget();
        self.maybe_compact();
        Ok(())
    }
}
