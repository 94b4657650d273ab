//! Integration Tests for the public cache API
//!
//! Exercises both policies through `ByteCache`, policy selection through
//! `Config`, and stats serialization.

use byte_cache::{
    ByteCache, Cache, CacheError, Config, EvictionPolicy, FifoCache, LruCache,
};
use serde_json::json;

// == Helper Functions ==

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("byte_cache=debug")
        .with_test_writer()
        .try_init();
}

fn set<C: ByteCache>(cache: &mut C, key: &str, value: &str) -> bool {
    cache.set(key.as_bytes().to_vec(), value.as_bytes().to_vec())
}

/// The capacity-10 walkthrough: "ab" is evicted under either policy.
fn run_capacity_ten_scenario<C: ByteCache>(cache: &mut C) {
    assert_eq!(cache.max_storage(), 10);

    assert!(set(cache, "ab", "1234"));
    assert_eq!(cache.remaining_storage(), 4);

    assert!(set(cache, "cd", "99"));
    assert_eq!(cache.remaining_storage(), 0);

    assert!(set(cache, "ef", "x"));
    assert_eq!(cache.remaining_storage(), 3);
    assert_eq!(cache.len(), 2);

    assert_eq!(cache.get(b"ab"), None);
    assert_eq!(cache.get(b"cd"), Some(&b"99"[..]));
    assert_eq!(cache.get(b"ef"), Some(&b"x"[..]));

    let stats = cache.stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.evictions, 1);
}

// == Scenario Tests ==

#[test]
fn test_fifo_capacity_ten_scenario() {
    init_tracing();
    let mut cache = FifoCache::new(10).unwrap();
    run_capacity_ten_scenario(&mut cache);
}

#[test]
fn test_lru_capacity_ten_scenario() {
    init_tracing();
    let mut cache = LruCache::new(10).unwrap();
    run_capacity_ten_scenario(&mut cache);
}

#[test]
fn test_lru_refreshed_key_survives() {
    let mut cache = LruCache::new(4).unwrap();
    set(&mut cache, "A", "a");
    set(&mut cache, "B", "b");

    assert!(cache.get(b"A").is_some());
    set(&mut cache, "C", "c");

    assert!(cache.contains(b"A"));
    assert!(!cache.contains(b"B"));
    assert!(cache.contains(b"C"));
}

#[test]
fn test_fifo_reads_do_not_save_oldest() {
    let mut cache = FifoCache::new(4).unwrap();
    set(&mut cache, "A", "a");
    set(&mut cache, "B", "b");

    assert!(cache.get(b"A").is_some());
    set(&mut cache, "C", "c");

    assert!(!cache.contains(b"A"));
    assert!(cache.contains(b"B"));
    assert!(cache.contains(b"C"));
}

#[test]
fn test_oversized_entry_rejected() {
    for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
        let mut cache = Cache::new(policy, 8).unwrap();
        set(&mut cache, "k", "v");

        assert!(!set(&mut cache, "key", "too-long"));
        assert_eq!(
            cache.try_set(b"key".to_vec(), b"too-long".to_vec()),
            Err(CacheError::EntryTooLarge { cost: 11, limit: 8 })
        );

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remaining_storage(), 6);
        assert_eq!(cache.peek(b"k"), Some(&b"v"[..]));
    }
}

#[test]
fn test_remove_round_trip() {
    for policy in [EvictionPolicy::Fifo, EvictionPolicy::Lru] {
        let mut cache = Cache::new(policy, 32).unwrap();
        set(&mut cache, "key", "value");

        assert_eq!(cache.remove(b"key"), Some(b"value".to_vec()));
        assert_eq!(cache.remove(b"key"), None);
        assert_eq!(cache.remaining_storage(), 32);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().total_lookups(), 0);
    }
}

#[test]
fn test_binary_keys_and_values() {
    let mut cache = LruCache::new(64).unwrap();
    let key = vec![0u8, 255, 10, 13];
    let value = vec![0xde, 0xad, 0xbe, 0xef, 0x00];

    assert!(cache.set(key.clone(), value.clone()));
    assert_eq!(cache.get(&key), Some(value.as_slice()));
    assert_eq!(cache.remaining_storage(), 64 - 9);
}

#[test]
fn test_caches_are_independent() {
    let mut first = LruCache::new(16).unwrap();
    let mut second = LruCache::new(16).unwrap();

    set(&mut first, "shared", "1");

    assert!(second.get(b"shared").is_none());
    assert_eq!(second.remaining_storage(), 16);
    assert_eq!(first.stats().misses, 0);
}

// == Configuration Tests ==

#[test]
fn test_config_builds_selected_policy() {
    let config = Config {
        capacity: 10,
        policy: EvictionPolicy::Fifo,
    };
    let mut cache = config.build().unwrap();

    assert_eq!(cache.policy(), EvictionPolicy::Fifo);
    run_capacity_ten_scenario(&mut cache);
}

#[test]
fn test_config_rejects_zero_capacity() {
    let config = Config {
        capacity: 0,
        policy: EvictionPolicy::Lru,
    };
    assert_eq!(config.build().unwrap_err(), CacheError::ZeroCapacity);
}

// == Serialization Tests ==

#[test]
fn test_stats_serialize() {
    let mut cache = LruCache::new(4).unwrap();
    set(&mut cache, "a", "1");
    set(&mut cache, "b", "2");
    cache.get(b"a");
    cache.get(b"z");
    set(&mut cache, "c", "3");

    let body = serde_json::to_value(cache.stats()).unwrap();
    assert_eq!(body, json!({ "hits": 1, "misses": 1, "evictions": 1 }));
}

#[test]
fn test_policy_serde_names() {
    assert_eq!(serde_json::to_value(EvictionPolicy::Fifo).unwrap(), json!("fifo"));
    let policy: EvictionPolicy = serde_json::from_value(json!("lru")).unwrap();
    assert_eq!(policy, EvictionPolicy::Lru);
}
