//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::cache::{Cache, EvictionPolicy};
use crate::error::Result;

/// Default capacity: 1 MiB.
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Byte budget (sum of key and value lengths)
    pub capacity: usize,
    /// Eviction policy
    pub policy: EvictionPolicy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Capacity in bytes (default: 1048576)
    /// - `CACHE_POLICY` - `fifo` or `lru` (default: lru)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: parse_var("CACHE_CAPACITY").unwrap_or(defaults.capacity),
            policy: parse_var("CACHE_POLICY").unwrap_or(defaults.policy),
        }
    }

    /// Builds an empty cache from this configuration.
    pub fn build(&self) -> Result<Cache> {
        Cache::new(self.policy, self.capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: EvictionPolicy::default(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}
