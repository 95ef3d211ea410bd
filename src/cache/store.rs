//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration, LRU
//! eviction and hit/miss accounting. Synchronous and single-owner; wrap it in
//! [`CacheManager`](crate::CacheManager) for shared async access.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::metrics::MetricsRecorder;
use crate::cache::{CacheEntry, CacheMetrics, Clock, SystemClock, DEFAULT_MAX_SIZE, DEFAULT_TTL};
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache Store ==
/// Key-value storage with LRU eviction and TTL support.
#[derive(Debug)]
pub struct CacheStore<T, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Performance counters
    metrics: MetricsRecorder,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL for entries stored without an explicit one
    default_ttl: Duration,
    /// Time source
    clock: C,
    /// Last recency stamp handed out
    recency: u64,
}

impl<T> CacheStore<T, SystemClock> {
    // == Constructor ==
    /// Creates a store with the given capacity and default TTL.
    ///
    /// Fails if either parameter is zero.
    pub fn new(max_size: usize, default_ttl: Duration) -> Result<Self> {
        Self::with_clock(max_size, default_ttl, SystemClock)
    }

    /// Creates a store from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::with_clock(config.max_size, config.default_ttl, SystemClock)
    }
}

impl<T> Default for CacheStore<T, SystemClock> {
    /// 1000 entries, 5 minute default TTL.
    fn default() -> Self {
        Self::build(DEFAULT_MAX_SIZE, DEFAULT_TTL, SystemClock)
    }
}

impl<T, C: Clock> CacheStore<T, C> {
    /// Creates a store that reads time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl: Duration, clock: C) -> Result<Self> {
        CacheConfig::new(max_size, default_ttl).validate()?;
        Ok(Self::build(max_size, default_ttl, clock))
    }

    fn build(max_size: usize, default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            metrics: MetricsRecorder::new(),
            max_size,
            default_ttl,
            clock,
            recency: 0,
        }
    }

    // == Set ==
    /// Stores a value under `key`.
    ///
    /// An existing key is replaced and its access metadata reset. A store at
    /// or above capacity first evicts the least recently used entry, even when
    /// `key` is already present.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `data` - The value to store
    /// * `ttl` - Optional TTL (uses the default TTL if None)
    pub fn set(&mut self, key: impl Into<String>, data: T, ttl: Option<Duration>) {
        let key = key.into();

        if self.entries.len() >= self.max_size {
            self.evict_lru();
        }

        let now = self.clock.now_ms();
        let recency = self.next_recency();
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key, CacheEntry::new(data, ttl, now, recency));

        self.metrics.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// Absent and expired keys count as misses and return None; an expired
    /// entry is dropped on the spot. A hit refreshes the entry's recency.
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        let now = self.clock.now_ms();

        let Some(entry) = self.entries.get_mut(key) else {
            self.metrics.record_miss();
            return None;
        };

        if entry.is_expired(now) {
            self.entries.remove(key);
            self.metrics.set_total_entries(self.entries.len());
            self.metrics.record_miss();
            debug!(key = %key, "dropped expired entry on read");
            return None;
        }

        self.recency += 1;
        entry.touch(now, self.recency);
        let data = entry.data.clone();
        self.metrics.record_hit();
        Some(data)
    }

    // == Remove ==
    /// Removes an entry without touching the hit/miss counters.
    ///
    /// Returns true if the key was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.metrics.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes every entry and zeroes all counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.metrics.reset();
    }

    // == Metrics ==
    /// Returns a snapshot of the current counters.
    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.snapshot()
    }

    // == Purge Expired ==
    /// Removes all expired entries.
    ///
    /// Neither a miss nor an eviction. Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        self.metrics.set_total_entries(self.entries.len());
        removed
    }

    // == Peek ==
    /// Returns the entry stored under `key` without recording an access.
    ///
    /// Expired entries are returned as-is.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry<T>> {
        self.entries.get(key)
    }

    /// Returns true if `key` is stored, expired or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity the store was built with.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the TTL applied when `set` gets none.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Evict ==
    /// Drops the entry with the oldest access.
    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.lru_rank())
            .map(|(key, _)| key.clone());

        if let Some(victim) = victim {
            self.entries.remove(&victim);
            self.metrics.record_eviction();
            debug!(key = %victim, "evicted least recently used entry");
        }
    }

    fn next_recency(&mut self) -> u64 {
        self.recency += 1;
        self.recency
    }
}
