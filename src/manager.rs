//! Cache Manager
//!
//! Cloneable async handle over a shared [`CacheStore`]. Every operation takes
//! the lock once for its whole duration, so concurrent callers only
//! interleave between operations.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheMetrics, CacheStore, Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

/// Shared handle to a cache instance.
///
/// Clones refer to the same underlying store. Hand a clone to each service
/// that needs the cache instead of reaching for a global.
#[derive(Debug)]
pub struct CacheManager<T, C = SystemClock> {
    /// Thread-safe cache store
    store: Arc<RwLock<CacheStore<T, C>>>,
}

impl<T, C> Clone for CacheManager<T, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T> CacheManager<T, SystemClock> {
    /// Creates a manager with the default capacity and TTL.
    pub fn new() -> Self {
        Self::from_store(CacheStore::default())
    }

    /// Creates a manager from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<T> Default for CacheManager<T, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clock> CacheManager<T, C> {
    /// Creates a manager from configuration with a custom time source.
    pub fn with_clock(config: &CacheConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let store = CacheStore::with_clock(config.max_size, config.default_ttl, clock)?;
        Ok(Self::from_store(store))
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore<T, C>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Stores `data` under `key`. See [`CacheStore::set`].
    pub async fn set(&self, key: impl Into<String>, data: T, ttl: Option<Duration>) {
        self.store.write().await.set(key, data, ttl);
    }

    /// Looks up `key`. See [`CacheStore::get`].
    pub async fn get(&self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        self.store.write().await.get(key)
    }

    /// Removes `key` if present.
    pub async fn remove(&self, key: &str) -> bool {
        self.store.write().await.remove(key)
    }

    /// Drops every entry and zeroes all counters.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Returns an owned snapshot of the counters.
    pub async fn metrics(&self) -> CacheMetrics {
        self.store.read().await.metrics()
    }

    /// Removes every expired entry, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        self.store.write().await.purge_expired()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}
