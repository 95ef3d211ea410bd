//! Cache Metrics Module
//!
//! Tracks hits, misses and evictions, and produces point-in-time snapshots.

use serde::Serialize;

// == Cache Metrics ==
/// Snapshot of cache performance counters.
///
/// Owned copy: mutating the cache after taking a snapshot never changes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheMetrics {
    /// Number of lookups that found a live entry
    pub hits: u64,
    /// Number of lookups on absent or expired keys
    pub misses: u64,
    /// Number of entries removed by LRU eviction
    pub evictions: u64,
    /// Number of entries held when the counters were last recomputed
    pub total_entries: usize,
    /// Percentage of lookups that hit, 0.0 with no lookups
    pub hit_rate: f64,
}

// == Metrics Recorder ==
/// Mutable counters owned by a store.
#[derive(Debug, Clone, Default)]
pub(crate) struct MetricsRecorder {
    hits: u64,
    misses: u64,
    evictions: u64,
    total_entries: usize,
}

impl MetricsRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses) * 100, or 0.0 if nothing was looked up.
    pub(crate) fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }

    /// Zeroes every counter.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn snapshot(&self) -> CacheMetrics {
        CacheMetrics {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            total_entries: self.total_entries,
            hit_rate: self.hit_rate(),
        }
    }
}
