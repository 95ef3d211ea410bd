//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

// == Cache Entry ==
/// A stored value plus the metadata used for expiry and LRU eviction.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub data: T,
    /// Insertion timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Lifetime relative to `created_at`
    pub ttl: Duration,
    /// Number of successful reads since insertion
    pub access_count: u64,
    /// Timestamp of the most recent successful read (Unix milliseconds)
    pub last_accessed_at: u64,
    /// Store-wide stamp of the last insert or hit, breaks timestamp ties
    pub(crate) recency: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a fresh entry inserted at `now`.
    pub(crate) fn new(data: T, ttl: Duration, now: u64, recency: u64) -> Self {
        Self {
            data,
            created_at: now,
            ttl,
            access_count: 0,
            last_accessed_at: now,
            recency,
        }
    }

    // == Is Expired ==
    /// Checks if the entry is stale at `now`.
    ///
    /// An entry is stale once strictly more than `ttl` has elapsed since
    /// creation; at exactly `ttl` it is still served.
    pub fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.created_at) > self.ttl_ms()
    }

    // == Time To Live ==
    /// Returns the remaining lifetime in milliseconds at `now`, 0 once stale.
    pub fn ttl_remaining_ms(&self, now: u64) -> u64 {
        let expires_at = self.created_at.saturating_add(self.ttl_ms());
        expires_at.saturating_sub(now)
    }

    // == Touch ==
    /// Records a successful read.
    pub(crate) fn touch(&mut self, now: u64, recency: u64) {
        self.access_count += 1;
        self.last_accessed_at = now;
        self.recency = recency;
    }

    /// Ordering key for LRU selection, smallest is least recently used.
    pub(crate) fn lru_rank(&self) -> (u64, u64) {
        (self.last_accessed_at, self.recency)
    }

    fn ttl_ms(&self) -> u64 {
        u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX)
    }
}
