//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and LRU eviction.

use std::time::Duration;

mod clock;
mod entry;
mod metrics;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use metrics::CacheMetrics;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Default entry lifetime (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_millis(300_000);
