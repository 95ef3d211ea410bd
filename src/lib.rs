//! Content Cache - An in-process async cache
//!
//! Key/value storage with per-entry TTL expiration, LRU eviction under a
//! capacity bound, and running hit/miss/eviction metrics.
//!
//! ```ignore
//! let config = CacheConfig::from_env();
//! let cache: CacheManager<String> = CacheManager::from_config(&config)?;
//! let sweep = spawn_configured_sweep(&cache, &config);
//!
//! cache.set("script:42", rendered, None).await;
//! let hit = cache.get("script:42").await;
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod manager;
pub mod tasks;

pub use cache::{CacheEntry, CacheMetrics, CacheStore, Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use manager::CacheManager;
pub use tasks::{spawn_configured_sweep, spawn_sweep_task};
