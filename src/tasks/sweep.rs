//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries. Reads
//! still expire entries lazily whether or not the sweep runs.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Clock;
use crate::config::CacheConfig;
use crate::manager::CacheManager;

/// Spawns a background task that purges expired entries every `interval`.
///
/// The task loops until the returned handle is aborted.
///
/// # Example
/// ```ignore
/// let cache: CacheManager<String> = CacheManager::new();
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<T, C>(cache: CacheManager<T, C>, interval: Duration) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        info!(interval_ms, "starting cache expiry sweep");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!(removed, "expiry sweep removed entries");
            } else {
                debug!("expiry sweep found no expired entries");
            }
        }
    })
}

/// Spawns the sweep if `config` enables one.
pub fn spawn_configured_sweep<T, C>(
    cache: &CacheManager<T, C>,
    config: &CacheConfig,
) -> Option<JoinHandle<()>>
where
    T: Send + Sync + 'static,
    C: Clock + 'static,
{
    config
        .sweep_interval
        .map(|interval| spawn_sweep_task(cache.clone(), interval))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn manual_cache() -> (CacheManager<String, ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let config = CacheConfig::new(100, Duration::from_secs(300));
        let cache = CacheManager::with_clock(&config, clock.clone()).unwrap();
        (cache, clock)
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_removes_expired_entries() {
        let (cache, clock) = manual_cache();
        cache
            .set("expire_soon", "value".to_string(), Some(Duration::from_millis(10)))
            .await;
        clock.advance(Duration::from_millis(50));

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.is_empty().await, "Expired entry should have been swept");
        let metrics = cache.metrics().await;
        assert_eq!(metrics.misses, 0);
        assert_eq!(metrics.evictions, 0);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_preserves_valid_entries() {
        let (cache, clock) = manual_cache();
        cache
            .set("long_lived", "value".to_string(), Some(Duration::from_secs(3600)))
            .await;
        clock.advance(Duration::from_secs(60));

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.get("long_lived").await, Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_can_be_aborted() {
        let (cache, _) = manual_cache();

        let handle = spawn_sweep_task(cache, Duration::from_millis(10));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_sweep_disabled_by_default() {
        let (cache, _) = manual_cache();

        assert!(spawn_configured_sweep(&cache, &CacheConfig::default()).is_none());

        let config = CacheConfig::default().with_sweep_interval(Duration::from_millis(10));
        let handle = spawn_configured_sweep(&cache, &config).unwrap();
        handle.abort();
    }
}
