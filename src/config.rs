//! Configuration Module
//!
//! Construction-time parameters for a cache instance. Nothing here is read
//! implicitly: callers either take the defaults or opt into `from_env`.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_SIZE, DEFAULT_TTL};
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction kicks in
    pub max_size: usize,
    /// TTL applied when `set` is called without one
    pub default_ttl: Duration,
    /// Interval of the background expiry sweep, None = lazy expiry only
    pub sweep_interval: Option<Duration>,
}

impl CacheConfig {
    /// Creates a config with the given capacity and default TTL, no sweep.
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self {
            max_size,
            default_ttl,
            sweep_interval: None,
        }
    }

    /// Enables the background sweep at the given interval.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweep interval in milliseconds (unset or 0: disabled)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Same as [`CacheConfig::from_env`] but reads values through `lookup`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |name: &str| lookup(name).and_then(|v| v.trim().parse::<u64>().ok());

        let max_size = parse("CACHE_MAX_SIZE")
            .and_then(|v| usize::try_from(v).ok())
            .unwrap_or(DEFAULT_MAX_SIZE);
        let default_ttl = parse("CACHE_DEFAULT_TTL_MS")
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TTL);
        let sweep_interval = parse("CACHE_SWEEP_INTERVAL_MS")
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Self {
            max_size,
            default_ttl,
            sweep_interval,
        }
    }

    /// Checks that the parameters describe a usable cache.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than 0".to_string(),
            ));
        }
        if self.default_ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "default_ttl must be greater than 0".to_string(),
            ));
        }
        if matches!(self.sweep_interval, Some(interval) if interval.is_zero()) {
            return Err(CacheError::InvalidConfig(
                "sweep_interval must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE, DEFAULT_TTL)
    }
}
