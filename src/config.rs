//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheOptions;
use crate::checker::CheckerOptions;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether check results are cached
    pub cache_enabled: bool,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Maximum number of cached results
    pub cache_max_entries: usize,
    /// Whether check outcomes are fed into the statistics tracker
    pub statistics_enabled: bool,
    /// City used when a check does not name one
    pub default_city: String,
    /// Delay between checks of a batch, in milliseconds
    pub rate_limit_ms: u64,
    /// Appointment page request timeout in seconds
    pub probe_timeout: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Expired cache entry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ENABLED` - Cache results (default: true)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cached results (default: 100)
    /// - `STATISTICS_ENABLED` - Track statistics (default: true)
    /// - `DEFAULT_CITY` - Default city (default: ankara)
    /// - `RATE_LIMIT_MS` - Delay between batch checks (default: 2000)
    /// - `PROBE_TIMEOUT` - Page request timeout in seconds (default: 10)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_enabled: env_or("CACHE_ENABLED", defaults.cache_enabled),
            cache_ttl: env_or("CACHE_TTL", defaults.cache_ttl),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            statistics_enabled: env_or("STATISTICS_ENABLED", defaults.statistics_enabled),
            default_city: env::var("DEFAULT_CITY")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().to_lowercase())
                .unwrap_or(defaults.default_city),
            rate_limit_ms: env_or("RATE_LIMIT_MS", defaults.rate_limit_ms),
            probe_timeout: env_or("PROBE_TIMEOUT", defaults.probe_timeout),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }

    /// Checker settings derived from this configuration.
    pub fn checker_options(&self) -> CheckerOptions {
        CheckerOptions {
            cache: CacheOptions {
                enabled: self.cache_enabled,
                ttl: Duration::from_secs(self.cache_ttl),
                max_entries: self.cache_max_entries,
            },
            statistics_enabled: self.statistics_enabled,
            default_city: self.default_city.clone(),
            rate_limit: Duration::from_millis(self.rate_limit_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl: 300,
            cache_max_entries: 100,
            statistics_enabled: true,
            default_city: "ankara".to_string(),
            rate_limit_ms: 2000,
            probe_timeout: 10,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
