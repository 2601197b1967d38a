//! Cache Statistics Module
//!
//! Tracks cache lookup efficiency and exposes a snapshot of the cache state.

use serde::Serialize;

// == Cache Counters ==
/// Running hit/miss counters for `get` lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheCounters {
    /// Number of lookups that returned a fresh value
    pub hits: u64,
    /// Number of lookups that found nothing, a stale entry, or a disabled cache
    pub misses: u64,
}

impl CacheCounters {
    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Reset ==
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses) as a percentage, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of a result cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Entries currently stored (expired entries not yet swept included)
    pub size: usize,
    /// Capacity before insertion-order eviction kicks in
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
    pub enabled: bool,
    /// Default TTL applied to new entries, in milliseconds
    pub ttl_ms: u64,
}

impl CacheStats {
    // == Hit Rate Label ==
    /// Renders the hit rate as `"66.67%"`, or `"0%"` before any lookup.
    pub fn hit_rate_label(&self) -> String {
        if self.hits + self.misses == 0 {
            "0%".to_string()
        } else {
            format!("{:.2}%", self.hit_rate)
        }
    }
}
