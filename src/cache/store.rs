//! Result Cache Module
//!
//! Bounded key/value store with per-entry expiry, insertion-order eviction
//! and hit/miss accounting.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheCounters, CacheEntry, CacheStats, InsertionOrder};
use crate::clock::{SharedClock, SystemClock};

// == Cache Options ==
/// Construction-time cache settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheOptions {
    /// Whether lookups and writes touch storage at all
    pub enabled: bool,
    /// Lifetime applied to entries stored without an explicit TTL
    pub ttl: Duration,
    /// Entry count at which the oldest entry is evicted before a write
    pub max_entries: usize,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: Duration::from_secs(5 * 60),
            max_entries: 100,
        }
    }
}

// == Result Cache ==
/// Time- and size-bounded cache.
///
/// Not internally synchronized: every method that mutates takes `&mut self`,
/// and shared use must go through an external lock.
#[derive(Debug)]
pub struct ResultCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// First-insertion order of stored keys
    order: InsertionOrder,
    /// Lookup efficiency counters
    counters: CacheCounters,
    options: CacheOptions,
    clock: SharedClock,
}

impl<V: Clone> ResultCache<V> {
    // == Constructor ==
    /// Creates a cache reading time from the system clock.
    pub fn new(options: CacheOptions) -> Self {
        Self::with_clock(options, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(options: CacheOptions, clock: SharedClock) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counters: CacheCounters::default(),
            options,
            clock,
        }
    }

    // == Get ==
    /// Returns a fresh value for `key`, counting a hit or a miss.
    ///
    /// A disabled cache always misses without looking at storage. A stale
    /// entry is removed on the way out.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if !self.options.enabled {
            self.counters.record_miss();
            return None;
        }

        let now = self.clock.now_ms();
        match self.entries.get(key) {
            None => {
                self.counters.record_miss();
                None
            }
            Some(entry) if entry.is_expired(now) => {
                self.remove_entry(key);
                self.counters.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.counters.record_hit();
                Some(value)
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl`, or the default TTL when `None`.
    ///
    /// When the cache already holds `max_entries` entries, the oldest
    /// inserted entry is evicted first. The capacity check runs before the
    /// overwrite check, so overwriting a key in a full cache still evicts
    /// one entry (possibly the key itself).
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        if !self.options.enabled {
            return;
        }

        let key = key.into();

        if self.entries.len() >= self.options.max_entries {
            if let Some(evicted) = self.order.evict_oldest() {
                self.entries.remove(&evicted);
                debug!(key = %evicted, "cache full, evicted oldest entry");
            }
        }

        let ttl_ms = duration_ms(ttl.unwrap_or(self.options.ttl));
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms);
        self.entries.insert(key.clone(), entry);
        self.order.track(&key);
    }

    // == Has ==
    /// Reports whether a fresh entry exists, without touching the counters.
    pub fn has(&mut self, key: &str) -> bool {
        if !self.options.enabled {
            return false;
        }

        let now = self.clock.now_ms();
        match self.entries.get(key) {
            None => false,
            Some(entry) if entry.is_expired(now) => {
                self.remove_entry(key);
                false
            }
            Some(_) => true,
        }
    }

    // == Clear ==
    /// Drops every entry and zeroes the hit/miss counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.counters.reset();
    }

    // == Clear Expired ==
    /// Removes all stale entries, returning how many were dropped.
    pub fn clear_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        expired_keys.len()
    }

    // == Set Enabled ==
    /// Turns the cache on or off. Turning it off discards all entries.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    // == Set TTL ==
    /// Changes the default TTL for future writes only.
    pub fn set_ttl(&mut self, ttl: Duration) {
        self.options.ttl = ttl;
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            max_size: self.options.max_entries,
            hits: self.counters.hits,
            misses: self.counters.misses,
            hit_rate: self.counters.hit_rate(),
            enabled: self.is_enabled(),
            ttl_ms: duration_ms(self.options.ttl),
        }
    }

    // == Length ==
    /// Returns the current number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    fn remove_entry(&mut self, key: &str) {
        self.entries.remove(key);
        self.order.remove(key);
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn cache_with(max_entries: usize, ttl_ms: u64) -> (ResultCache<String>, ManualClock) {
        let clock = ManualClock::new(1_000_000);
        let options = CacheOptions {
            enabled: true,
            ttl: Duration::from_millis(ttl_ms),
            max_entries,
        };
        (ResultCache::with_clock(options, Arc::new(clock.clone())), clock)
    }

    #[test]
    fn test_default_options() {
        let options = CacheOptions::default();
        assert!(options.enabled);
        assert_eq!(options.ttl, Duration::from_secs(300));
        assert_eq!(options.max_entries, 100);
    }

    #[test]
    fn test_cache_new() {
        let (cache, _) = cache_with(100, 300_000);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_then_get_is_hit() {
        let (mut cache, _) = cache_with(100, 300_000);

        cache.set("fr:ankara:tourist", "available".to_string(), None);

        assert_eq!(cache.get("fr:ankara:tourist"), Some("available".to_string()));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_get_nonexistent_is_miss() {
        let (mut cache, _) = cache_with(100, 300_000);

        assert_eq!(cache.get("nonexistent"), None);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_overwrite() {
        let (mut cache, _) = cache_with(100, 300_000);

        cache.set("key1", "value1".to_string(), None);
        cache.set("key1", "value2".to_string(), None);

        assert_eq!(cache.get("key1"), Some("value2".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_miss_and_removed() {
        let (mut cache, clock) = cache_with(100, 1_000);

        cache.set("key1", "value1".to_string(), None);
        clock.advance(1_000);
        assert!(cache.get("key1").is_some(), "Still valid at expires_at");

        clock.advance(1);
        assert_eq!(cache.get("key1"), None);
        let stats = cache.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_ttl_override() {
        let (mut cache, clock) = cache_with(100, 1_000);

        cache.set("short", "a".to_string(), None);
        cache.set("long", "b".to_string(), Some(Duration::from_secs(60)));
        clock.advance(5_000);

        assert_eq!(cache.get("short"), None);
        assert_eq!(cache.get("long"), Some("b".to_string()));
    }

    #[test]
    fn test_insertion_order_eviction() {
        let (mut cache, _) = cache_with(3, 300_000);

        cache.set("key1", "value1".to_string(), None);
        cache.set("key2", "value2".to_string(), None);
        cache.set("key3", "value3".to_string(), None);

        // Reading key1 does not protect it: eviction is by insertion, not use
        cache.get("key1");
        cache.set("key4", "value4".to_string(), None);

        assert_eq!(cache.len(), 3);
        assert!(!cache.has("key1"));
        assert!(cache.has("key2"));
        assert!(cache.has("key3"));
        assert!(cache.has("key4"));
    }

    #[test]
    fn test_overwrite_in_full_cache_still_evicts() {
        let (mut cache, _) = cache_with(3, 300_000);

        cache.set("a", "1".to_string(), None);
        cache.set("b", "2".to_string(), None);
        cache.set("c", "3".to_string(), None);

        // "c" already exists, yet the full cache evicts "a" before overwriting.
        cache.set("c", "33".to_string(), None);

        assert_eq!(cache.len(), 2);
        assert!(!cache.has("a"));
        assert_eq!(cache.get("b"), Some("2".to_string()));
        assert_eq!(cache.get("c"), Some("33".to_string()));
    }

    #[test]
    fn test_overwrite_of_oldest_in_full_cache_reinserts_it() {
        let (mut cache, _) = cache_with(2, 300_000);

        cache.set("a", "1".to_string(), None);
        cache.set("b", "2".to_string(), None);
        cache.set("a", "11".to_string(), None);

        assert_eq!(cache.len(), 2);
        // "a" was evicted and re-inserted, so "b" is now the oldest.
        cache.set("c", "3".to_string(), None);
        assert!(!cache.has("b"));
        assert_eq!(cache.get("a"), Some("11".to_string()));
    }

    #[test]
    fn test_has_does_not_touch_counters() {
        let (mut cache, clock) = cache_with(100, 1_000);

        cache.set("key1", "value1".to_string(), None);
        assert!(cache.has("key1"));
        assert!(!cache.has("missing"));

        clock.advance(2_000);
        assert!(!cache.has("key1"));
        assert_eq!(cache.len(), 0, "has() lazily evicts stale entries");

        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_clear_resets_entries_and_counters() {
        let (mut cache, _) = cache_with(100, 300_000);

        cache.set("key1", "value1".to_string(), None);
        cache.get("key1");
        cache.get("missing");
        cache.clear();

        let stats = cache.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.hit_rate, 0.0);
    }

    #[test]
    fn test_clear_expired_keeps_valid_entries() {
        let (mut cache, clock) = cache_with(100, 300_000);

        cache.set("key1", "value1".to_string(), Some(Duration::from_secs(1)));
        cache.set("key2", "value2".to_string(), Some(Duration::from_secs(10)));
        cache.get("key1");
        clock.advance(1_100);

        let removed = cache.clear_expired();

        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().hits, 1, "Sweeping leaves counters alone");
        assert_eq!(cache.get("key2"), Some("value2".to_string()));
    }

    #[test]
    fn test_disable_clears_and_misses() {
        let (mut cache, _) = cache_with(100, 300_000);

        cache.set("key1", "value1".to_string(), None);
        cache.set_enabled(false);

        assert_eq!(cache.stats().size, 0);
        assert!(!cache.stats().enabled);
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.stats().misses, 1);

        cache.set("key2", "value2".to_string(), None);
        assert_eq!(cache.len(), 0, "Writes are no-ops while disabled");
    }

    #[test]
    fn test_reenable_does_not_restore_data() {
        let (mut cache, _) = cache_with(100, 300_000);

        cache.set("key1", "value1".to_string(), None);
        cache.set_enabled(false);
        cache.set_enabled(true);

        assert_eq!(cache.get("key1"), None);
        cache.set("key2", "value2".to_string(), None);
        assert_eq!(cache.get("key2"), Some("value2".to_string()));
    }

    #[test]
    fn test_set_ttl_is_not_retroactive() {
        let (mut cache, clock) = cache_with(100, 1_000);

        cache.set("old", "a".to_string(), None);
        cache.set_ttl(Duration::from_secs(60));
        cache.set("new", "b".to_string(), None);
        clock.advance(2_000);

        assert_eq!(cache.get("old"), None);
        assert_eq!(cache.get("new"), Some("b".to_string()));
        assert_eq!(cache.stats().ttl_ms, 60_000);
    }

    #[test]
    fn test_stats_hit_rate_percentage() {
        let (mut cache, _) = cache_with(100, 300_000);

        cache.set("key1", "value1".to_string(), None);
        cache.get("key1");
        cache.get("key1");
        cache.get("missing");

        let stats = cache.stats();
        assert!((stats.hit_rate - 66.666).abs() < 0.01);
        assert_eq!(stats.hit_rate_label(), "66.67%");
        assert_eq!(stats.max_size, 100);
    }
}
