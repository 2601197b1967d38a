//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// A single cached value with its lifetime bounds.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped at `now_ms` that lives for `ttl_ms`.
    pub fn new(value: V, now_ms: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry stays readable up to and including its expiration instant
    /// and is stale strictly after it.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("available", 1_000, 300_000);

        assert_eq!(entry.value, "available");
        assert_eq!(entry.created_at, 1_000);
        assert_eq!(entry.expires_at, 301_000);
        assert!(entry.expires_at > entry.created_at);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("full", 0, 100);

        assert!(!entry.is_expired(99));
        assert!(!entry.is_expired(100), "Entry is still valid at expires_at");
        assert!(entry.is_expired(101));
    }

    #[test]
    fn test_expiry_saturates() {
        let entry = CacheEntry::new((), u64::MAX - 5, 100);
        assert_eq!(entry.expires_at, u64::MAX);
    }
}
