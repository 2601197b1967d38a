//! Insertion Order Module
//!
//! Tracks the order in which keys were first inserted so the oldest one can
//! be evicted without scanning storage.

use std::collections::{BTreeMap, HashMap};

// == Insertion Order ==
/// Records first-insertion order of cache keys.
///
/// Each key receives a monotonically increasing sequence number when it is
/// first tracked. Re-tracking a key that is already present keeps its
/// original position. The lowest live sequence number is the oldest key.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Sequence number -> key, ordered oldest first
    by_seq: BTreeMap<u64, String>,
    /// Key -> sequence number
    by_key: HashMap<String, u64>,
    /// Next sequence number to hand out
    next_seq: u64,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Track ==
    /// Records `key` as inserted now, unless it is already tracked.
    pub fn track(&mut self, key: &str) {
        if self.by_key.contains_key(key) {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_seq.insert(seq, key.to_string());
        self.by_key.insert(key.to_string(), seq);
    }

    // == Remove ==
    /// Stops tracking a key.
    pub fn remove(&mut self, key: &str) {
        if let Some(seq) = self.by_key.remove(key) {
            self.by_seq.remove(&seq);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the first-inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.by_seq.pop_first()?;
        self.by_key.remove(&key);
        Some(key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.by_seq.clear();
        self.by_key.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
