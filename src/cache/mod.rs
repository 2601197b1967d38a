//! Cache Module
//!
//! Provides the in-memory result cache with TTL expiration and
//! insertion-order eviction.

mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::{CacheCounters, CacheStats};
pub use store::{CacheOptions, ResultCache};
