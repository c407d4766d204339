//! Cache Module
//!
//! Provides the bounded in-memory store with LRU eviction.

mod entry;
mod lru;
mod policy;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{Iter, RecencyList};
pub use policy::Cacher;
pub use stats::CacheStats;
pub use store::LruStore;

// == Public Constants ==
/// Capacity used when a cache is built without one.
pub const DEFAULT_CAPACITY: usize = 100;
