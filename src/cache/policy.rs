//! Eviction Policy Module
//!
//! The capability every eviction policy exposes to the [`Cache`](crate::Cache) facade.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheStats;

// == Cacher Trait ==
/// A bounded, thread-safe key-value store with some eviction policy.
///
/// Implementations do their own locking: every method takes `&self` and must
/// be safe to call from many threads at once.
pub trait Cacher<V>: Send + Sync {
    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns true if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up `key`, counting the lookup as a use of the entry on a hit.
    fn get(&self, key: &str) -> Option<Arc<V>>;

    /// Inserts or overwrites `key`. Returns true if another entry was
    /// evicted to make room.
    fn set(&self, key: String, value: V, expiry: Duration) -> bool;

    /// Removes `key`. Returns true if it was present.
    fn remove(&self, key: &str) -> bool;

    /// Drops every entry. Always succeeds.
    fn purge(&self) -> bool;

    /// Returns true if `key` is present, without counting it as a use.
    fn contains(&self, key: &str) -> bool;

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Returns a snapshot of the store's counters.
    fn stats(&self) -> CacheStats;
}
