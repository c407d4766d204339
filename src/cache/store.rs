//! LRU Store Module
//!
//! Main cache engine combining a key index with a recency-ordered list,
//! guarded by a single lock.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use ahash::RandomState;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, Cacher, RecencyList};
use crate::error::{CacheError, Result};

// == Store State ==
/// Everything the lock protects. Index and list are always mutated together.
struct Inner<V> {
    /// Key -> handle into `order`
    index: HashMap<String, usize, RandomState>,
    /// Entries, most recently used first
    order: RecencyList<CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
}

// == LRU Store ==
/// Thread-safe cache storage with least-recently-used eviction.
///
/// Reads count as uses: a `get` hit moves the entry to the front, so the
/// entry evicted when the store is full is the one untouched the longest.
pub struct LruStore<V> {
    inner: Mutex<Inner<V>>,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<V> LruStore<V> {
    // == Constructor ==
    /// Creates a new store holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self::with_capacity(capacity))
    }

    /// Builds a store without validating `capacity`. Callers guarantee it is non-zero.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        debug!("LRU store created with capacity {}", capacity);

        Self {
            inner: Mutex::new(Inner {
                index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
                order: RecencyList::with_capacity(capacity),
                stats: CacheStats::new(capacity),
            }),
            capacity,
        }
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.inner.lock().index.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Capacity ==
    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Get ==
    /// Retrieves the value for `key` and marks it most recently used.
    ///
    /// A miss leaves the store untouched apart from the miss counter.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let Some(&idx) = inner.index.get(key) else {
            inner.stats.record_miss();
            trace!("Cache miss: {}", key);
            return None;
        };

        if !inner.order.move_to_front(idx) {
            debug_assert!(false, "index points at a free slot for key {}", key);
            inner.index.remove(key);
            inner.stats.set_total_entries(inner.index.len());
            inner.stats.record_miss();
            return None;
        }

        let value = inner.order.get(idx).map(CacheEntry::value);
        inner.stats.record_hit();
        trace!("Cache hit: {}", key);
        value
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, its value and expiry are replaced in place
    /// and it becomes the most recently used entry; nothing is evicted.
    /// Otherwise, if the store is at capacity, the least recently used entry
    /// is evicted first.
    ///
    /// Returns true if and only if an entry was evicted by this call.
    pub fn set(&self, key: impl Into<String>, value: V, expiry: Duration) -> bool {
        let key = key.into();
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        // Overwrite
        if let Some(&idx) = inner.index.get(&key) {
            if let Some(entry) = inner.order.get_mut(idx) {
                entry.replace(value, expiry);
                inner.order.move_to_front(idx);
                trace!("Overwrote key: {}", key);
                return false;
            }
            debug_assert!(false, "index points at a free slot for key {}", key);
            inner.index.remove(&key);
        }

        // Make room for a new key
        let mut evicted = false;
        if inner.index.len() >= self.capacity {
            if let Some(victim) = inner.order.pop_back() {
                let victim_key = victim.into_key();
                inner.index.remove(&victim_key);
                inner.stats.record_eviction();
                debug!("Evicted least recently used key: {}", victim_key);
                evicted = true;
            }
        }

        let idx = inner
            .order
            .push_front(CacheEntry::new(key.clone(), value, expiry));
        inner.index.insert(key, idx);

        inner.stats.record_insert();
        inner.stats.set_total_entries(inner.index.len());

        evicted
    }

    // == Remove ==
    /// Removes an entry by key. Returns true if it was present.
    pub fn remove(&self, key: &str) -> bool {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let Some(idx) = inner.index.remove(key) else {
            return false;
        };

        let removed = inner.order.remove(idx).is_some();
        debug_assert!(removed, "index points at a free slot for key {}", key);
        inner.stats.set_total_entries(inner.index.len());
        trace!("Removed key: {}", key);
        true
    }

    // == Purge ==
    /// Removes every entry. Counters other than the entry count are kept.
    pub fn purge(&self) -> bool {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;

        let dropped = inner.order.len();
        inner.order.clear();
        inner.index.clear();
        inner.stats.set_total_entries(0);

        debug!("Purged {} entries", dropped);
        true
    }

    // == Contains ==
    /// Checks whether `key` is present without promoting it.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    // == Peek LRU ==
    /// Returns the key that the next evicting insert would remove.
    pub fn peek_lru(&self) -> Option<String> {
        self.inner
            .lock()
            .order
            .back()
            .map(|entry| entry.key().to_string())
    }

    // == Keys ==
    /// Returns all keys, most recently used first, without promoting any.
    pub fn keys(&self) -> Vec<String> {
        self.inner
            .lock()
            .order
            .iter()
            .map(|entry| entry.key().to_string())
            .collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.index.len());
        stats
    }

    /// Panics if index and list disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let inner = self.inner.lock();
        assert_eq!(inner.index.len(), inner.order.len());
        assert!(inner.index.len() <= self.capacity);
        for (key, &idx) in &inner.index {
            let entry = inner.order.get(idx).expect("index points at a live node");
            assert_eq!(entry.key(), key);
        }
        assert_eq!(inner.order.iter().count(), inner.order.len());
    }
}

impl<V> fmt::Debug for LruStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruStore")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

// == Cacher Implementation ==
impl<V> Cacher<V> for LruStore<V>
where
    V: Send + Sync,
{
    fn len(&self) -> usize {
        LruStore::len(self)
    }

    fn get(&self, key: &str) -> Option<Arc<V>> {
        LruStore::get(self, key)
    }

    fn set(&self, key: String, value: V, expiry: Duration) -> bool {
        LruStore::set(self, key, value, expiry)
    }

    fn remove(&self, key: &str) -> bool {
        LruStore::remove(self, key)
    }

    fn purge(&self) -> bool {
        LruStore::purge(self)
    }

    fn contains(&self, key: &str) -> bool {
        LruStore::contains(self, key)
    }

    fn capacity(&self) -> usize {
        LruStore::capacity(self)
    }

    fn stats(&self) -> CacheStats {
        LruStore::stats(self)
    }
}
