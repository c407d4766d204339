//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::sync::Arc;
use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its value and metadata.
///
/// The value is held behind an [`Arc`] so that reads hand out the stored
/// payload itself rather than a copy of it.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// The key this entry is indexed under
    key: String,
    /// The stored value
    value: Arc<V>,
    /// Expiry supplied at insertion. Carried as metadata, never enforced.
    expiry: Duration,
    /// When the current value was written
    inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry.
    pub fn new(key: String, value: V, expiry: Duration) -> Self {
        Self {
            key,
            value: Arc::new(value),
            expiry,
            inserted_at: Instant::now(),
        }
    }

    // == Accessors ==
    /// Returns the key of this entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns a shared handle to the stored value.
    pub fn value(&self) -> Arc<V> {
        Arc::clone(&self.value)
    }

    /// Returns the expiry supplied when the value was written.
    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Returns how long ago the current value was written.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    // == Replace ==
    /// Overwrites value and expiry in place, keeping the key.
    pub fn replace(&mut self, value: V, expiry: Duration) {
        self.value = Arc::new(value);
        self.expiry = expiry;
        self.inserted_at = Instant::now();
    }

    /// Consumes the entry and returns its key.
    pub fn into_key(self) -> String {
        self.key
    }
}
