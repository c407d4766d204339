//! Cache Facade
//!
//! The public entry point. [`Cache`] owns a single eviction-policy
//! implementation and forwards every call to it unchanged.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cache::{CacheStats, Cacher, LruStore, DEFAULT_CAPACITY};
use crate::config::Config;
use crate::error::Result;

/// Thread-safe, bounded key-value cache.
///
/// Values are stored once and handed out as [`Arc`]s, so a `get` never
/// copies the payload. Share a `Cache` between threads by wrapping it in an
/// `Arc`.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use recency_cache::Cache;
///
/// let cache = Cache::new(2).unwrap();
/// cache.set("a", 1, Duration::from_secs(60));
/// cache.set("b", 2, Duration::from_secs(60));
/// cache.get("a");
/// cache.set("c", 3, Duration::from_secs(60)); // evicts "b"
///
/// assert_eq!(cache.get("b"), None);
/// assert_eq!(cache.get("a").as_deref(), Some(&1));
/// ```
pub struct Cache<V> {
    cache: Box<dyn Cacher<V>>,
    default_expiry: Duration,
}

impl<V> Cache<V>
where
    V: Send + Sync + 'static,
{
    // == Constructors ==
    /// Creates an LRU cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::with_cacher(Box::new(LruStore::new(capacity)?)))
    }

    /// Creates an LRU cache from a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut cache = Self::new(config.max_entries)?;
        cache.default_expiry = config.default_expiry();
        info!(
            "Cache initialized: max_entries={}, default_expiry={}s",
            config.max_entries, config.default_expiry_secs
        );
        Ok(cache)
    }

    /// Wraps an arbitrary eviction policy.
    pub fn with_cacher(cache: Box<dyn Cacher<V>>) -> Self {
        Self {
            cache,
            default_expiry: Config::default().default_expiry(),
        }
    }

    // == Operations ==
    /// Inserts or overwrites `key`. Returns true if another entry was evicted.
    ///
    /// `expiry` is recorded with the entry but does not limit its lifetime.
    pub fn set(&self, key: impl Into<String>, value: V, expiry: Duration) -> bool {
        self.cache.set(key.into(), value, expiry)
    }

    /// Like [`Cache::set`], using the configured default expiry.
    pub fn insert(&self, key: impl Into<String>, value: V) -> bool {
        self.cache.set(key.into(), value, self.default_expiry)
    }

    /// Looks up `key`. A hit marks the entry as most recently used.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        self.cache.get(key)
    }

    /// Removes `key`. Returns true if it was present.
    pub fn remove(&self, key: &str) -> bool {
        self.cache.remove(key)
    }

    /// Removes every entry.
    pub fn purge(&self) -> bool {
        self.cache.purge()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns true if `key` is present. Does not count as a use.
    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Returns a snapshot of hit, miss and eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<V> Default for Cache<V>
where
    V: Send + Sync + 'static,
{
    /// An LRU cache of [`DEFAULT_CAPACITY`] entries.
    fn default() -> Self {
        Self::with_cacher(Box::new(LruStore::with_capacity(DEFAULT_CAPACITY)))
    }
}

impl<V> fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("capacity", &self.cache.capacity())
            .field("len", &self.cache.len())
            .field("default_expiry", &self.default_expiry)
            .finish()
    }
}
