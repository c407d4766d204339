//! Recency Cache - A thread-safe, bounded in-memory key-value cache
//!
//! Values are kept up to a fixed number of entries. When the cache is full,
//! the least recently used entry is evicted to make room; both reads and
//! writes count as uses.

pub mod cache;
pub mod config;
pub mod error;
pub mod facade;

pub use cache::{CacheStats, Cacher, LruStore, DEFAULT_CAPACITY};
pub use config::Config;
pub use error::{CacheError, Result};
pub use facade::Cache;
