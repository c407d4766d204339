//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{CacheError, Result};

/// Environment variable holding the maximum number of cached entries.
pub const MAX_ENTRIES_VAR: &str = "CACHE_MAX_ENTRIES";

/// Environment variable holding the default expiry in seconds.
pub const DEFAULT_EXPIRY_VAR: &str = "CACHE_DEFAULT_EXPIRY_SECS";

const DEFAULT_EXPIRY_SECS: u64 = 300;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Expiry in seconds attached to entries inserted without an explicit one
    pub default_expiry_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_DEFAULT_EXPIRY_SECS` - Default expiry in seconds (default: 300)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`Config::from_env`], but rejects values that are set and do not parse.
    pub fn try_from_env() -> Result<Self> {
        Self::try_from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            max_entries: lookup(MAX_ENTRIES_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            default_expiry_secs: lookup(DEFAULT_EXPIRY_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_expiry_secs),
        }
    }

    fn try_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            max_entries: parse_var(&lookup, MAX_ENTRIES_VAR)?.unwrap_or(defaults.max_entries),
            default_expiry_secs: parse_var(&lookup, DEFAULT_EXPIRY_VAR)?
                .unwrap_or(defaults.default_expiry_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a usable cache.
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(CacheError::InvalidCapacity(self.max_entries));
        }
        Ok(())
    }

    /// Default expiry as a [`Duration`].
    pub fn default_expiry(&self) -> Duration {
        Duration::from_secs(self.default_expiry_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CAPACITY,
            default_expiry_secs: DEFAULT_EXPIRY_SECS,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CacheError::InvalidConfig(format!("{}={}", name, raw))),
        None => Ok(None),
    }
}
