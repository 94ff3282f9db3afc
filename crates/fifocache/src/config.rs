//! Cache construction settings

use crate::cache::FifoCache;
use crate::error::{Error, Result};

/// Capacity used by [`CacheConfig::default`]
pub const DEFAULT_CAPACITY: usize = 1024;

/// Settings for building a [`FifoCache`]
///
/// This is the checked way in: [`FifoCache::new`] panics on a zero capacity,
/// `CacheConfig::build` reports it as [`Error::InvalidCapacity`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Config with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check the settings without building anything
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }

    /// Validate and build the cache
    pub fn build(self) -> Result<FifoCache> {
        FifoCache::with_config(self)
    }
}
