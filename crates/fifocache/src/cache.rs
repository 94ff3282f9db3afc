//! FifoCache: the insertion-ordered chain behind a single lock

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::chain::Chain;
use crate::config::CacheConfig;
use crate::error::{Error, Result};
use crate::stats::CacheStats;

/// Thread-safe, fixed-capacity key to integer cache with FIFO eviction
///
/// Every operation takes the same mutex for its whole duration, reads
/// included. Reads never reorder entries: eviction follows insertion order
/// only. Share between threads with `Arc<FifoCache>`.
pub struct FifoCache {
    /// Chain, index and size, all guarded together
    chain: Mutex<Chain>,

    /// Cache statistics
    stats: CacheStats,
}

impl FifoCache {
    /// Create an empty cache holding at most `capacity` entries
    ///
    /// # Panics
    /// If `capacity` is 0. Use [`CacheConfig::build`] to get an error instead.
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "creating fifo cache");

        Self {
            chain: Mutex::new(Chain::new(capacity)),
            stats: CacheStats::new(),
        }
    }

    /// Create a cache from validated settings
    ///
    /// # Returns
    /// * `Result<FifoCache>` - `Error::InvalidCapacity` if the config is rejected
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Insert a key/value pair at the newest end
    ///
    /// If the cache is full the oldest entry is evicted first. Inserting a
    /// key that is already present does not update the existing entry: a
    /// second entry is appended and lookups see the newer one, while the
    /// older one keeps its slot until it is evicted in turn.
    pub fn insert(&self, key: impl Into<String>, value: i64) {
        let key = key.into();
        let mut chain = self.chain.lock();

        if let Some((evicted, _)) = chain.push(key, value) {
            trace!(key = %evicted, "evicted oldest entry");
            self.stats.record_eviction();
        }
        self.stats.record_insert();
    }

    /// Get the value stored under `key`
    ///
    /// # Returns
    /// * `Result<i64>` - `Error::NotFound` if the key is not cached
    pub fn get(&self, key: &str) -> Result<i64> {
        let chain = self.chain.lock();

        match chain.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Ok(value)
            }
            None => {
                self.stats.record_miss();
                Err(Error::NotFound)
            }
        }
    }

    /// Check whether `key` can be looked up, without touching the counters
    pub fn contains(&self, key: &str) -> bool {
        self.chain.lock().contains(key)
    }

    /// Keys from oldest to newest
    ///
    /// The returned vector is an owned copy; later inserts do not change it.
    pub fn keys(&self) -> Vec<String> {
        let chain = self.chain.lock();
        chain.iter().map(|(key, _)| key.to_owned()).collect()
    }

    /// Values from oldest to newest, index-aligned with [`FifoCache::keys`]
    /// as long as nothing is inserted between the two calls
    pub fn values(&self) -> Vec<i64> {
        let chain = self.chain.lock();
        chain.iter().map(|(_, value)| value).collect()
    }

    /// Key/value pairs from oldest to newest, taken under one lock
    pub fn entries(&self) -> Vec<(String, i64)> {
        let chain = self.chain.lock();
        chain
            .iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect()
    }

    /// Number of entries held, shadowed duplicates included
    pub fn len(&self) -> usize {
        self.chain.lock().len()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.chain.lock().capacity()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

impl std::fmt::Debug for FifoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chain = self.chain.lock();
        f.debug_struct("FifoCache")
            .field("len", &chain.len())
            .field("capacity", &chain.capacity())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
