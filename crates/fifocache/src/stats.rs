//! Cache counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Running counters for a [`crate::FifoCache`]
///
/// Counters are bumped while the cache lock is held but can be read from any
/// thread without taking it.
#[derive(Debug, Default)]
pub struct CacheStats {
    inserts: AtomicU64,
    evictions: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Point-in-time copy of [`CacheStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Entries appended
    pub inserts: u64,
    /// Entries detached from the oldest end
    pub evictions: u64,
    /// Lookups that found a value
    pub hits: u64,
    /// Lookups that returned `NotFound`
    pub misses: u64,
}

impl CacheStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Total inserts
    pub fn inserts(&self) -> u64 {
        self.inserts.load(Ordering::Relaxed)
    }

    /// Total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Total lookup hits
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total lookup misses
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Fraction of lookups that hit (0.0 to 1.0), 0.0 before any lookup
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Copy all counters at once
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts(),
            evictions: self.evictions(),
            hits: self.hits(),
            misses: self.misses(),
        }
    }

    /// Zero all counters
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
