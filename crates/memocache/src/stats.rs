//! Cache statistics tracking

/// Counters for one cache instance
///
/// Owned by the service that drives the cache; plain integers since nothing
/// here is shared across threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    evictions: u64,
    inserts: u64,
    invalidations: u64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Record a cache miss
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Record an eviction
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Record an insert
    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    /// Record `count` entries dropped by invalidation
    pub fn record_invalidations(&mut self, count: usize) {
        self.invalidations += count as u64;
    }

    /// Get total hits
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Get total misses
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Get total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Get total inserts
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Get total invalidated entries
    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
