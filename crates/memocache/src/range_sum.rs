//! Range-sum queries over a mutable array
//!
//! Ranges are closed: `(left, right)` covers `values[left..=right]`.

use std::collections::BTreeSet;

use memocore::{Error, LruCache, Result};
use tracing::trace;

use crate::stats::CacheStats;

/// Range-sum access pattern shared by the cached and uncached backends
pub trait RangeSum {
    /// Sum of `values[left..=right]`
    fn range_sum(&mut self, left: usize, right: usize) -> Result<i64>;

    /// Overwrite `values[index]`
    fn update(&mut self, index: usize, value: i64) -> Result<()>;

    /// Current array contents
    fn values(&self) -> &[i64];
}

fn check_range(values: &[i64], left: usize, right: usize) -> Result<()> {
    if left > right || right >= values.len() {
        return Err(Error::InvalidRange {
            left,
            right,
            len: values.len(),
        });
    }
    Ok(())
}

fn check_index(values: &[i64], index: usize) -> Result<()> {
    if index >= values.len() {
        return Err(Error::IndexOutOfBounds {
            index,
            len: values.len(),
        });
    }
    Ok(())
}

fn sum(values: &[i64], left: usize, right: usize) -> Result<i64> {
    values[left..=right]
        .iter()
        .try_fold(0i64, |acc, &v| acc.checked_add(v))
        .ok_or(Error::SumOverflow { left, right })
}

/// Array that recomputes every sum
#[derive(Debug, Clone)]
pub struct UncachedArray {
    values: Vec<i64>,
}

impl UncachedArray {
    /// Wrap `values`
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }
}

impl RangeSum for UncachedArray {
    fn range_sum(&mut self, left: usize, right: usize) -> Result<i64> {
        check_range(&self.values, left, right)?;
        sum(&self.values, left, right)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        check_index(&self.values, index)?;
        self.values[index] = value;
        Ok(())
    }

    fn values(&self) -> &[i64] {
        &self.values
    }
}

/// How an update finds the cached ranges it invalidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Invalidation {
    /// Test every cached key
    #[default]
    Scan,

    /// Keep cached ranges in a `BTreeSet` ordered by `(left, right)` and only
    /// visit ranges with `left <= index`. Costs a set insert/remove on every
    /// cache insert, eviction, and invalidation.
    Indexed,
}

/// Array whose range sums are cached in an LRU map
pub struct RangeSumCache {
    values: Vec<i64>,
    cache: LruCache<(usize, usize), i64>,
    /// Mirror of the cached keys, present for `Invalidation::Indexed`
    index: Option<BTreeSet<(usize, usize)>>,
    stats: CacheStats,
}

impl RangeSumCache {
    /// Create a cached array holding at most `capacity` sums
    ///
    /// # Errors
    /// * `Error::ZeroCapacity` - `capacity` is 0
    pub fn new(values: Vec<i64>, capacity: usize, invalidation: Invalidation) -> Result<Self> {
        let index = match invalidation {
            Invalidation::Scan => None,
            Invalidation::Indexed => Some(BTreeSet::new()),
        };

        Ok(Self {
            values,
            cache: LruCache::new(capacity)?,
            index,
            stats: CacheStats::new(),
        })
    }

    /// Invalidation strategy in use
    pub fn invalidation(&self) -> Invalidation {
        if self.index.is_some() {
            Invalidation::Indexed
        } else {
            Invalidation::Scan
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Whether the sum for `(left, right)` is cached; does not promote it
    pub fn is_cached(&self, left: usize, right: usize) -> bool {
        self.cache.contains(&(left, right))
    }

    /// Clear the cache (array remains unchanged)
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        if let Some(index) = &mut self.index {
            index.clear();
        }
        self.stats.reset();
    }

    fn insert(&mut self, key: (usize, usize), value: i64) {
        self.stats.record_insert();
        if let Some((evicted, _)) = self.cache.push(key, value) {
            self.stats.record_eviction();
            if let Some(index) = &mut self.index {
                index.remove(&evicted);
            }
        }
        if let Some(index) = &mut self.index {
            index.insert(key);
        }
    }

    fn invalidate(&mut self, position: usize) -> usize {
        match &mut self.index {
            None => self
                .cache
                .remove_matching(|&(left, right)| left <= position && position <= right),
            Some(index) => {
                let doomed: Vec<(usize, usize)> = index
                    .range(..=(position, usize::MAX))
                    .filter(|&&(_, right)| right >= position)
                    .copied()
                    .collect();

                for key in &doomed {
                    index.remove(key);
                    self.cache.remove(key);
                }
                doomed.len()
            }
        }
    }
}

impl RangeSum for RangeSumCache {
    fn range_sum(&mut self, left: usize, right: usize) -> Result<i64> {
        check_range(&self.values, left, right)?;

        let key = (left, right);
        if let Some(&cached) = self.cache.get(&key) {
            self.stats.record_hit();
            return Ok(cached);
        }

        self.stats.record_miss();
        let value = sum(&self.values, left, right)?;
        self.insert(key, value);
        Ok(value)
    }

    fn update(&mut self, index: usize, value: i64) -> Result<()> {
        check_index(&self.values, index)?;
        self.values[index] = value;

        let removed = self.invalidate(index);
        if removed > 0 {
            trace!(index, removed, "invalidated cached ranges");
        }
        self.stats.record_invalidations(removed);
        Ok(())
    }

    fn values(&self) -> &[i64] {
        &self.values
    }
}
