//! Query generation for range-sum runs
//!
//! Most reads hit a small pool of wide "hot" ranges, so a cache has
//! something to reuse; a few percent of queries are point updates that force
//! invalidation.

use rand::Rng;
use tracing::debug;

use memocore::Result;

use crate::range_sum::RangeSum;

/// One operation against a range-sum backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Sum of `values[left..=right]`
    Range {
        /// Inclusive left bound
        left: usize,
        /// Inclusive right bound
        right: usize,
    },
    /// Set `values[index] = value`
    Update {
        /// Array index
        index: usize,
        /// New value
        value: i64,
    },
}

/// Shape of a generated query mix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryConfig {
    /// Number of distinct hot ranges
    pub hot_pool: usize,
    /// Probability a read is drawn from the hot pool
    pub p_hot: f64,
    /// Probability a query is an update
    pub p_update: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            hot_pool: 30,
            p_hot: 0.95,
            p_update: 0.03,
        }
    }
}

/// Array of `len` values drawn from `1..=100`
pub fn random_array<R: Rng>(len: usize, rng: &mut R) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(1..=100)).collect()
}

/// Generate `count` queries over an array of `len` elements
///
/// Hot ranges start in the first half of the array and end in the second.
/// Updates pick a uniform index and a value in `1..=100`. Returns nothing
/// for an empty array.
pub fn make_queries<R: Rng>(
    len: usize,
    count: usize,
    config: &QueryConfig,
    rng: &mut R,
) -> Vec<Query> {
    if len == 0 {
        return Vec::new();
    }

    let mid = len / 2;
    let hot: Vec<(usize, usize)> = (0..config.hot_pool)
        .map(|_| (rng.random_range(0..=mid), rng.random_range(mid..len)))
        .collect();

    let mut updates = 0;
    let queries: Vec<Query> = (0..count)
        .map(|_| {
            if rng.random::<f64>() < config.p_update {
                updates += 1;
                return Query::Update {
                    index: rng.random_range(0..len),
                    value: rng.random_range(1..=100),
                };
            }

            if !hot.is_empty() && rng.random::<f64>() < config.p_hot {
                let (left, right) = hot[rng.random_range(0..hot.len())];
                Query::Range { left, right }
            } else {
                let left = rng.random_range(0..len);
                let right = rng.random_range(left..len);
                Query::Range { left, right }
            }
        })
        .collect();

    debug!(len, count, updates, hot = hot.len(), "generated queries");
    queries
}

/// Replay `queries` against `backend`
///
/// Returns the wrapping sum of every range result, so two backends can be
/// checked for agreement.
pub fn run_queries<B: RangeSum + ?Sized>(backend: &mut B, queries: &[Query]) -> Result<i64> {
    let mut checksum = 0i64;
    for query in queries {
        match *query {
            Query::Range { left, right } => {
                checksum = checksum.wrapping_add(backend.range_sum(left, right)?);
            }
            Query::Update { index, value } => backend.update(index, value)?,
        }
    }
    Ok(checksum)
}
