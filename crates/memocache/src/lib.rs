//! # memocache
//!
//! Workloads that put the memocore stores to use.
//!
//! ## Architecture
//! - **Range sums**: LRU-cached sums over a mutable array, invalidated on
//!   every write to an index the cached range covers
//! - **Fibonacci**: recursive computation memoized through any [`MemoStore`]
//!   (splay tree or LRU map)
//! - **Queries**: seeded generator for the hot-set/update mix used in runs
//! - **Stats**: hit/miss/eviction/invalidation counters

#![warn(missing_docs)]

mod fib;
mod range_sum;
mod stats;
mod workload;

pub use fib::{fibonacci, warm, MemoStore, MAX_FIB_N};
pub use range_sum::{Invalidation, RangeSum, RangeSumCache, UncachedArray};
pub use stats::CacheStats;
pub use workload::{make_queries, random_array, run_queries, Query, QueryConfig};

pub use memocore::{Error, LruCache, Result, SplayTree};
