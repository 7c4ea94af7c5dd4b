//! Benchmark scenarios

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use memocache::{
    fibonacci, make_queries, random_array, run_queries, warm, LruCache, MemoStore, QueryConfig,
    RangeSumCache, SplayTree, UncachedArray,
};
use rand::Rng;
use tracing::{debug, info};

use crate::report::{FibReport, FibRow, RangeSumReport, StatsSummary};
use crate::{FibArgs, RangeSumArgs};

/// Replay one generated query mix through the uncached array and the LRU-backed one
pub fn run_range_sum<R: Rng>(args: &RangeSumArgs, rng: &mut R) -> Result<RangeSumReport> {
    let len = args.array_len as usize;
    let config = QueryConfig {
        hot_pool: args.hot_pool,
        p_hot: args.p_hot,
        p_update: args.p_update,
    };

    info!(
        "Range-sum run: {} elements, {} queries, capacity {}",
        len, args.queries, args.capacity
    );
    let values = random_array(len, rng);
    let queries = make_queries(len, args.queries, &config, rng);

    let mut plain = UncachedArray::new(values.clone());
    let start = Instant::now();
    let expected = run_queries(&mut plain, &queries)?;
    let uncached = start.elapsed();
    info!("Without cache: {:.2?}", uncached);

    let mut cached = RangeSumCache::new(values, args.capacity as usize, args.invalidation.into())?;
    let start = Instant::now();
    let checksum = run_queries(&mut cached, &queries)?;
    let with_cache = start.elapsed();
    info!("With LRU cache: {:.2?}", with_cache);

    ensure!(
        checksum == expected,
        "cached checksum {} differs from uncached {}",
        checksum,
        expected
    );

    Ok(RangeSumReport {
        array_len: len,
        queries: queries.len(),
        capacity: cached.capacity(),
        invalidation: format!("{:?}", cached.invalidation()),
        uncached_secs: uncached.as_secs_f64(),
        cached_secs: with_cache.as_secs_f64(),
        speedup: speedup(uncached, with_cache),
        stats: StatsSummary::from(cached.stats()),
    })
}

fn speedup(baseline: Duration, candidate: Duration) -> Option<f64> {
    if candidate.is_zero() {
        None
    } else {
        Some(baseline.as_secs_f64() / candidate.as_secs_f64())
    }
}

/// Mean seconds per `fib(n)` lookup on a store pre-filled with `fib(0..=n)`
fn time_lookups<M: MemoStore>(n: u64, repeats: u32, memo: &mut M) -> Result<f64> {
    warm(n, memo)?;

    let start = Instant::now();
    for _ in 0..repeats {
        black_box(fibonacci(black_box(n), memo)?);
    }
    Ok(start.elapsed().as_secs_f64() / f64::from(repeats))
}

/// Time memoized Fibonacci lookups for each measured n, fresh stores per n
pub fn run_fib(args: &FibArgs) -> Result<FibReport> {
    info!(
        "Fibonacci run: n = 0..={} step {}, {} lookups each",
        args.max_n, args.step, args.repeats
    );

    let mut rows = Vec::new();
    for n in (0..=args.max_n).step_by(args.step as usize) {
        let mut lru: LruCache<u64, u128> = LruCache::new(n as usize + 1)?;
        let lru_secs = time_lookups(n, args.repeats, &mut lru)?;

        let mut tree: SplayTree<u64, u128> = SplayTree::new();
        let splay_secs = time_lookups(n, args.repeats, &mut tree)?;

        debug!(n, lru_secs, splay_secs, splay_height = tree.height(), "measured");
        rows.push(FibRow {
            n,
            value: fibonacci(n, &mut tree)?.to_string(),
            lru_secs,
            splay_secs,
        });
    }

    Ok(FibReport {
        repeats: args.repeats,
        rows,
    })
}
