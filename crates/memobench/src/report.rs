//! Benchmark results: console tables and JSON export

use anyhow::{Context, Result};
use memocache::CacheStats;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Cache counters at the end of a run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsSummary {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub inserts: u64,
    pub invalidations: u64,
    pub hit_ratio: f64,
}

impl From<&CacheStats> for StatsSummary {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits(),
            misses: stats.misses(),
            evictions: stats.evictions(),
            inserts: stats.inserts(),
            invalidations: stats.invalidations(),
            hit_ratio: stats.hit_ratio(),
        }
    }
}

/// Uncached vs cached range-sum timings
#[derive(Debug, Clone, Serialize)]
pub struct RangeSumReport {
    pub array_len: usize,
    pub queries: usize,
    pub capacity: usize,
    pub invalidation: String,
    pub uncached_secs: f64,
    pub cached_secs: f64,
    /// `None` when the cached run was too fast to measure
    pub speedup: Option<f64>,
    pub stats: StatsSummary,
}

/// One measured n
#[derive(Debug, Clone, Serialize)]
pub struct FibRow {
    pub n: u64,
    /// Decimal string; u128 does not survive JSON numbers
    pub value: String,
    pub lru_secs: f64,
    pub splay_secs: f64,
}

/// Mean lookup times per n for both memo stores
#[derive(Debug, Clone, Serialize)]
pub struct FibReport {
    pub repeats: u32,
    pub rows: Vec<FibRow>,
}

/// Everything a single invocation produced
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_sum: Option<RangeSumReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fib: Option<FibReport>,
}

impl Report {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            range_sum: None,
            fib: None,
        }
    }

    /// Print result tables to stdout
    pub fn print(&self) {
        if let Some(range_sum) = &self.range_sum {
            range_sum.print();
        }
        if let Some(fib) = &self.fib {
            fib.print();
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize report")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        Ok(())
    }
}

impl RangeSumReport {
    fn print(&self) {
        println!("\nRange-sum queries ({} elements, {} queries)", self.array_len, self.queries);
        println!("{}", "-".repeat(54));
        println!("{:<28}{:>12.4} s", "Without cache", self.uncached_secs);
        println!(
            "{:<28}{:>12.4} s",
            format!("LRU cache (k={}, {})", self.capacity, self.invalidation.to_lowercase()),
            self.cached_secs
        );
        match self.speedup {
            Some(speedup) => println!("Cached version is {:.1}x faster", speedup),
            None => println!("Speedup not measurable (cached run too fast)"),
        }
        println!(
            "Hits {} / misses {} ({:.1}% hit rate), evictions {}, invalidated {}",
            self.stats.hits,
            self.stats.misses,
            self.stats.hit_ratio * 100.0,
            self.stats.evictions,
            self.stats.invalidations
        );
    }
}

impl FibReport {
    fn print(&self) {
        println!("\nFibonacci lookups (mean of {} per n)", self.repeats);
        println!("{:<10}| {:<20}| {:<20}", "n", "LRU Cache Time (s)", "Splay Tree Time (s)");
        println!("{}", "-".repeat(54));
        for row in &self.rows {
            println!("{:<10}| {:<20.8}| {:<20.8}", row.n, row.lru_secs, row.splay_secs);
        }
    }
}
