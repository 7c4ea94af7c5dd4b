//! memobench - compare LRU and splay-tree memoization on two workloads

mod report;
mod runner;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use memocache::{Invalidation, MAX_FIB_N};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

use crate::report::Report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RNG seed for arrays and queries
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Write a JSON report to this path
    #[arg(long, global = true)]
    json: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Range sums over a mutable array, with and without an LRU cache
    RangeSum(RangeSumArgs),

    /// Memoized Fibonacci lookups, LRU map vs splay tree
    Fib(FibArgs),

    /// Run both benchmarks
    All {
        #[command(flatten)]
        range_sum: RangeSumArgs,

        #[command(flatten)]
        fib: FibArgs,
    },
}

/// Range-sum benchmark configuration
#[derive(Args, Debug, Clone)]
pub struct RangeSumArgs {
    /// Array length
    #[arg(long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1..))]
    pub array_len: u64,

    /// Number of queries
    #[arg(long, default_value_t = 50_000)]
    pub queries: usize,

    /// Cache capacity (number of ranges)
    #[arg(short, long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub capacity: u64,

    /// Number of distinct hot ranges
    #[arg(long, default_value_t = 30)]
    pub hot_pool: usize,

    /// Probability a read hits the hot pool
    #[arg(long, default_value_t = 0.95, value_parser = parse_probability)]
    pub p_hot: f64,

    /// Probability a query is an update
    #[arg(long, default_value_t = 0.03, value_parser = parse_probability)]
    pub p_update: f64,

    /// How updates find cached ranges to drop
    #[arg(long, value_enum, default_value_t = InvalidationArg::Scan)]
    pub invalidation: InvalidationArg,
}

/// Fibonacci benchmark configuration
#[derive(Args, Debug, Clone)]
pub struct FibArgs {
    /// Largest n measured (fib(186) is the last to fit in u128)
    #[arg(long, default_value_t = 180, value_parser = clap::value_parser!(u64).range(0..=MAX_FIB_N))]
    pub max_n: u64,

    /// Distance between measured n values
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub step: u64,

    /// Lookups timed per n
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    pub repeats: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationArg {
    /// Test every cached range
    Scan,
    /// Ordered index over cached ranges
    Indexed,
}

impl From<InvalidationArg> for Invalidation {
    fn from(arg: InvalidationArg) -> Self {
        match arg {
            InvalidationArg::Scan => Invalidation::Scan,
            InvalidationArg::Indexed => Invalidation::Indexed,
        }
    }
}

fn parse_probability(s: &str) -> std::result::Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{} is not in [0, 1]", p))
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    info!("memobench v{} (seed {})", env!("CARGO_PKG_VERSION"), cli.seed);

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut report = Report::new(cli.seed);

    match &cli.command {
        Command::RangeSum(args) => {
            report.range_sum = Some(runner::run_range_sum(args, &mut rng)?);
        }
        Command::Fib(args) => {
            report.fib = Some(runner::run_fib(args)?);
        }
        Command::All { range_sum, fib } => {
            report.range_sum = Some(runner::run_range_sum(range_sum, &mut rng)?);
            report.fib = Some(runner::run_fib(fib)?);
        }
    }

    report.print();

    if let Some(path) = &cli.json {
        report.write_json(path)?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probability() {
        assert_eq!(parse_probability("0.5"), Ok(0.5));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("1.5").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("abc").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["memobench", "range-sum"]).unwrap();

        assert_eq!(cli.seed, 42);
        assert!(cli.json.is_none());
        match cli.command {
            Command::RangeSum(args) => {
                assert_eq!(args.array_len, 100_000);
                assert_eq!(args.queries, 50_000);
                assert_eq!(args.capacity, 1000);
                assert_eq!(args.hot_pool, 30);
                assert_eq!(args.p_hot, 0.95);
                assert_eq!(args.p_update, 0.03);
                assert_eq!(args.invalidation, InvalidationArg::Scan);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["memobench", "range-sum", "--capacity", "0"]).is_err());
        assert!(Cli::try_parse_from(["memobench", "fib", "--max-n", "200"]).is_err());
        assert!(Cli::try_parse_from(["memobench", "fib", "--step", "0"]).is_err());
    }

    #[test]
    fn test_cli_all_with_global_flags() {
        let cli = Cli::try_parse_from([
            "memobench",
            "all",
            "--invalidation",
            "indexed",
            "--max-n",
            "50",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(cli.seed, 7);
        match cli.command {
            Command::All { range_sum, fib } => {
                assert_eq!(Invalidation::from(range_sum.invalidation), Invalidation::Indexed);
                assert_eq!(fib.max_n, 50);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
