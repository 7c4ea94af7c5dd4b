//! Memoized Fibonacci over a pluggable store
//!
//! The memo table is passed in by the caller, so each run owns its own state
//! and nothing leaks between runs.

use memocore::{Error, LruCache, Result, SplayTree};

/// Backing store for memoized results keyed by `n`
pub trait MemoStore {
    /// Cached value for `n`, if any; may reorder the store
    fn lookup(&mut self, n: u64) -> Option<u128>;

    /// Remember `value` for `n`
    fn store(&mut self, n: u64, value: u128);
}

impl MemoStore for SplayTree<u64, u128> {
    fn lookup(&mut self, n: u64) -> Option<u128> {
        self.find(&n).copied()
    }

    fn store(&mut self, n: u64, value: u128) {
        self.insert(n, value);
    }
}

impl MemoStore for LruCache<u64, u128> {
    fn lookup(&mut self, n: u64) -> Option<u128> {
        self.get(&n).copied()
    }

    fn store(&mut self, n: u64, value: u128) {
        self.put(n, value);
    }
}

/// Largest `n` whose Fibonacci number fits in a `u128`
pub const MAX_FIB_N: u64 = 186;

/// `fib(n)` with `fib(0) = 0` and `fib(1) = 1`, memoized through `memo`
///
/// Base cases are never stored. Recursion depth is at most `MAX_FIB_N`.
///
/// # Errors
/// * `Error::Overflow` - `n > MAX_FIB_N`, the result does not fit in a `u128`
pub fn fibonacci<M: MemoStore>(n: u64, memo: &mut M) -> Result<u128> {
    if n > MAX_FIB_N {
        return Err(Error::Overflow(n));
    }
    if n < 2 {
        return Ok(u128::from(n));
    }

    if let Some(value) = memo.lookup(n) {
        return Ok(value);
    }

    let value = fibonacci(n - 1, memo)?
        .checked_add(fibonacci(n - 2, memo)?)
        .ok_or(Error::Overflow(n))?;
    memo.store(n, value);
    Ok(value)
}

/// Fill `memo` with `fib(0..=n)` in ascending order and return `fib(n)`
pub fn warm<M: MemoStore>(n: u64, memo: &mut M) -> Result<u128> {
    let mut last = 0;
    for i in 0..=n {
        last = fibonacci(i, memo)?;
    }
    Ok(last)
}
