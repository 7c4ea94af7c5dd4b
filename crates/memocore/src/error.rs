//! Error types for memocore and the workloads built on it

use std::fmt;

/// Result type alias for memocore operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by cache construction and the workloads using the caches
///
/// A lookup miss is never an error; stores report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with a capacity of zero
    ZeroCapacity,

    /// Range query outside the array or with `left > right`
    InvalidRange {
        /// Inclusive left bound
        left: usize,
        /// Inclusive right bound
        right: usize,
        /// Length of the array
        len: usize,
    },

    /// Update index outside the array
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the array
        len: usize,
    },

    /// Range sum does not fit in an `i64`
    SumOverflow {
        /// Inclusive left bound
        left: usize,
        /// Inclusive right bound
        right: usize,
    },

    /// Fibonacci number does not fit in a `u128`
    Overflow(u64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "Cache capacity must be greater than 0"),
            Error::InvalidRange { left, right, len } => write!(
                f,
                "Invalid range [{}, {}] for array of length {}",
                left, right, len
            ),
            Error::IndexOutOfBounds { index, len } => write!(
                f,
                "Index {} out of bounds for array of length {}",
                index, len
            ),
            Error::SumOverflow { left, right } => {
                write!(f, "Sum of range [{}, {}] overflows i64", left, right)
            }
            Error::Overflow(n) => write!(f, "fib({}) overflows u128", n),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::ZeroCapacity.to_string(),
            "Cache capacity must be greater than 0"
        );
        assert_eq!(
            Error::InvalidRange { left: 4, right: 2, len: 10 }.to_string(),
            "Invalid range [4, 2] for array of length 10"
        );
        assert_eq!(Error::Overflow(200).to_string(), "fib(200) overflows u128");
        assert_eq!(
            Error::SumOverflow { left: 0, right: 1 }.to_string(),
            "Sum of range [0, 1] overflows i64"
        );
    }
}
