//! # memocore
//!
//! In-memory memoization stores.
//!
//! ## Architecture
//! - **LruCache**: AHash map into a slot arena threaded with a recency list,
//!   O(1) get/put and oldest-first eviction
//! - **SplayTree**: arena-backed self-adjusting BST, accessed nodes are
//!   rotated to the root
//!
//! Both are single-owner structures: mutate through `&mut self`, wrap
//! externally if sharing is ever needed.

#![warn(missing_docs)]

mod error;
mod lru;
mod splay;

pub use error::{Error, Result};
pub use lru::{Keys, LruCache};
pub use splay::{Iter, SplayTree};
