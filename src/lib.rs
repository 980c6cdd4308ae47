//! Self-adjusting splay trees for Rust.
//!
//! This crate provides two collections built on the same splay engine:
//!
//! - [`OrderStatisticTree`] - A sequence addressed by 1-based [`Position`]. Nodes
//!   carry subtree sizes, so searching, inserting, and removing by position are
//!   amortized O(log n).
//! - [`SplayTree`] - An ordered set with parent-linked nodes. Besides `insert`,
//!   `contains`, and `remove` it can split itself in two around a value with
//!   [`remove_less`](SplayTree::remove_less) and
//!   [`remove_greater`](SplayTree::remove_greater).
//!
//! Every successful access moves the touched node to the root, so a working set of
//! hot values stays near the top of the tree.
//!
//! # Example
//!
//! ```
//! use splay_tree::{OrderStatisticTree, Position, SplayTree};
//!
//! let mut seq = OrderStatisticTree::new();
//! for (i, value) in [5, 7, 2, 1, 4, 0].into_iter().enumerate() {
//!     seq.insert(value, i + 1)?;
//! }
//! assert_eq!(seq.search(5)?, &4);
//! assert_eq!(seq[Position(1)], 5);
//!
//! let mut set = SplayTree::from([10, 5, 15, 3, 7]);
//! assert!(set.contains(&7));
//! let high = set.remove_greater(&7)?;
//! assert_eq!(high.iter().copied().collect::<Vec<_>>(), [10, 15]);
//! # Ok::<(), splay_tree::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No unsafe code** - Nodes live in an index arena and link to each other by handle
//! - **`tracing`** - Optional feature that emits trace events for splays, removals, and splits

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod position;
mod raw;
mod tracing_helpers;

pub mod order_statistic_tree;
pub mod splay_tree;

pub use error::{Error, Result};
pub use order_statistic_tree::OrderStatisticTree;
pub use position::Position;
pub use splay_tree::SplayTree;
