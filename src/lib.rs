//! Unbalanced binary-search-tree collections for Rust.
//!
//! This crate provides [`BstSet`], an ordered set backed by a plain
//! (non-self-balancing) binary search tree over a caller-supplied total
//! order:
//!
//! - [`insert`](BstSet::insert) / [`remove`](BstSet::remove) /
//!   [`contains`](BstSet::contains) - the usual set operations
//! - [`iter`](BstSet::iter) - ascending in-order traversal
//! - [`cursor_mut`](BstSet::cursor_mut) - a traversal that can remove the
//!   element it last yielded without losing its position
//!
//! # Example
//!
//! ```
//! use plain_tree::BstSet;
//!
//! let mut primes = BstSet::new();
//! primes.insert(5);
//! primes.insert(2);
//! primes.insert(3);
//!
//! assert!(primes.contains(&3));
//! assert_eq!(primes.len(), 3);
//!
//! // In-order iteration yields ascending order regardless of insertion order.
//! let sorted: Vec<_> = primes.iter().copied().collect();
//! assert_eq!(sorted, [2, 3, 5]);
//! ```
//!
//! Sets can also be ordered by an arbitrary comparator:
//!
//! ```
//! use plain_tree::BstSet;
//!
//! let mut newest_first = BstSet::with_order(|a: &u32, b: &u32| b.cmp(a));
//! newest_first.insert(1);
//! newest_first.insert(3);
//! newest_first.insert(2);
//! assert_eq!(newest_first.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Arena-backed** - Nodes live in a slot arena addressed by niche-optimized
//!   integer handles; parent back-references are plain indices, so there are no
//!   `Rc` cycles and no unsafe code
//! - **Caller-supplied order** - Any [`TotalOrder`] (including plain closures)
//!   defines both ordering and set-membership equality
//!
//! # Implementation
//!
//! The tree is deliberately not self-balancing: its shape is purely a function
//! of the operation history, and adversarial (sorted) insertion degrades it to
//! a linked list. All operations are bounded by tree height. Removal of a node
//! with two children substitutes its in-order successor, which keeps any
//! in-progress cursor correctly positioned.

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

mod order;
mod raw;

pub mod bst_set;

pub use bst_set::BstSet;
pub use order::{Natural, TotalOrder};
