//! # bstmap
//!
//! An ordered map over integer keys and values, backed by an unbalanced
//! binary search tree.
//!
//! ## Overview
//!
//! This library provides [`OrderedMap`], a mutable associative container
//! that keeps its entries sorted by key. The backing tree performs no
//! rebalancing: its shape is determined purely by insertion order, so all
//! operations cost O(depth) — O(log N) for well-mixed insertion orders and
//! O(N) in the worst case (keys inserted in sorted order).
//!
//! - Insert-or-update, lookup, and removal
//! - O(1) length query
//! - In-order traversal in strictly ascending key order
//! - Total operations: no error cases, no panics
//!
//! ## Example
//!
//! ```rust
//! use bstmap::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(3, 30);
//! map.insert(1, 10);
//! map.insert(2, 20);
//!
//! // Entries are always visited in sorted key order
//! let keys: Vec<i64> = map.keys().collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize support for [`OrderedMap`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod ordered;

pub use ordered::OrderedMap;
pub use ordered::OrderedMapIterator;
