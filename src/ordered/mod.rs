//! Ordered (key-sorted) containers.
//!
//! This module provides [`OrderedMap`], a mutable ordered map over `i64`
//! keys and values backed by an unbalanced binary search tree.
//!
//! # Examples
//!
//! ```rust
//! use bstmap::ordered::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(10, 10);
//! map.insert(5, 5);
//! map.insert(15, 15);
//!
//! assert_eq!(map.len(), 3);
//! assert!(map.contains_key(5));
//!
//! let keys: Vec<i64> = map.keys().collect();
//! assert_eq!(keys, vec![5, 10, 15]);
//! ```

mod map;

pub use map::OrderedMap;
pub use map::OrderedMapIterator;
