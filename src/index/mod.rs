//! The two word-index implementations built from the same posting stream.
//!
//! [`avl::AvlIndex`] keeps words in a height-balanced search tree for
//! O(log n) exact-match and sorted traversal; [`hash::HashIndex`] keeps them
//! in a growing chained hash table for O(1) average exact-match. The query
//! layer runs the same lookups against both so their latency can be compared.

pub mod avl;
pub mod hash;

pub use avl::{AvlEntry, AvlIndex};
pub use hash::HashIndex;
