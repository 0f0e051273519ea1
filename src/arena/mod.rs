//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! binary trees and their in-order traversal.

pub mod binary_tree;
pub mod in_order;

pub use binary_tree::{ArenaIndex, ArenaNode, BinaryArenaTree, Side};
pub use in_order::OrderedTreeIterator;
