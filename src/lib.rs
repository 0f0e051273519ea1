//! ## About
//!
//! Three traversals behind one iteration contract, [Traversing]:
//!
//! * [SequenceIterator] steps through a slice,
//! * [OrderedTreeIterator] visits a [BinaryArenaTree] in order (left subtree, node, right subtree)
//!   with an explicit stack,
//! * [FrontierGraphIterator] walks an [AdjacencyGraph] breadth-first from a start node.
//!
//! All of them are single-pass and also implement [Iterator]. Calling
//! [Traversing::try_next] on an exhausted traversal yields [TraversalError::Exhausted].
//!
//! ```
//! use traversals::{AdjacencyGraph, Traversing};
//!
//! let graph: AdjacencyGraph<i32> = [(1, vec![2, 3]), (2, vec![4])].into_iter().collect();
//! let mut iter = graph.iter_breadth(1);
//! while iter.has_next() {
//!     print!("{} ", iter.try_next().unwrap());
//! }
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             are uses substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod arena;
pub mod errors;
pub mod graph;
pub mod sequence;
pub mod traversing;

pub use arena::{ArenaIndex, ArenaNode, BinaryArenaTree, OrderedTreeIterator, Side};
pub use errors::TraversalError;
pub use graph::{AdjacencyGraph, FrontierGraphIterator};
pub use sequence::SequenceIterator;
pub use traversing::Traversing;
