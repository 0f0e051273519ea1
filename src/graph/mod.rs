//! Directed graphs as adjacency lists and their breadth-first traversal.

pub mod adjacency;
pub mod breadth;

pub use adjacency::AdjacencyGraph;
pub use breadth::FrontierGraphIterator;
