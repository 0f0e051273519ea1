//! Directed graph given by ordered adjacency lists.

use super::FrontierGraphIterator;
use itertools::Itertools;
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// Maps each node to the ordered list of its neighbors.
///
/// Nodes without an entry are valid and simply have no neighbors.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<NodeId> {
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl<NodeId> AdjacencyGraph<NodeId>
where
    NodeId: Eq + Hash + Copy + Debug,
{
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Reserves memory for `capacity` adjacency lists.
    pub fn with_capacity(capacity: usize) -> Self {
        AdjacencyGraph {
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Makes `node` a key of the graph (no-op if it already is one)
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Appends `to` to the neighbors of `from`. Repeated edges are kept.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Neighbors in insertion order, empty for unknown nodes.
    pub fn neighbors(&self, node: &NodeId) -> &[NodeId] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of nodes with an adjacency list
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Keys of the graph sorted for deterministic output
    pub fn nodes(&self) -> Vec<NodeId>
    where
        NodeId: Ord,
    {
        self.adjacency.keys().copied().sorted().collect_vec()
    }

    /// Breadth-first traversal from `start`
    pub fn iter_breadth(&self, start: NodeId) -> FrontierGraphIterator<'_, NodeId> {
        FrontierGraphIterator::new(self, start)
    }
}

impl<NodeId> Default for AdjacencyGraph<NodeId>
where
    NodeId: Eq + Hash + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<NodeId> PartialEq for AdjacencyGraph<NodeId>
where
    NodeId: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<NodeId> Eq for AdjacencyGraph<NodeId> where NodeId: Eq + Hash {}

impl<NodeId> From<HashMap<NodeId, Vec<NodeId>>> for AdjacencyGraph<NodeId> {
    fn from(adjacency: HashMap<NodeId, Vec<NodeId>>) -> Self {
        AdjacencyGraph { adjacency }
    }
}

impl<NodeId> FromIterator<(NodeId, Vec<NodeId>)> for AdjacencyGraph<NodeId>
where
    NodeId: Eq + Hash + Copy + Debug,
{
    /// Later entries for the same node extend the earlier neighbor list.
    fn from_iter<I: IntoIterator<Item = (NodeId, Vec<NodeId>)>>(iter: I) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (node, neighbors) in iter {
            graph.adjacency.entry(node).or_default().extend(neighbors);
        }
        graph
    }
}
