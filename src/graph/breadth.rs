//! Breadth-first traversal implementations

use super::AdjacencyGraph;
use crate::{TraversalError, Traversing};
use std::{
    collections::{HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
    iter::FusedIterator,
};
use tracing_attributes::instrument;

/// Iterator over the nodes reachable from a start node in breadth-first order.
///
/// Nodes are marked visited when they are enqueued, so each one enters the frontier
/// at most once even if several queued nodes share it as a neighbor. Cycles therefore
/// terminate and nodes come out by non-decreasing distance from the start, ties broken
/// by discovery order.
#[derive(Debug, Clone)]
pub struct FrontierGraphIterator<'a, NodeId> {
    graph: &'a AdjacencyGraph<NodeId>,
    frontier: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
}

impl<'a, NodeId> FrontierGraphIterator<'a, NodeId>
where
    NodeId: Eq + Hash + Copy + Debug,
{
    /// `start` does not need to be a key of `graph`, in which case only `start` is returned.
    #[instrument(level = "trace", skip(graph), fields(len = graph.len()))]
    pub fn new(graph: &'a AdjacencyGraph<NodeId>, start: NodeId) -> Self {
        tracing::debug!("Creating breadth-first iterator from {:?}", start);
        FrontierGraphIterator {
            graph,
            frontier: VecDeque::from([start]),
            visited: HashSet::from([start]),
        }
    }

    /// Nodes discovered so far, including those still waiting in the frontier
    pub fn discovered(&self) -> usize {
        self.visited.len()
    }
}

impl<'a, NodeId> Traversing<NodeId> for FrontierGraphIterator<'a, NodeId>
where
    NodeId: Eq + Hash + Copy + Debug,
{
    fn has_next(&self) -> bool {
        !self.frontier.is_empty()
    }

    fn try_next(&mut self) -> Result<NodeId, TraversalError> {
        let node = self.frontier.pop_front().ok_or(TraversalError::Exhausted)?;
        for &neighbor in self.graph.neighbors(&node) {
            if self.visited.insert(neighbor) {
                self.frontier.push_back(neighbor);
            }
        }
        tracing::trace!(?node, frontier = self.frontier.len(), "breadth-first step");
        Ok(node)
    }
}

impl<'a, NodeId> Iterator for FrontierGraphIterator<'a, NodeId>
where
    NodeId: Eq + Hash + Copy + Debug,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<'a, NodeId> FusedIterator for FrontierGraphIterator<'a, NodeId> where NodeId: Eq + Hash + Copy + Debug {}
