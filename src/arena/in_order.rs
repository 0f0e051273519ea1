//! In-order traversal of a [BinaryArenaTree] with an explicit stack instead of recursion,
//! so the depth of the tree is only bounded by memory.

use super::{ArenaIndex, BinaryArenaTree};
use crate::{TraversalError, Traversing};
use std::iter::FusedIterator;
use tracing_attributes::instrument;

/// Iterator yielding the loads of a (sub-)tree in order: left subtree, node, right subtree.
///
/// Between calls, the stack holds the ancestors that still owe a visit, the next
/// one on top.
#[derive(Debug, Clone)]
pub struct OrderedTreeIterator<'a, Load> {
    tree: &'a BinaryArenaTree<Load>,
    stack: Vec<ArenaIndex>,
}

impl<'a, Load> OrderedTreeIterator<'a, Load> {
    /// Starts at `root`. `None` stands for an empty tree and gives an exhausted iterator.
    /// Fails if `root` does not belong to `tree`.
    #[instrument(level = "trace", skip(tree), fields(len = tree.len()))]
    pub fn new(tree: &'a BinaryArenaTree<Load>, root: Option<ArenaIndex>) -> Result<Self, TraversalError> {
        if let Some(root) = root {
            tree.node(root).ok_or(TraversalError::ReferenceOutOfBound(root.0))?;
        }
        Ok(Self::from_valid_root(tree, root))
    }

    pub(super) fn from_valid_root(tree: &'a BinaryArenaTree<Load>, root: Option<ArenaIndex>) -> Self {
        let mut iter = OrderedTreeIterator {
            tree,
            stack: Vec::new(),
        };
        iter.lean_left(root);
        tracing::debug!("Creating in-order iterator, {} nodes staged", iter.stack.len());
        iter
    }

    /// Pushes `node` and all its successive left descendants.
    fn lean_left(&mut self, mut node: Option<ArenaIndex>) {
        while let Some(index) = node {
            self.stack.push(index);
            node = self.tree.node(index).and_then(|n| n.left);
        }
    }
}

impl<'a, Load: Clone> Traversing<Load> for OrderedTreeIterator<'a, Load> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    fn try_next(&mut self) -> Result<Load, TraversalError> {
        let index = *self.stack.last().ok_or(TraversalError::Exhausted)?;
        let node = self
            .tree
            .node(index)
            .ok_or(TraversalError::ReferenceOutOfBound(index.0))?;
        self.stack.pop();
        tracing::trace!(index = index.0, staged = self.stack.len(), "in-order step");
        self.lean_left(node.right);
        Ok(node.load.clone())
    }
}

impl<'a, Load: Clone> Iterator for OrderedTreeIterator<'a, Load> {
    type Item = Load;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(load) => Some(load),
            Err(TraversalError::Exhausted) => None,
            Err(error) => {
                tracing::warn!("In-order traversal stopped: {error}");
                self.stack.clear();
                None
            }
        }
    }
}

impl<'a, Load: Clone> FusedIterator for OrderedTreeIterator<'a, Load> {}
