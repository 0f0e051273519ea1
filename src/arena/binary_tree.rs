//! Binary tree held in an [arena allocation](https://en.wikipedia.org/wiki/Region-based_memory_management).
//! Children are addressed by index which keeps ownership with the arena and rules out
//! sharing and cycles.

use super::OrderedTreeIterator;
use crate::TraversalError;
use core::fmt;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct ArenaIndex(pub(crate) usize);

impl ArenaIndex {
    /// Position in the arena
    pub fn position(&self) -> usize {
        self.0
    }
}

/// Child slot of a binary node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A node of a [BinaryArenaTree]
#[derive(Debug, Clone)]
pub struct ArenaNode<Load> {
    /// The user-defined load that the node owns
    pub(super) load: Load,
    /// Index in the arena allocation
    pub(super) index: ArenaIndex,
    pub(super) left: Option<ArenaIndex>,
    pub(super) right: Option<ArenaIndex>,
}

impl<Load> ArenaNode<Load> {
    fn new(load: Load, index: ArenaIndex) -> Self {
        ArenaNode {
            load,
            index,
            left: None,
            right: None,
        }
    }

    pub fn get(&self) -> &Load {
        &self.load
    }

    pub fn index(&self) -> ArenaIndex {
        self.index
    }

    pub fn left(&self) -> Option<ArenaIndex> {
        self.left
    }

    pub fn right(&self) -> Option<ArenaIndex> {
        self.right
    }

    pub fn child(&self, side: Side) -> Option<ArenaIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<Load> fmt::Display for ArenaNode<Load>
where
    Load: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arena index {:?}, left: {:?}, right: {:?}, payload: {} ",
            self.index, self.left, self.right, self.load
        )
    }
}

/// Binary tree that uses arena allocation. The root, if set, is always stored first.
///
/// Nodes can only be added below existing ones, so every node has exactly
/// one parent (except for the root) and the structure stays a tree.
#[derive(Debug, Clone)]
pub struct BinaryArenaTree<Load> {
    /// Memory allocated area for nodes
    pub(crate) nodes: Vec<ArenaNode<Load>>,
}

impl<Load> BinaryArenaTree<Load> {
    pub fn new() -> Self {
        BinaryArenaTree { nodes: vec![] }
    }

    /// Reserves memory for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryArenaTree {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Deletes all nodes and sets a new root
    pub fn set_root(&mut self, root_load: Load) -> ArenaIndex {
        self.nodes.clear();
        self.nodes.push(ArenaNode::new(root_load, ArenaIndex(0)));
        ArenaIndex(0)
    }

    /// Attaches a new leaf to an empty child slot of `parent`.
    pub fn add(&mut self, load: Load, parent: ArenaIndex, side: Side) -> Result<ArenaIndex, TraversalError> {
        let index = ArenaIndex(self.nodes.len());
        let parent_node = self
            .nodes
            .get_mut(parent.0)
            .ok_or(TraversalError::ReferenceOutOfBound(parent.0))?;

        let slot = match side {
            Side::Left => &mut parent_node.left,
            Side::Right => &mut parent_node.right,
        };
        if slot.is_some() {
            return Err(TraversalError::ChildOccupied {
                parent: parent.0,
                side,
            });
        }
        *slot = Some(index);

        self.nodes.push(ArenaNode::new(load, index));
        Ok(index)
    }

    pub fn root(&self) -> Option<ArenaIndex> {
        self.nodes.first().map(|node| node.index)
    }

    pub fn node(&self, index: ArenaIndex) -> Option<&ArenaNode<Load>> {
        self.nodes.get(index.0)
    }

    pub fn nodes(&self) -> &[ArenaNode<Load>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// In-order traversal from the root. Yields nothing for an empty tree.
    pub fn iter_in_order(&self) -> OrderedTreeIterator<'_, Load> {
        OrderedTreeIterator::from_valid_root(self, self.root())
    }
}

impl<Load> Default for BinaryArenaTree<Load> {
    fn default() -> Self {
        Self::new()
    }
}
