//! Provides the error type used throughout this crate.

use crate::arena::Side;
use thiserror::Error;

/// The error type used throughout this crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// `try_next` was called although `has_next` returned `false`
    #[error("Iterator is exhausted")]
    Exhausted,
    // Arena errors
    #[error("Node reference {0} is out of bound")]
    ReferenceOutOfBound(usize),
    #[error("Node {parent} already has a {side} child")]
    ChildOccupied { parent: usize, side: Side },
}
