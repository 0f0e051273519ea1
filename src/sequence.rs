//! Linear traversal of a slice.

use crate::{TraversalError, Traversing};
use std::iter::FusedIterator;
use tracing_attributes::instrument;

/// Cursor over a borrowed slice, starting at position 0.
#[derive(Debug, Clone)]
pub struct SequenceIterator<'a, T> {
    sequence: &'a [T],
    cursor: usize,
}

impl<'a, T> SequenceIterator<'a, T> {
    #[instrument(level = "trace", skip_all, fields(len = sequence.len()))]
    pub fn new(sequence: &'a [T]) -> Self {
        tracing::debug!("Creating sequence iterator over {} values", sequence.len());
        SequenceIterator { sequence, cursor: 0 }
    }

    /// Number of values not yet returned
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor
    }
}

impl<'a, T: Clone> Traversing<T> for SequenceIterator<'a, T> {
    fn has_next(&self) -> bool {
        self.cursor < self.sequence.len()
    }

    fn try_next(&mut self) -> Result<T, TraversalError> {
        let value = self.sequence.get(self.cursor).ok_or(TraversalError::Exhausted)?;
        tracing::trace!(cursor = self.cursor, "sequence step");
        self.cursor += 1;
        Ok(value.clone())
    }
}

impl<'a, T: Clone> Iterator for SequenceIterator<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<'a, T: Clone> ExactSizeIterator for SequenceIterator<'a, T> {}

impl<'a, T: Clone> FusedIterator for SequenceIterator<'a, T> {}
