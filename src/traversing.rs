//! Definition of the interface shared by all traversals

use crate::TraversalError;

/// Capability of stepping through a structure one value at a time.
///
/// All implementations in this crate are single-pass: once [Traversing::has_next]
/// returns `false` it keeps doing so, and further calls to [Traversing::try_next]
/// fail with [TraversalError::Exhausted] without touching the state.
///
/// The trait is object safe, so unrelated traversals can be driven through a
/// `Box<dyn Traversing<T>>`.
pub trait Traversing<T> {
    /// Whether another value is available. Has no side effects.
    fn has_next(&self) -> bool;

    /// Returns the next value and advances by exactly one element.
    fn try_next(&mut self) -> Result<T, TraversalError>;

    /// Steps through all remaining values and collects them.
    fn drain(&mut self) -> Result<Vec<T>, TraversalError> {
        let mut values = Vec::new();
        while self.has_next() {
            values.push(self.try_next()?);
        }
        Ok(values)
    }
}
