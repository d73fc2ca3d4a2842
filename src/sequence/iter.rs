use super::Sequence;
use crate::sequence::traits::{Length, Operation};

/// Lazy iterator over a sequence's live elements in index order.
///
/// Each step re-reads the length and the element at the current position,
/// so the iterator is a live view of the borrowed sequence. It is finite
/// and restartable: a fresh call to [`Sequence::iter`] starts over from
/// index zero. The immutable borrow it holds prevents the sequence from
/// being mutated while an iteration is in progress.
pub struct Iter<'a, T> {
    sequence: &'a Sequence<T>,
    position: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(sequence: &'a Sequence<T>) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.sequence.get(self.position).ok()?;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.length().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
