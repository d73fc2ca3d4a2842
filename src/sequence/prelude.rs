
pub use {
    crate::sequence::iter::Iter,
    crate::sequence::traits::{Compose, Length, Operation, Queue, Search, SnapShot, Stack, Traversal},
    crate::sequence::Sequence,
    crate::SequenceError,
};
