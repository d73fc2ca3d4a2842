use thiserror::Error;

/// Errors surfaced by sequence operations.
///
/// The sequence follows a consistent error handling philosophy:
///
/// - **User errors** (an index outside the valid range): returned as
///   `Result::Err` with the offending index and the length it was checked
///   against, so callers can match on them in tests and recovery paths.
/// - **Invariant violations** (an empty slot within bounds): panic
///   immediately with diagnostic information, as these indicate data
///   corruption rather than recoverable errors.
/// - **Soft outcomes** (search misses, removal of absent values, popping an
///   empty sequence): signaled through `Option` and count return values,
///   never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The index lies outside `[0, length)` for element access and removal,
    /// or outside `[0, length]` for insertion points.
    #[error("Index {index} out of bounds for sequence of length {length}.")]
    IndexOutOfRange { index: usize, length: usize },
}
