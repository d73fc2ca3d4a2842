//! A generic, growable, random-access sequence container.
//!
//! The crate provides [`sequence::Sequence<T>`], a dynamic array that keeps a
//! contiguous backing buffer, tracks logical length separately from allocated
//! capacity, and amortizes reallocation cost through a golden-ratio
//! growth/shrink policy. On top of the storage primitive it layers positional
//! mutation (insert, multi-index remove), linear search, higher-order
//! traversal helpers, and value-equality semantics.
//!
//! ```
//! use growable::sequence::prelude::*;
//!
//! fn example() -> anyhow::Result<()> {
//!     let mut sequence = Sequence::from_values(["one", "two", "three"]);
//!     sequence.insert_at(0, ["pre"])?;
//!     assert_eq!(sequence.snapshot(), vec!["pre", "one", "two", "three"]);
//!
//!     let removed = sequence.remove(&["two"]);
//!     assert_eq!(removed, 1);
//!     assert_eq!(sequence.to_string(), "pre, one, three");
//!
//!     Ok(())
//! }
//!
//! example().unwrap();
//! ```

pub mod sequence;

mod error;
pub use error::SequenceError;
