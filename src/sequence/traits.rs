use crate::SequenceError;

/// ### -> `Length Trait`.
///
/// Synchronous length queries and length-based comparisons.
///
/// The logical length (the number of live elements) is tracked separately
/// from the allocated capacity and never exceeds it.
pub trait Length {
    /// Returns the number of live elements.
    fn length(&self) -> usize;

    /// Returns `true` when the sequence holds no live elements.
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Compares two sequences by length alone.
    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    /// Orders two sequences by length alone.
    fn length_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.length().partial_cmp(&other.length())
    }
}

/// ### -> `Operation<T> Trait`.
///
/// Fundamental operations over the backing storage: element access,
/// replacement, appending, positional insertion, and removal. Every
/// operation that changes the logical length runs the capacity policy
/// (growth checks before the length increases, shrink checks after it
/// decreases), so the capacity converges instead of growing monotonically.
///
/// ### -> `Methods`
/// - `get(index) -> Result<&T>`:
///     - Borrows the element at `index`.
///     - The index must be within `[0, length)`; otherwise an
///       `IndexOutOfRange` error is returned, even when the index still
///       falls inside the allocated capacity.
///
/// - `set(index, value) -> Result<T>`:
///     - Replaces the element at `index` and returns the previous value.
///     - Never grows the sequence; growth only happens through `add` and
///       `insert_at`.
///
/// - `add(values)`:
///     - Appends the values in order, reserving space for all of them up
///       front so a bulk append reallocates at most once.
///
/// - `insert_at(index, values) -> Result<()>`:
///     - Inserts the values starting at `index`, shifting the tail right.
///     - `index == length` appends; `index > length` is an error.
///
/// - `remove_at(indices) -> Result<()>`:
///     - Removes the elements at the given indices in one compaction pass.
///     - Validation completes before any mutation: one bad index leaves the
///       sequence untouched.
///
/// - `remove(values) -> usize`:
///     - Removes the first occurrence of each value; absent values are
///       silently skipped. Returns how many elements were removed.
///
/// - `remove_all(predicate) -> usize`:
///     - Removes every element satisfying the predicate in one pass.
///
/// - `clear()`:
///     - Drops every element and resets the capacity to the minimum.
///
/// ### -> `Usage`
///
/// ```
/// use growable::sequence::prelude::*;
///
/// fn example() -> anyhow::Result<()> {
///     let mut sequence = Sequence::<i32>::new();
///     sequence.add([1, 2, 3]);
///     assert_eq!(sequence.length(), 3);
///
///     let previous = sequence.set(1, 20)?;
///     assert_eq!(previous, 2);
///     assert_eq!(*sequence.get(1)?, 20);
///
///     sequence.insert_at(0, [0])?;
///     sequence.remove_at(&[3])?;
///     assert_eq!(sequence.snapshot(), vec![0, 1, 20]);
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Operation<T>: Length {
    /// Borrows the element at `index`, or errors when the index is outside
    /// `[0, length)`.
    #[must_use = "Fetched elements must have a purpose!"]
    fn get(&self, index: usize) -> Result<&T, SequenceError>;

    /// Replaces the element at `index` with `value` and returns the previous
    /// value. Errors when the index is outside `[0, length)`; the sequence
    /// never grows through `set`.
    fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError>;

    /// Appends the values in order, growing the capacity at most once.
    fn add(&mut self, values: impl IntoIterator<Item = T>);

    /// Inserts the values starting at `index` (`0 <= index <= length`),
    /// shifting the tail right from the end backward so no element is
    /// overwritten before it is moved.
    fn insert_at(
        &mut self,
        index: usize,
        values: impl IntoIterator<Item = T>,
    ) -> Result<(), SequenceError>;

    /// Removes the elements at the given indices in a single left-compaction
    /// pass that preserves survivor order. Indices may come in any order;
    /// duplicates each remove one logical slot. Every index is validated
    /// before any mutation happens.
    fn remove_at(&mut self, indices: &[usize]) -> Result<(), SequenceError>;

    /// Removes the first occurrence of each value, batch-wise: a value
    /// repeated in the input claims successive occurrences, and values not
    /// present contribute nothing. Returns the number of elements removed.
    fn remove(&mut self, values: &[T]) -> usize
    where
        T: PartialEq;

    /// Removes every element satisfying the predicate in one compaction
    /// pass and returns how many were removed.
    fn remove_all(&mut self, predicate: impl FnMut(&T) -> bool) -> usize;

    /// Drops every element and resets the capacity to 1, discarding the old
    /// buffer.
    fn clear(&mut self);
}

/// ### -> `Search<T> Trait`.
///
/// Linear search over the live elements. Misses are `None`, never errors,
/// so a found default-like value is always distinguishable from "absent".
pub trait Search<T>: Length {
    /// First index whose element equals `value`, scanning ascending.
    #[must_use = "Search results must have a purpose!"]
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Last index whose element equals `value`, scanning descending.
    #[must_use = "Search results must have a purpose!"]
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Whether any live element equals `value`.
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// First element satisfying the predicate.
    #[must_use = "Search results must have a purpose!"]
    fn find(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T>;

    /// Last element satisfying the predicate.
    #[must_use = "Search results must have a purpose!"]
    fn find_last(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T>;
}

/// Stack (LIFO) aliases over the positional operations.
pub trait Stack<T> {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;

    #[must_use = "Peeking must serve a purpose!"]
    fn peek(&self) -> Option<&T>;
}

/// Queue-end aliases: `shift` reads and removes the first element,
/// `unshift` inserts at the front.
pub trait Queue<T> {
    fn shift(&mut self) -> Option<T>;
    fn unshift(&mut self, value: T);
}

/// Higher-order traversal helpers. Everything except `reverse` is
/// non-mutating and yields elements in their stored order.
pub trait Traversal<T> {
    #[must_use = "Filtering is not 0 cost and must serve a purpose!"]
    fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
        Self: Sized;

    /// Applies `action` to every live element in index order.
    fn for_each(&self, action: impl FnMut(&T));

    /// New sequence keeping the first occurrence of each distinct value,
    /// in first-occurrence order.
    #[must_use = "Deduplication is not 0 cost and must serve a purpose!"]
    fn distinct(&self) -> Self
    where
        T: PartialEq + Clone,
        Self: Sized;

    /// Reverses the sequence in place and returns it for chaining.
    fn reverse(&mut self) -> &mut Self;
}

/// Whole-container composition: the named forms of the source operators
/// `+` (concatenation) and `-` (difference).
pub trait Compose<T> {
    /// New sequence holding `self`'s elements followed by `other`'s.
    #[must_use = "Concatenation is not 0 cost and must serve a purpose!"]
    fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
        Self: Sized;

    /// Copy of `self` with each element of `other` removing at most one
    /// matching occurrence.
    #[must_use = "Difference is not 0 cost and must serve a purpose!"]
    fn difference(&self, other: &Self) -> Self
    where
        T: PartialEq + Clone,
        Self: Sized;
}

/// Materializes an independent snapshot of the live elements.
pub trait SnapShot<T> {
    #[must_use = "Snapshot output must serve a purpose!"]
    fn snapshot(&self) -> Vec<T>
    where
        T: Clone;
}
