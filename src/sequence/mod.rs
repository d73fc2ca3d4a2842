use std::fmt;
use std::hash::{Hash, Hasher};

use crate::SequenceError;

mod iter;
pub mod prelude;
pub mod traits;

pub use iter::Iter;
use traits::{Compose, Length, Operation, Queue, Search, SnapShot, Stack, Traversal};

#[cfg(test)]
mod tests;

/// Golden-ratio multiplier controlling both the growth and shrink
/// thresholds. Compared to naive doubling it trades slightly more frequent
/// reallocation for a tighter bound on wasted space.
const GROWTH_FACTOR: f64 = 1.618;

/// Capacity of a sequence constructed through [`Sequence::new`].
const DEFAULT_CAPACITY: usize = 16;

/// ### -> `Sequence<T>` - A generic, growable, random-access sequence container.
///
/// `Sequence<T>` owns a contiguous backing buffer of element slots, tracks
/// its logical length (the number of live elements) separately from the
/// allocated capacity, and provides indexed access, positional mutation,
/// linear search, and a small set of higher-order traversal helpers.
///
/// ### -> `Core Features`
///
/// - **Amortized growth**: capacity grows to `ceil(needed * 1.618)` when an
///   operation needs more room, and shrinks to `ceil(capacity / 1.618)` when
///   the buffer is more than golden-ratio oversized, so interleaved appends
///   and removals keep the capacity bounded.
/// - **Order-preserving removal**: any set of indices, in any order and with
///   duplicates, is removed in a single left-compaction pass that keeps the
///   survivors in their original relative order.
/// - **Value semantics**: two sequences compare equal when they have the
///   same length and pairwise-equal elements in index order; `Display`
///   joins the elements with `", "`.
/// - **Option sentinels**: search misses, popping an empty sequence, and
///   removing absent values are soft outcomes signaled through `Option` and
///   count returns, never errors.
///
/// ### -> `Invariants`
///
/// The sequence maintains the following critical invariants:
/// 1. **Length ≤ Capacity**: the logical length never exceeds the capacity.
/// 2. **Occupied Within Bounds**: every slot in `[0, length)` holds a value.
/// 3. **Empty Beyond Length**: every slot in `[length, capacity)` is vacant.
///
/// Violations of these invariants result in panics, as they indicate data
/// corruption rather than user errors.
///
/// ### -> `Error Handling`
///
/// - **User errors** (index out of bounds): returned as
///   [`SequenceError::IndexOutOfRange`]. Multi-index removal validates every
///   index before mutating anything, so a failed call leaves the sequence
///   untouched.
/// - **Hashing**: unsupported and panics unconditionally. The sequence is
///   mutable, so a content-derived hash could not stay stable while two
///   equal sequences remain equal.
///
/// ### -> `Concurrency Model`
///
/// None. The sequence is single-threaded and synchronous; mutating
/// operations take `&mut self`, so exclusive access during a call is
/// enforced by the borrow checker rather than checked at runtime. Iteration
/// borrows the sequence immutably and reads length and elements by index at
/// each step.
///
/// ### -> `Performance Characteristics`
///
/// - **Get/Set**: O(1) after bounds validation.
/// - **Append**: amortized O(1), reserving space for a whole batch at once.
/// - **Insert/Remove**: O(n) shift or compaction pass.
/// - **Search/Traversal**: O(n) linear scans over the live elements.
///
/// ### -> `Usage`
///
/// ```
/// use growable::sequence::prelude::*;
///
/// fn example() -> anyhow::Result<()> {
///     let mut sequence = Sequence::<i32>::new();
///     assert_eq!(sequence.length(), 0);
///     assert_eq!(sequence.capacity(), 16);
///
///     sequence.add([1, 2, 3]);
///     assert_eq!(*sequence.get(1)?, 2);
///
///     sequence.insert_at(0, [0])?;
///     assert_eq!(sequence.snapshot(), vec![0, 1, 2, 3]);
///
///     let removed = sequence.remove(&[2]);
///     assert_eq!(removed, 1);
///
///     sequence.reverse();
///     assert_eq!(sequence.to_string(), "3, 1, 0");
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct Sequence<T> {
    slots: Box<[Option<T>]>,
    count: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with the default slack capacity of 16.
    pub fn new() -> Self {
        Self {
            slots: Self::allocate_slots(DEFAULT_CAPACITY),
            count: 0,
        }
    }

    /// Creates an empty sequence with exactly `capacity` slots. A capacity
    /// of zero is valid; the first append grows the buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Self::allocate_slots(capacity),
            count: 0,
        }
    }

    /// Materializes a finite source of values into a sequence with no slack:
    /// `length == capacity ==` the number of values, in source order.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut slots = Vec::new();
        for value in values {
            slots.push(Some(value));
        }
        let slots = slots.into_boxed_slice();
        Self {
            count: slots.len(),
            slots,
        }
    }

    /// Current number of allocated slots. Always at least the length;
    /// mutated only by the resize policy.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Lazy, restartable iterator over the live elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    fn allocate_slots(capacity: usize) -> Box<[Option<T>]> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        slots.into_boxed_slice()
    }

    /// Capacity policy, run before any operation that increases the length
    /// by `extra` and (with `extra = 0`) after any operation that decreases
    /// it. Grows to `ceil(needed * φ)` when the buffer is too small, shrinks
    /// to `ceil(capacity / φ)` when it is more than φ× oversized, and
    /// otherwise leaves the buffer alone.
    fn resize(&mut self, extra: usize) {
        let capacity = self.slots.len();
        let needed = self.count + extra;

        let target = if needed > capacity {
            (needed as f64 * GROWTH_FACTOR).ceil() as usize
        } else if capacity as f64 / GROWTH_FACTOR > needed as f64 {
            (capacity as f64 / GROWTH_FACTOR).ceil() as usize
        } else {
            return;
        };

        if target == capacity {
            return;
        }

        // The only correctness-critical data movement in the container:
        // every live element crosses into the new buffer, in order.
        let mut slots = Self::allocate_slots(target);
        let live = self.count.min(capacity);
        for (slot, old) in slots.iter_mut().zip(self.slots[..live].iter_mut()) {
            *slot = old.take();
        }
        self.slots = slots;
    }

    /// Single left-compaction pass removing the (ascending, possibly
    /// duplicated) `sorted` indices. All indices must be within bounds.
    /// Duplicates each remove one logical slot: the distinct indices are
    /// skipped during the pass and the remainder is paid from the tail,
    /// clamped so the length never underflows.
    fn compact(&mut self, sorted: &[usize]) {
        let mut write = 0;
        let mut next = 0;
        for read in 0..self.count {
            if next < sorted.len() && sorted[next] == read {
                while next < sorted.len() && sorted[next] == read {
                    next += 1;
                }
                self.slots[read] = None;
            } else {
                let survivor = self.slots[read].take();
                self.slots[write] = survivor;
                write += 1;
            }
        }

        let removed = sorted.len().min(self.count);
        let count = self.count - removed;
        for slot in &mut self.slots[count..write] {
            *slot = None;
        }

        self.count = count;
        self.resize(0);
    }

    fn occupied(&self, index: usize) -> &T {
        match self.slots[index] {
            Some(ref value) => value,
            None => panic!(
                "Invariant violation: slot at index {} is empty within bounds (length {}).",
                index, self.count
            ),
        }
    }

    fn take_occupied(&mut self, index: usize) -> T {
        match self.slots[index].take() {
            Some(value) => value,
            None => panic!(
                "Invariant violation: slot at index {} is empty within bounds (length {}).",
                index, self.count
            ),
        }
    }
}

impl<T> Length for Sequence<T> {
    fn length(&self) -> usize {
        self.count
    }
}

impl<T> Operation<T> for Sequence<T> {
    fn get(&self, index: usize) -> Result<&T, SequenceError> {
        if index >= self.count {
            return Err(SequenceError::IndexOutOfRange {
                index,
                length: self.count,
            });
        }
        Ok(self.occupied(index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        if index >= self.count {
            return Err(SequenceError::IndexOutOfRange {
                index,
                length: self.count,
            });
        }
        match self.slots[index].replace(value) {
            Some(previous) => Ok(previous),
            None => panic!(
                "Invariant violation: slot at index {} is empty within bounds (length {}).",
                index, self.count
            ),
        }
    }

    fn add(&mut self, values: impl IntoIterator<Item = T>) {
        let staged: Vec<T> = values.into_iter().collect();
        self.resize(staged.len());
        for value in staged {
            self.slots[self.count] = Some(value);
            self.count += 1;
        }
    }

    fn insert_at(
        &mut self,
        index: usize,
        values: impl IntoIterator<Item = T>,
    ) -> Result<(), SequenceError> {
        if index > self.count {
            return Err(SequenceError::IndexOutOfRange {
                index,
                length: self.count,
            });
        }

        let staged: Vec<T> = values.into_iter().collect();
        let width = staged.len();
        self.resize(width);
        if width == 0 {
            return Ok(());
        }

        self.count += width;
        // Shift right from the end backward so nothing is overwritten
        // before it has been moved.
        for i in (index + width..self.count).rev() {
            self.slots[i] = self.slots[i - width].take();
        }
        for (offset, value) in staged.into_iter().enumerate() {
            self.slots[index + offset] = Some(value);
        }
        Ok(())
    }

    fn remove_at(&mut self, indices: &[usize]) -> Result<(), SequenceError> {
        // Atomic validation: every index is checked before any mutation.
        for &index in indices {
            if index >= self.count {
                return Err(SequenceError::IndexOutOfRange {
                    index,
                    length: self.count,
                });
            }
        }

        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        self.compact(&sorted);
        Ok(())
    }

    fn remove(&mut self, values: &[T]) -> usize
    where
        T: PartialEq,
    {
        // Batch semantics: each input value claims the first occurrence not
        // already claimed by an earlier value in the same batch; misses are
        // skipped silently.
        let mut claimed: Vec<usize> = Vec::with_capacity(values.len());
        for value in values {
            for index in 0..self.count {
                if self.occupied(index) == value && !claimed.contains(&index) {
                    claimed.push(index);
                    break;
                }
            }
        }

        let removed = claimed.len();
        claimed.sort_unstable();
        self.compact(&claimed);
        removed
    }

    fn remove_all(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let mut doomed: Vec<usize> = Vec::new();
        for index in 0..self.count {
            if predicate(self.occupied(index)) {
                doomed.push(index);
            }
        }

        let removed = doomed.len();
        self.compact(&doomed);
        removed
    }

    fn clear(&mut self) {
        self.count = 0;
        self.slots = Self::allocate_slots(1);
    }
}

impl<T> Search<T> for Sequence<T> {
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.count).find(|&index| self.occupied(index) == value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.count).rev().find(|&index| self.occupied(index) == value)
    }

    fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        for index in 0..self.count {
            let value = self.occupied(index);
            if predicate(value) {
                return Some(value);
            }
        }
        None
    }

    fn find_last(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        for index in (0..self.count).rev() {
            let value = self.occupied(index);
            if predicate(value) {
                return Some(value);
            }
        }
        None
    }
}

impl<T> Stack<T> for Sequence<T> {
    fn push(&mut self, value: T) {
        self.add([value]);
    }

    fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.take_occupied(self.count - 1);
        self.count -= 1;
        self.resize(0);
        Some(value)
    }

    fn peek(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        Some(self.occupied(self.count - 1))
    }
}

impl<T> Queue<T> for Sequence<T> {
    fn shift(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.take_occupied(0);
        for index in 1..self.count {
            self.slots[index - 1] = self.slots[index].take();
        }
        self.count -= 1;
        self.resize(0);
        Some(value)
    }

    fn unshift(&mut self, value: T) {
        // Front insertion into [0, length] can never be out of bounds.
        let _ = self.insert_at(0, [value]);
    }
}

impl<T> Traversal<T> for Sequence<T> {
    fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        let mut filtered = Self::new();
        for index in 0..self.count {
            let value = self.occupied(index);
            if predicate(value) {
                filtered.push(value.clone());
            }
        }
        filtered
    }

    fn for_each(&self, mut action: impl FnMut(&T)) {
        for index in 0..self.count {
            action(self.occupied(index));
        }
    }

    fn distinct(&self) -> Self
    where
        T: PartialEq + Clone,
    {
        let mut distinct = Self::with_capacity(self.slots.len());
        for index in 0..self.count {
            let value = self.occupied(index);
            if !distinct.contains(value) {
                distinct.push(value.clone());
            }
        }
        distinct
    }

    fn reverse(&mut self) -> &mut Self {
        if self.count == 0 {
            return self;
        }
        let mut left = 0;
        let mut right = self.count - 1;
        while left < right {
            self.slots.swap(left, right);
            left += 1;
            right -= 1;
        }
        self
    }
}

impl<T> Compose<T> for Sequence<T> {
    fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::from_values(self.iter().cloned().chain(other.iter().cloned()))
    }

    fn difference(&self, other: &Self) -> Self
    where
        T: PartialEq + Clone,
    {
        let mut difference = self.clone();
        difference.remove(&other.snapshot());
        difference
    }
}

impl<T> SnapShot<T> for Sequence<T> {
    fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut snapshot = Vec::with_capacity(self.count);
        for index in 0..self.count {
            snapshot.push(self.occupied(index).clone());
        }
        snapshot
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep logical copy: independent backing storage holding the current
/// contents with no slack, exactly as if rebuilt through
/// [`Sequence::from_values`].
impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self::from_values(self.iter().cloned())
    }
}

/// Identity short-circuit, then length, then pairwise element equality in
/// index order.
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.count != other.count {
            return false;
        }
        for index in 0..self.count {
            if self.occupied(index) != other.occupied(index) {
                return false;
            }
        }
        true
    }
}

impl<T: Eq> Eq for Sequence<T> {}

/// Hashing is unsupported: the sequence is mutable and structural equality
/// cannot keep equal-objects-equal-hashes stable across mutation. Panics
/// unconditionally.
impl<T> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, _state: &mut H) {
        panic!("Unsupported operation: Sequence<T> is mutable and does not provide a stable hash.");
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.count {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{}", self.occupied(index))?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.add(values);
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
