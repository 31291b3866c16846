//! A growable, sparse, indexable sequence.
//!
//! Storage is addressable up to [`Array::capacity`]. The logical length
//! ([`Array::len`]) is one past the highest index ever set, so writing past
//! the end leaves the skipped slots empty rather than shifting anything.

use alloc::vec::Vec;
use core::fmt;

use crate::error::CollectionError;

/// Sparse dynamic array with a geometric growth policy.
///
/// # Examples
///
/// ```rust
/// use jsonc_tree::Array;
///
/// let mut array = Array::new();
/// array.push("a").unwrap();
/// array.set(3, "d").unwrap();
/// assert_eq!(array.len(), 4);
/// assert_eq!(array.get(0), Some(&"a"));
/// assert_eq!(array.get(1), None);
/// assert_eq!(array.get(100), None);
/// ```
#[derive(Clone)]
pub struct Array<T> {
    slots: Vec<Option<T>>,
    end: usize,
    growth_factor: usize,
    growth_events: usize,
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Array<T> {
    /// Creates an array with capacity 1 and growth factor 2.
    #[must_use]
    pub fn new() -> Self {
        Self::with_growth(1, 2)
    }

    /// Creates an array with the given initial capacity and growth factor.
    ///
    /// The capacity is raised to at least 1 and the factor to at least 2 so
    /// that growth always makes progress.
    #[must_use]
    pub fn with_growth(capacity: usize, growth_factor: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            end: 0,
            growth_factor: growth_factor.max(2),
            growth_events: 0,
        }
    }

    /// Fallible version of [`Array::with_growth`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the initial storage cannot
    /// be allocated.
    pub fn try_with_growth(capacity: usize, growth_factor: usize) -> Result<Self, CollectionError> {
        let capacity = capacity.max(1);
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self {
            slots,
            end: 0,
            growth_factor: growth_factor.max(2),
            growth_events: 0,
        })
    }

    /// Logical length: one past the highest set index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end
    }

    /// Returns `true` if no slot has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Number of addressable slots before the next growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Multiplier applied to the capacity on growth.
    #[must_use]
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// How many times the backing storage has been grown.
    #[must_use]
    pub fn growth_events(&self) -> usize {
        self.growth_events
    }

    /// Appends `value` at index [`Array::len`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the storage needed to grow
    /// and could not. The array is left unchanged.
    pub fn push(&mut self, value: T) -> Result<(), CollectionError> {
        if self.end >= self.slots.len() {
            self.grow_past(self.end)?;
        }
        self.slots[self.end] = Some(value);
        self.end += 1;
        Ok(())
    }

    /// Writes `value` at `index`, growing as needed, and returns whatever the
    /// slot held before.
    ///
    /// Setting past the end extends [`Array::len`] to `index + 1`; the slots
    /// in between stay empty.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfMemory`] if the storage needed to grow
    /// and could not. The array is left unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, CollectionError> {
        if index >= self.slots.len() {
            self.grow_past(index)?;
        }
        if index >= self.end {
            self.end = index + 1;
        }
        Ok(self.slots[index].replace(value))
    }

    /// Returns the element at `index`, or `None` if it is out of range or
    /// unset.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Mutable version of [`Array::get`].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Removes and returns the last logical slot.
    ///
    /// Returns `None` when the array is empty, and also when the last slot
    /// was never set (the length still shrinks by one).
    pub fn pop(&mut self) -> Option<T> {
        if self.end == 0 {
            return None;
        }
        self.end -= 1;
        self.slots[self.end].take()
    }

    /// Iterates over every logical slot, yielding `None` for unset ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots[..self.end].iter().map(Option::as_ref)
    }

    fn grow_past(&mut self, index: usize) -> Result<(), CollectionError> {
        let mut capacity = self.slots.len();
        while capacity <= index {
            capacity = capacity
                .checked_mul(self.growth_factor)
                .ok_or(CollectionError::OutOfMemory)?;
        }

        self.slots.try_reserve_exact(capacity - self.slots.len())?;
        self.slots.resize_with(capacity, || None);
        self.growth_events += 1;
        log::trace!("array grown to capacity {capacity}");
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.end == other.end && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use quickcheck::QuickCheck;

    use super::*;

    #[test]
    fn push_preserves_order() {
        let mut array = Array::new();
        for i in 0..10 {
            array.push(i).unwrap();
        }
        assert_eq!(array.len(), 10);
        let items: Vec<_> = array.iter().map(|v| *v.unwrap()).collect();
        assert_eq!(items, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn growth_zero_fills_new_slots() {
        let mut array = Array::with_growth(2, 3);
        array.push('a').unwrap();
        array.push('b').unwrap();
        array.push('c').unwrap();
        assert_eq!(array.capacity(), 6);
        assert_eq!(array.growth_events(), 1);
        assert_eq!(array.get(3), None);
        assert_eq!(array.get(5), None);
    }

    #[test]
    fn set_past_end_is_sparse() {
        let mut array = Array::new();
        assert_eq!(array.set(5, 'x').unwrap(), None);
        assert_eq!(array.len(), 6);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.growth_events(), 1);
        assert!(array.iter().take(5).all(|v| v.is_none()));
        assert_eq!(array.get(5), Some(&'x'));
        assert_eq!(array.set(5, 'y').unwrap(), Some('x'));
        assert_eq!(array.len(), 6);
    }

    #[test]
    fn set_below_end_keeps_length() {
        let mut array = Array::new();
        array.push(1).unwrap();
        array.push(2).unwrap();
        array.push(3).unwrap();
        array.set(0, 10).unwrap();
        assert_eq!(array.len(), 3);
        assert_eq!(array.get(0), Some(&10));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let array: Array<u8> = Array::new();
        assert_eq!(array.get(0), None);
        assert_eq!(array.get(usize::MAX), None);
    }

    #[test]
    fn pop_clears_last_slot() {
        let mut array = Array::new();
        assert_eq!(array.pop(), None);
        array.push(1).unwrap();
        array.set(2, 3).unwrap();
        assert_eq!(array.pop(), Some(3));
        assert_eq!(array.len(), 2);
        assert_eq!(array.get(2), None);
        // index 1 was never set
        assert_eq!(array.pop(), None);
        assert_eq!(array.pop(), Some(1));
        assert!(array.is_empty());
        assert_eq!(array.pop(), None);
    }

    #[test]
    fn capacity_overflow_is_reported() {
        let mut array: Array<u8> = Array::new();
        assert_eq!(array.set(usize::MAX, 1), Err(CollectionError::OutOfMemory));
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 1);
    }

    #[test]
    fn degenerate_parameters_are_clamped() {
        let array: Array<u8> = Array::with_growth(0, 1);
        assert_eq!(array.capacity(), 1);
        assert_eq!(array.growth_factor(), 2);
    }

    #[test]
    fn push_growth_events_are_logarithmic() {
        fn prop(n: u16, capacity: u8, factor: u8) -> bool {
            let n = usize::from(n % 2048);
            let capacity = usize::from(capacity % 16).max(1);
            let factor = usize::from(factor % 5).max(2);

            let mut array = Array::with_growth(capacity, factor);
            for i in 0..n {
                array.push(i).unwrap();
            }

            // Smallest k with capacity * factor^k >= n.
            let mut expected = 0;
            let mut reach = capacity;
            while reach < n {
                reach *= factor;
                expected += 1;
            }

            array.growth_events() == expected
                && array.len() == n
                && (0..n).all(|i| array.get(i) == Some(&i))
        }

        let tests = if is_ci::cached() { 2_000 } else { 200 };
        QuickCheck::new()
            .tests(tests)
            .quickcheck(prop as fn(u16, u8, u8) -> bool);
    }
}
