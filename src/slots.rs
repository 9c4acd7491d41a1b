//! A fixed-capacity sequence of optional elements. This is the hand-off format between a
//! [`Tree`][crate::Tree] and the outside world when rebalancing: flattening a tree moves its
//! elements into consecutive slots, and rebuilding moves them back out.
//!
//! # Examples
//!
//! ```
//! use bintree::{Slots, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [1, 2, 3, 4, 5] {
//!     tree.insert(x).unwrap();
//! }
//!
//! let mut slots: Slots<i32> = Slots::new();
//! tree.to_slots(&mut slots).unwrap();
//!
//! assert!(tree.is_empty());
//! assert_eq!(slots.occupied(), 5);
//! assert_eq!(slots.get(0), Some(&1));
//! ```

use std::fmt;

use crate::TreeError;

/// How many slots a [`Slots`] holds unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

/// A sequence of `C` slots, each of which is either empty or owns one `T`.
pub struct Slots<T, const C: usize = DEFAULT_CAPACITY> {
    slots: [Option<T>; C],
}

impl<T, const C: usize> Default for Slots<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const C: usize> fmt::Debug for Slots<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

impl<T, const C: usize> Slots<T, C> {
    /// Generates a sequence with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Fills slots from index 0 with the items of `iter`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{Slots, TreeError};
    ///
    /// let slots: Slots<i32, 4> = Slots::try_from_iter([1, 2, 3]).unwrap();
    /// assert_eq!(slots.occupied(), 3);
    ///
    /// let too_many = Slots::<i32, 2>::try_from_iter([1, 2, 3]);
    /// assert_eq!(
    ///     too_many.unwrap_err(),
    ///     TreeError::OutOfBounds { index: 2, capacity: 2 }
    /// );
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut slots = Self::new();
        for (index, item) in iter.into_iter().enumerate() {
            slots.set(index, item)?;
        }

        Ok(slots)
    }

    /// The fixed number of slots.
    pub fn capacity(&self) -> usize {
        C
    }

    /// The element in slot `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Puts `value` in slot `index` and returns whatever was there before.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, TreeError> {
        let slot = self.slots.get_mut(index).ok_or(TreeError::OutOfBounds {
            index,
            capacity: C,
        })?;

        Ok(slot.replace(value))
    }

    /// Moves the element out of slot `index`, leaving it empty.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// The length of the run of occupied slots starting at index 0. Anything after the first
    /// empty slot is not counted.
    pub fn occupied(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(C)
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over every slot, empty or not.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    /// Hands out the backing slots. Used by [`Tree`][crate::Tree] to move elements in and out.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }
}
