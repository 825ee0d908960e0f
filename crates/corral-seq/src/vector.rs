//! Growable, contiguous, index-addressable sequence.
//!
//! A [`Vector`] keeps its values packed at positions `[0, len)` of an
//! [`Allocation`]. Capacity grows geometrically on demand and halves once
//! the vector becomes sparse, so a push/pop sequence at a boundary never
//! oscillates between two capacities.

use std::cmp::Ordering;
use std::fmt;

use corral_alloc::Allocation;
use corral_core::{Arrayable, Collection, CollectionError, Positional, Sequence, Sortable};

use crate::config::VectorConfig;
use crate::iter::{IntoIter, Iter};
use crate::slice;

/// A growable array of values.
///
/// Positions `[0, len)` of the backing allocation are always occupied and
/// positions `[len, capacity)` are always vacant.
#[derive(Clone)]
pub struct Vector<T> {
    alloc: Allocation<T>,
    len: usize,
    config: VectorConfig,
}

impl<T> Vector<T> {
    /// An empty vector with no storage.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// An empty vector with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            alloc: Allocation::new(capacity),
            len: 0,
            config: VectorConfig::new(),
        }
    }

    /// An empty vector with a custom growth policy.
    pub fn with_config(config: VectorConfig) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self {
            alloc: Allocation::new(0),
            len: 0,
            config,
        })
    }

    /// The growth policy in effect.
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing allocation.
    pub fn capacity(&self) -> usize {
        self.alloc.capacity()
    }

    /// The value at `index`.
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        self.alloc.get(index)?.ok_or(CollectionError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Mutable access to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        let len = self.len;
        self.alloc
            .get_mut(index)?
            .ok_or(CollectionError::OutOfRange { index, len })
    }

    /// Replace the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        self.alloc.set(index, value)?.ok_or(CollectionError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// The first value. Underflow if empty.
    pub fn first(&self) -> Result<&T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::Underflow);
        }
        self.get(0)
    }

    /// The last value. Underflow if empty.
    pub fn last(&self) -> Result<&T, CollectionError> {
        match self.len.checked_sub(1) {
            Some(index) => self.get(index),
            None => Err(CollectionError::Underflow),
        }
    }

    /// Append a value, growing the allocation if full.
    pub fn push(&mut self, value: T) {
        self.reserve_for(1);
        self.alloc
            .set(self.len, value)
            .expect("reserve_for(1) leaves a vacant slot at len");
        self.len += 1;
    }

    /// Append every value from `values`, in order.
    pub fn push_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        self.reserve_for(values.size_hint().0);
        for value in values {
            self.push(value);
        }
    }

    /// Remove and return the last value. Underflow if empty.
    pub fn pop(&mut self) -> Result<T, CollectionError> {
        let index = self.len.checked_sub(1).ok_or(CollectionError::Underflow)?;
        let value = self.alloc.take(index)?.ok_or(CollectionError::OutOfRange {
            index,
            len: self.len,
        })?;
        self.len = index;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Insert `value` at `index`, shifting later values right.
    ///
    /// `index == len` appends. Any larger index is out of range.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        self.check_insertion_point(index)?;
        self.reserve_for(1);
        self.alloc.move_range(index, index + 1, self.len - index)?;
        self.alloc.set(index, value)?;
        self.len += 1;
        Ok(())
    }

    /// Insert every value from `values` starting at `index`, preserving
    /// their order.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        self.check_insertion_point(index)?;
        let values: Vec<T> = values.into_iter().collect();
        let n = values.len();
        if n == 0 {
            return Ok(());
        }
        self.reserve_for(n);
        self.alloc.move_range(index, index + n, self.len - index)?;
        self.alloc.write(index, values)?;
        self.len += n;
        Ok(())
    }

    /// Prepend a value. O(len).
    pub fn unshift(&mut self, value: T) {
        self.insert(0, value)
            .expect("index 0 is always a valid insertion point");
    }

    /// Prepend every value from `values`, preserving their order.
    pub fn unshift_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_all(0, values)
            .expect("index 0 is always a valid insertion point");
    }

    /// Remove and return the value at `index`, shifting later values left.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.len)?;
        let value = self.alloc.take(index)?.ok_or(CollectionError::OutOfRange {
            index,
            len: self.len,
        })?;
        self.alloc.move_range(index + 1, index, self.len - index - 1)?;
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Remove and return the first value. Underflow if empty. O(len).
    pub fn shift(&mut self) -> Result<T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::Underflow);
        }
        self.remove(0)
    }

    /// Whether any value equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Iterate the values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.alloc.iter().take(self.len))
    }

    /// Reverse the values in place.
    pub fn reverse(&mut self) {
        self.alloc
            .reverse_range(0..self.len)
            .expect("0..len lies within capacity");
    }

    /// Sort the values in place by `compare`. The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.alloc
            .sort_range(0..self.len, compare)
            .expect("0..len lies within capacity");
    }

    /// Sort the values in place by their natural order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// A new vector of the values for which `predicate` holds.
    pub fn filter<P>(&self, mut predicate: P) -> Vector<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut out = Vector::with_capacity(self.len);
        out.config = self.config.clone();
        for value in self.iter().filter(|v| predicate(*v)) {
            out.push(value.clone());
        }
        out.alloc.truncate(out.len);
        out
    }

    /// A new vector holding `f` applied to every value.
    pub fn map<U, F>(&self, f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut out = Vector::with_capacity(self.len);
        out.config = self.config.clone();
        out.push_all(self.iter().map(f));
        out
    }

    /// Fold the values front to back into an accumulator.
    pub fn reduce<A, F>(&self, initial: A, f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(initial, f)
    }

    /// A copy of a sub-range.
    ///
    /// A negative `index` counts from the end. A `None` length means "to
    /// the end"; a negative length stops that many values before the end.
    /// Out-of-range parameters are clamped, never rejected.
    pub fn slice(&self, index: isize, length: Option<isize>) -> Vector<T>
    where
        T: Clone,
    {
        let (offset, len) = slice::normalize(self.len, index, length);
        let alloc = self
            .alloc
            .copy(offset, 0, len)
            .expect("normalized slice lies within len");
        Vector {
            alloc,
            len,
            config: self.config.clone(),
        }
    }

    /// Drop every value and release the storage.
    pub fn clear(&mut self) {
        self.alloc = Allocation::new(0);
        self.len = 0;
    }

    /// Copy the values into a standard `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn check_insertion_point(&self, index: usize) -> Result<(), CollectionError> {
        if index > self.len {
            return Err(CollectionError::OutOfRange {
                index,
                len: self.len + 1,
            });
        }
        Ok(())
    }

    /// Grow so that `additional` more values fit.
    fn reserve_for(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        let capacity = self.alloc.capacity();
        if required > capacity {
            self.alloc
                .reallocate(self.config.grown_capacity(capacity, required));
        }
    }

    /// Halve the capacity once the vector drops below a quarter full.
    fn shrink_if_sparse(&mut self) {
        if let Some(capacity) = self.config.shrunk_capacity(self.alloc.capacity(), self.len) {
            self.alloc.truncate(capacity);
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Vectors are equal when they hold equal values in the same order,
/// regardless of capacity or growth policy.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Vector::new();
        vector.push_all(iter);
        vector
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        let mut alloc = Allocation::new(len);
        let written = alloc.write(0, values).expect("index 0 is always writable");
        debug_assert_eq!(written, len);
        Self {
            alloc,
            len,
            config: VectorConfig::new(),
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.alloc.into_iter().take(self.len))
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Collection for Vector<T> {
    fn count(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        Vector::clear(self);
    }
}

impl<T: Clone> Arrayable for Vector<T> {
    type Item = T;

    fn to_vec(&self) -> Vec<T> {
        Vector::to_vec(self)
    }
}

impl<T> Sequence<T> for Vector<T> {
    fn get(&self, index: usize) -> Result<&T, CollectionError> {
        Vector::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        Vector::set(self, index, value)
    }

    fn push(&mut self, value: T) {
        Vector::push(self, value);
    }

    fn pop(&mut self) -> Result<T, CollectionError> {
        Vector::pop(self)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        Vector::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        Vector::remove(self, index)
    }

    fn shift(&mut self) -> Result<T, CollectionError> {
        Vector::shift(self)
    }

    fn unshift(&mut self, value: T) {
        Vector::unshift(self, value);
    }

    fn first(&self) -> Result<&T, CollectionError> {
        Vector::first(self)
    }

    fn last(&self) -> Result<&T, CollectionError> {
        Vector::last(self)
    }
}

impl<T> Sortable<T> for Vector<T> {
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Vector::sort_by(self, compare);
    }
}

impl<T> Positional<T> for Vector<T> {
    fn get_at(&self, index: usize) -> Result<&T, CollectionError> {
        Vector::get(self, index)
    }

    fn set_at(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        Vector::set(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        Vector::remove(self, index)
    }
}
