//! Iterators over [`Vector`](crate::Vector) contents.

use std::iter::{FusedIterator, Take};

use corral_alloc::Read;

/// Borrowing iterator over a vector's values, front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: Take<Read<'a, T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: Take<Read<'a, T>>) -> Self {
        Self { slots }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.find_map(|slot| slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every slot below the vector's length is occupied.
        let n = self.slots.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next_back() {
            if slot.is_some() {
                return slot;
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a vector's values, front to back.
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: Take<std::vec::IntoIter<Option<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Take<std::vec::IntoIter<Option<T>>>) -> Self {
        Self { slots }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.find_map(|slot| slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.slots.len();
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        while let Some(slot) = self.slots.next_back() {
            if slot.is_some() {
                return slot;
            }
        }
        None
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
