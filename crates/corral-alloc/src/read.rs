//! Lazy, restartable readers over allocation slots.

use std::iter::FusedIterator;
use std::slice;

/// A finite reader over a contiguous run of allocation slots.
///
/// Yields `Some(&value)` for occupied slots and `None` for vacant ones.
/// The reader borrows the allocation immutably, so the slots cannot change
/// underneath it; cloning a reader (or calling [`Read::restart`] on a saved
/// copy) replays the same run from the beginning.
#[derive(Debug)]
pub struct Read<'a, T> {
    start: usize,
    slots: &'a [Option<T>],
    iter: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Read<'a, T> {
    pub(crate) fn new(start: usize, slots: &'a [Option<T>]) -> Self {
        Self {
            start,
            slots,
            iter: slots.iter(),
        }
    }

    /// Index of the first slot covered by this reader.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Total number of slots covered, regardless of progress.
    pub fn span(&self) -> usize {
        self.slots.len()
    }

    /// A fresh reader over the same run, positioned at its first slot.
    pub fn restart(&self) -> Self {
        Self::new(self.start, self.slots)
    }
}

impl<T> Clone for Read<'_, T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            slots: self.slots,
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Read<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Read<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Read<'_, T> {}

impl<T> FusedIterator for Read<'_, T> {}
