//! Total orders for sorting and ordered membership.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Plain closures `Fn(&T, &T) -> Ordering` implement this trait, so any
/// two-argument comparison function can be passed where a comparator is
/// expected.
pub trait Comparator<T: ?Sized> {
    /// Compare two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of a type, via its `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
