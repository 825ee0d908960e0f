//! Capability traits implemented by the concrete collections.
//!
//! Structures advertise what they can do through these traits rather than
//! through dynamic dispatch: a `Vector` is a [`Sequence`], a hashed map is
//! a [`Map`], hashed and sorted sets are [`Set`]s, and all of them are
//! [`Collection`]s.

use std::cmp::Ordering;

use crate::error::CollectionError;

/// Behaviour shared by every structure.
pub trait Collection {
    /// Number of elements (or entries) held.
    fn count(&self) -> usize;

    /// Whether the structure holds no elements.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Remove every element, returning the structure to its initial state.
    fn clear(&mut self);
}

/// Conversion to an owned, ordered array of elements.
pub trait Arrayable {
    /// Element type of the produced array.
    type Item;

    /// Copy the elements out in enumeration order.
    fn to_vec(&self) -> Vec<Self::Item>;
}

/// Values arranged in a single linear dimension, indexed `[0, count)`.
pub trait Sequence<T>: Collection {
    /// The value at `index`. Out-of-range if `index >= count`.
    fn get(&self, index: usize) -> Result<&T, CollectionError>;

    /// Replace the value at `index`, returning the previous value.
    fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError>;

    /// Append a value.
    fn push(&mut self, value: T);

    /// Remove and return the last value. Underflow if empty.
    fn pop(&mut self) -> Result<T, CollectionError>;

    /// Insert at `index`, shifting later values right. `index == count` appends.
    fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError>;

    /// Remove and return the value at `index`, shifting later values left.
    fn remove(&mut self, index: usize) -> Result<T, CollectionError>;

    /// Remove and return the first value. Underflow if empty.
    fn shift(&mut self) -> Result<T, CollectionError>;

    /// Prepend a value.
    fn unshift(&mut self, value: T);

    /// The first value. Underflow if empty.
    fn first(&self) -> Result<&T, CollectionError>;

    /// The last value. Underflow if empty.
    fn last(&self) -> Result<&T, CollectionError>;
}

/// Key → value association with unique keys.
pub trait Map<K, V>: Collection {
    /// Set type returned by [`Map::keys`].
    type Keys;
    /// Sequence type returned by [`Map::values`].
    type Values;

    /// The value for `key`. Not-found if absent.
    fn get(&self, key: &K) -> Result<&V, CollectionError>;

    /// The value for `key`, or `None` if absent.
    fn try_get(&self, key: &K) -> Option<&V>;

    /// Whether `key` has an associated value.
    fn has(&self, key: &K) -> bool;

    /// Associate `key` with `value`, returning the replaced value if any.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Remove the association for `key`. Returns whether one existed.
    fn remove(&mut self, key: &K) -> bool;

    /// First key (in enumeration order) whose value equals `value`.
    fn find(&self, value: &V) -> Option<&K>
    where
        V: PartialEq;

    /// All keys as a set.
    fn keys(&self) -> Self::Keys;

    /// All values as a sequence, in enumeration order.
    fn values(&self) -> Self::Values;

    /// Key/value pairs in enumeration order.
    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a;
}

/// A collection of unique values with set algebra.
///
/// Algebra operations accept any other [`Set`] over the same element type
/// and return a new structure of `Self`'s kind; both operands are left
/// unmodified.
pub trait Set<T>: Collection {
    /// Add a value. Returns `true` if it was not already present.
    fn add(&mut self, value: T) -> bool;

    /// Whether the set contains `value`.
    fn has(&self, value: &T) -> bool;

    /// Remove `value`. Returns whether it was present.
    fn remove(&mut self, value: &T) -> bool;

    /// The members in enumeration order.
    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// `A ∪ B = {x | x ∈ A ∨ x ∈ B}`.
    fn union<S: Set<T> + ?Sized>(&self, other: &S) -> Self
    where
        Self: Sized;

    /// `A ∩ B = {x | x ∈ A ∧ x ∈ B}`.
    fn intersection<S: Set<T> + ?Sized>(&self, other: &S) -> Self
    where
        Self: Sized;

    /// `A \ B = {x ∈ A | x ∉ B}`.
    fn difference<S: Set<T> + ?Sized>(&self, other: &S) -> Self
    where
        Self: Sized;

    /// `A ⊖ B = (A \ B) ∪ (B \ A)`.
    fn exclusive<S: Set<T> + ?Sized>(&self, other: &S) -> Self
    where
        Self: Sized;
}

/// In-place reordering by a comparator.
pub trait Sortable<T> {
    /// Sort by `compare`, which returns the ordering of its two arguments.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sort by the natural order of `T`.
    fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a.cmp(b))
    }
}

/// Access by enumeration position.
///
/// Structures without meaningful positional writes (sets) report
/// [`CollectionError::Unsupported`] from [`Positional::set_at`].
pub trait Positional<T> {
    /// The value at `index` in enumeration order.
    fn get_at(&self, index: usize) -> Result<&T, CollectionError>;

    /// Overwrite the value at `index`, returning the previous value.
    fn set_at(&mut self, index: usize, value: T) -> Result<T, CollectionError>;

    /// Remove and return the value at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError>;
}
