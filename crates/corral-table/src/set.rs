//! Set view over [`HashTable`].
//!
//! A set is a table whose values are all `()`. Membership, removal and
//! the algebra operations are compositions of table lookups and puts.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use corral_core::{
    Arrayable, Collection, CollectionError, KeyContract, Positional, Set, Sortable, Structural,
};

use crate::config::TableConfig;
use crate::table::{self, HashTable};

/// A hashed set of unique values that enumerates in insertion order.
#[derive(Clone)]
pub struct HashSet<T, C = Structural> {
    table: HashTable<T, (), C>,
}

impl<T> HashSet<T, Structural> {
    /// An empty set using structural equality.
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// An empty set with custom table sizing.
    pub fn with_config(config: TableConfig) -> Result<Self, CollectionError> {
        Ok(Self {
            table: HashTable::with_config(config)?,
        })
    }
}

impl<T, C> HashSet<T, C> {
    /// An empty set using `contract` for hashing and equality.
    pub fn with_contract(contract: C) -> Self {
        Self {
            table: HashTable::with_contract(contract),
        }
    }

    /// An empty set with custom table sizing and contract.
    pub fn with_config_and_contract(
        config: TableConfig,
        contract: C,
    ) -> Result<Self, CollectionError> {
        Ok(Self {
            table: HashTable::with_config_and_contract(config, contract)?,
        })
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// The first member in insertion order. Underflow if empty.
    pub fn first(&self) -> Result<&T, CollectionError> {
        self.iter().next().ok_or(CollectionError::Underflow)
    }

    /// The last member in insertion order. Underflow if empty.
    pub fn last(&self) -> Result<&T, CollectionError> {
        self.iter().next_back().ok_or(CollectionError::Underflow)
    }

    /// Reorder members by `compare`.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.table.sort_by_key(compare);
    }

    /// Copy the members out in insertion order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<T, C: KeyContract<T>> HashSet<T, C> {
    /// Add `value`. Returns `true` if it was not already present.
    pub fn add(&mut self, value: T) -> bool {
        if self.table.has(&value) {
            return false;
        }
        self.table.put(value, ());
        true
    }

    /// Add every value from `values`. Duplicates are ignored.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Whether `value` is a member.
    pub fn has(&self, value: &T) -> bool {
        self.table.has(value)
    }

    /// Remove `value`. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.table.remove(value)
    }

    /// Enumeration position of `value`, if it is a member. O(n).
    pub fn find(&self, value: &T) -> Option<usize> {
        let contract = self.table.contract();
        self.iter()
            .position(|member| contract.keys_equal(member, value))
    }
}

impl<T: Clone, C: KeyContract<T> + Clone> HashSet<T, C> {
    /// A new set of the members for which `predicate` holds.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut out = Self {
            table: self.table.empty_like(),
        };
        for value in self.iter().filter(|v| predicate(*v)) {
            out.table.put(value.clone(), ());
        }
        out
    }
}

impl<T> Default for HashSet<T, Structural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for HashSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Sets are equal when they have the same members, in any order.
impl<T, C: KeyContract<T>> PartialEq for HashSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.has(value))
    }
}

impl<T, C: KeyContract<T>> Eq for HashSet<T, C> {}

impl<T, C: KeyContract<T>> Extend<T> for HashSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, C: KeyContract<T> + Default> FromIterator<T> for HashSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::with_contract(C::default());
        set.add_all(iter);
        set
    }
}

impl<T, C> IntoIterator for HashSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a HashSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> Collection for HashSet<T, C> {
    fn count(&self) -> usize {
        self.table.len()
    }

    fn clear(&mut self) {
        self.table.clear();
    }
}

impl<T: Clone, C> Arrayable for HashSet<T, C> {
    type Item = T;

    fn to_vec(&self) -> Vec<T> {
        HashSet::to_vec(self)
    }
}

impl<T, C> Sortable<T> for HashSet<T, C> {
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        HashSet::sort_by(self, compare);
    }
}

impl<T, C> Positional<T> for HashSet<T, C> {
    fn get_at(&self, index: usize) -> Result<&T, CollectionError> {
        self.table.skip(index).map(|(value, _)| value)
    }

    /// Members are located by hash, so overwriting one in place would
    /// break lookup.
    fn set_at(&mut self, _index: usize, _value: T) -> Result<T, CollectionError> {
        Err(CollectionError::Unsupported {
            operation: "HashSet::set_at",
        })
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        self.table.take_at(index).map(|(value, _)| value)
    }
}

impl<T, C> Set<T> for HashSet<T, C>
where
    T: Clone,
    C: KeyContract<T> + Clone,
{
    fn add(&mut self, value: T) -> bool {
        HashSet::add(self, value)
    }

    fn has(&self, value: &T) -> bool {
        HashSet::has(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    fn members<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn union<S: Set<T> + ?Sized>(&self, other: &S) -> Self {
        let mut out = self.clone();
        out.add_all(other.members().cloned());
        out
    }

    fn intersection<S: Set<T> + ?Sized>(&self, other: &S) -> Self {
        self.filter(|value| other.has(value))
    }

    fn difference<S: Set<T> + ?Sized>(&self, other: &S) -> Self {
        self.filter(|value| !other.has(value))
    }

    fn exclusive<S: Set<T> + ?Sized>(&self, other: &S) -> Self {
        let mut out = self.filter(|value| !other.has(value));
        for value in other.members() {
            if !self.has(value) {
                out.add(value.clone());
            }
        }
        out
    }
}

/// Borrowing iterator over set members in insertion order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: table::Iter<'a, T, ()>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(value, _)| value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over set members in insertion order.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: table::IntoIter<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(value, _)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|(value, _)| value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
