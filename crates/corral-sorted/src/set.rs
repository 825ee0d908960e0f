//! Sorted set with deferred normalisation.
//!
//! The backing vector is split in two:
//!
//! ```text
//! items: [ 1  4  7  9 12 | 8  2 ]
//!          └─ sorted ──┘   └ pending (unsorted, ≤ max_pending)
//! ```
//!
//! Every value in the vector is unique under the comparator. `add` checks
//! the sorted prefix by binary search and the pending tail linearly, then
//! appends. Shared-reference queries merge the pending tail in on the fly;
//! mutating queries normalise (sort everything) first.

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FusedIterator, Peekable, Take};
use std::ops::{Bound, RangeBounds};

use corral_core::{
    Arrayable, Collection, CollectionError, Comparator, Natural, Positional, Set,
};
use corral_seq::Vector;
use smallvec::SmallVec;

use crate::config::SortedSetConfig;

type PendingRefs<'a, T> = SmallVec<[&'a T; 16]>;

/// A set of unique values enumerated in comparator order.
#[derive(Clone)]
pub struct SortedSet<T, O = Natural> {
    items: Vector<T>,
    sorted: usize,
    order: O,
    config: SortedSetConfig,
}

impl<T> SortedSet<T, Natural> {
    /// An empty set ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// An empty naturally-ordered set with a custom pending bound.
    pub fn with_config(config: SortedSetConfig) -> Result<Self, CollectionError> {
        Self::with_config_and_comparator(config, Natural)
    }
}

impl<T, O> SortedSet<T, O> {
    /// An empty set ordered by `order`.
    pub fn with_comparator(order: O) -> Self {
        Self {
            items: Vector::new(),
            sorted: 0,
            order,
            config: SortedSetConfig::new(),
        }
    }

    /// An empty set with a custom order and pending bound.
    pub fn with_config_and_comparator(
        config: SortedSetConfig,
        order: O,
    ) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self {
            items: Vector::new(),
            sorted: 0,
            order,
            config,
        })
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of members not yet folded into the sorted prefix.
    pub fn pending(&self) -> usize {
        self.items.len() - self.sorted
    }

    /// The comparator in use.
    pub fn comparator(&self) -> &O {
        &self.order
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.items.clear();
        self.sorted = 0;
    }
}

impl<T, O: Comparator<T>> SortedSet<T, O> {
    /// Add `value`. Returns `false` if an equal value is already present.
    pub fn add(&mut self, value: T) -> bool {
        if self.has(&value) {
            return false;
        }
        self.items.push(value);
        if self.pending() > self.config.max_pending {
            self.normalize();
        }
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

    /// Whether a value equal to `value` is present. O(log n + pending).
    pub fn has(&self, value: &T) -> bool {
        self.search(value).is_ok()
            || self
                .pending_values()
                .any(|member| self.order.compare(member, value) == Ordering::Equal)
    }

    /// Remove the member equal to `value`. Returns whether one existed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.normalize();
        match self.search(value) {
            Ok(index) => self.remove_sorted(index).is_ok(),
            Err(_) => false,
        }
    }

    /// Fold the pending tail into the sorted prefix.
    pub fn normalize(&mut self) {
        let pending = self.pending();
        if pending == 0 {
            return;
        }
        log::trace!(
            "sorted set normalise: {pending} pending into {} sorted",
            self.sorted
        );
        let order = &self.order;
        self.items.sort_by(|a, b| order.compare(a, b));
        self.sorted = self.items.len();
    }

    /// Iterate members in comparator order.
    pub fn iter(&self) -> Iter<'_, T, O> {
        let mut pending: PendingRefs<'_, T> = self.pending_values().collect();
        pending.sort_by(|a, b| self.order.compare(a, b));
        Iter {
            sorted: self.items.iter().take(self.sorted).peekable(),
            pending: pending.into_iter().peekable(),
            order: &self.order,
        }
    }

    /// The smallest member. Underflow if empty.
    pub fn first(&self) -> Result<&T, CollectionError> {
        let head = if self.sorted > 0 {
            self.items.get(0).ok()
        } else {
            None
        };
        let pending = self
            .pending_values()
            .min_by(|a, b| self.order.compare(a, b));
        self.pick(head, pending, Ordering::Less)
            .ok_or(CollectionError::Underflow)
    }

    /// The largest member. Underflow if empty.
    pub fn last(&self) -> Result<&T, CollectionError> {
        let tail = match self.sorted.checked_sub(1) {
            Some(index) => self.items.get(index).ok(),
            None => None,
        };
        let pending = self
            .pending_values()
            .max_by(|a, b| self.order.compare(a, b));
        self.pick(tail, pending, Ordering::Greater)
            .ok_or(CollectionError::Underflow)
    }

    /// Members within `range`, in comparator order.
    pub fn range<'a, R>(&'a self, range: R) -> impl Iterator<Item = &'a T> + 'a
    where
        R: RangeBounds<T> + 'a,
    {
        let order = &self.order;
        self.iter()
            .map_while(move |value| {
                if past_end(order, range.end_bound(), value) {
                    return None;
                }
                Some((!before_start(order, range.start_bound(), value)).then_some(value))
            })
            .flatten()
    }

    /// The member at `position` in comparator order.
    pub fn get_at(&self, position: usize) -> Result<&T, CollectionError> {
        self.iter().nth(position).ok_or(CollectionError::OutOfRange {
            index: position,
            len: self.len(),
        })
    }

    /// Remove and return the member at `position` in comparator order.
    pub fn remove_at(&mut self, position: usize) -> Result<T, CollectionError> {
        self.normalize();
        self.remove_sorted(position)
    }

    /// Copy the members out in comparator order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// A new set of the members for which `predicate` holds.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        O: Clone,
        P: FnMut(&T) -> bool,
    {
        let mut items = Vector::new();
        items.push_all(self.iter().filter(|v| predicate(*v)).cloned());
        Self {
            sorted: items.len(),
            items,
            order: self.order.clone(),
            config: self.config.clone(),
        }
    }

    /// Binary search over the sorted prefix.
    ///
    /// `Ok(index)` if found, otherwise `Err(insertion point)`.
    fn search(&self, value: &T) -> Result<usize, usize> {
        let (mut low, mut high) = (0, self.sorted);
        while low < high {
            let mid = low + (high - low) / 2;
            let Ok(probe) = self.items.get(mid) else {
                return Err(low);
            };
            match self.order.compare(probe, value) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(low)
    }

    fn pending_values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().skip(self.sorted)
    }

    /// Of two optional candidates, the one ordered `want` relative to the
    /// other.
    fn pick<'a>(&self, a: Option<&'a T>, b: Option<&'a T>, want: Ordering) -> Option<&'a T> {
        match (a, b) {
            (Some(a), Some(b)) if self.order.compare(b, a) == want => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        }
    }

    /// Remove from the sorted prefix. Callers normalise first.
    fn remove_sorted(&mut self, index: usize) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.sorted)?;
        let value = self.items.remove(index)?;
        self.sorted -= 1;
        Ok(value)
    }
}

fn before_start<T, O: Comparator<T>>(order: &O, bound: Bound<&T>, value: &T) -> bool {
    match bound {
        Bound::Included(start) => order.compare(value, start) == Ordering::Less,
        Bound::Excluded(start) => order.compare(value, start) != Ordering::Greater,
        Bound::Unbounded => false,
    }
}

fn past_end<T, O: Comparator<T>>(order: &O, bound: Bound<&T>, value: &T) -> bool {
    match bound {
        Bound::Included(end) => order.compare(value, end) == Ordering::Greater,
        Bound::Excluded(end) => order.compare(value, end) != Ordering::Less,
        Bound::Unbounded => false,
    }
}

impl<T> Default for SortedSet<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, O: Comparator<T>> fmt::Debug for SortedSet<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Equal when both enumerate equal members in the same order.
impl<T: PartialEq, O: Comparator<T>> PartialEq for SortedSet<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, O: Comparator<T>> Eq for SortedSet<T, O> {}

impl<T, O: Comparator<T>> Extend<T> for SortedSet<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, O: Comparator<T> + Default> FromIterator<T> for SortedSet<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = SortedSet::with_comparator(O::default());
        set.add_all(iter);
        set
    }
}

impl<T, O: Comparator<T>> IntoIterator for SortedSet<T, O> {
    type Item = T;
    type IntoIter = corral_seq::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.normalize();
        self.items.into_iter()
    }
}

impl<'a, T, O: Comparator<T>> IntoIterator for &'a SortedSet<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, O> Collection for SortedSet<T, O> {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        SortedSet::clear(self);
    }
}

impl<T: Clone, O: Comparator<T>> Arrayable for SortedSet<T, O> {
    type Item = T;

    fn to_vec(&self) -> Vec<T> {
        SortedSet::to_vec(self)
    }
}

impl<T, O: Comparator<T>> Positional<T> for SortedSet<T, O> {
    fn get_at(&self, index: usize) -> Result<&T, CollectionError> {
        SortedSet::get_at(self, index)
    }

    /// Overwriting a member could break the ordering.
    fn set_at(&mut self, _index: usize, _value: T) -> Result<T, CollectionError> {
        Err(CollectionError::Unsupported {
            operation: "SortedSet::set_at",
        })
    }

    fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        SortedSet::remove_at(self, index)
    }
}

impl<T, O> Set<T> for SortedSet<T, O>
where
    T: Clone,
    O: Comparator<T> + Clone,
{
    fn add(&mut self, value: T) -> bool {
        SortedSet::add(self, value)
    }

    fn has(&self, value: &T) -> bool {
        SortedSet::has(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        SortedSet::remove(self, value)
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

/// Iterator over a sorted set in comparator order.
///
/// Merges the sorted prefix with a sorted snapshot of the pending tail.
pub struct Iter<'a, T, O> {
    sorted: Peekable<Take<corral_seq::Iter<'a, T>>>,
    pending: Peekable<smallvec::IntoIter<[&'a T; 16]>>,
    order: &'a O,
}

impl<'a, T, O: Comparator<T>> Iterator for Iter<'a, T, O> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match (self.sorted.peek(), self.pending.peek()) {
            (Some(a), Some(b)) => {
                if self.order.compare(a, b) == Ordering::Greater {
                    self.pending.next()
                } else {
                    self.sorted.next()
                }
            }
            (Some(_), None) => self.sorted.next(),
            (None, Some(_)) => self.pending.next(),
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.sorted.len() + self.pending.len();
        (n, Some(n))
    }
}

impl<T, O: Comparator<T>> ExactSizeIterator for Iter<'_, T, O> {}

impl<T, O: Comparator<T>> FusedIterator for Iter<'_, T, O> {}
