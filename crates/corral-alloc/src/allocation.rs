//! Fixed-capacity slot arena.
//!
//! An [`Allocation`] is a block of `capacity` uniformly-typed slots addressed
//! by integer position. Each slot is either vacant or holds exactly one
//! value. Capacity only changes on explicit request; every indexed or ranged
//! operation is validated against the current capacity before anything is
//! mutated, so a rejected call leaves the allocation untouched.

use std::cmp::Ordering;
use std::ops::Range;

use corral_core::CollectionError;

use crate::read::Read;

/// A bounds-checked block of indexable slots.
///
/// The allocation exclusively owns its storage. Slots beyond a shrink are
/// dropped; slots added by a grow start vacant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation<T> {
    slots: Vec<Option<T>>,
}

impl<T> Allocation<T> {
    /// Create an allocation with `capacity` vacant slots. Zero is allowed.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    /// Number of addressable slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Resize to exactly `capacity` slots.
    ///
    /// Contents of slots `[0, min(old, new))` are preserved.
    pub fn reallocate(&mut self, capacity: usize) {
        let old = self.slots.len();
        if capacity == old {
            return;
        }
        log::trace!("allocation resize: {old} -> {capacity} slots");
        if capacity > old {
            self.slots.reserve_exact(capacity - old);
            self.slots.resize_with(capacity, || None);
        } else {
            self.slots.truncate(capacity);
            self.slots.shrink_to_fit();
        }
    }

    /// Grow to `capacity` if currently smaller; never shrinks.
    pub fn grow_to(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Shrink to `capacity` if currently larger; never grows.
    pub fn truncate(&mut self, capacity: usize) {
        if capacity < self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// The value in slot `index`, or `None` if the slot is vacant.
    pub fn get(&self, index: usize) -> Result<Option<&T>, CollectionError> {
        CollectionError::check_index(index, self.capacity())?;
        Ok(self.slots[index].as_ref())
    }

    /// Mutable access to slot `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, CollectionError> {
        CollectionError::check_index(index, self.capacity())?;
        Ok(self.slots[index].as_mut())
    }

    /// Whether slot `index` exists and is occupied.
    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Option::is_some)
    }

    /// Store `value` in slot `index`, returning the previous occupant.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, CollectionError> {
        CollectionError::check_index(index, self.capacity())?;
        Ok(self.slots[index].replace(value))
    }

    /// Vacate slot `index`, returning its former value.
    pub fn take(&mut self, index: usize) -> Result<Option<T>, CollectionError> {
        CollectionError::check_index(index, self.capacity())?;
        Ok(self.slots[index].take())
    }

    /// Exchange the contents of two slots.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), CollectionError> {
        CollectionError::check_index(a, self.capacity())?;
        CollectionError::check_index(b, self.capacity())?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Shift `len` slots starting at `src` so they start at `dst`.
    ///
    /// Destination slots are overwritten. Source slots that the destination
    /// range does not cover are left vacant. Overlapping ranges are handled.
    pub fn move_range(&mut self, src: usize, dst: usize, len: usize) -> Result<(), CollectionError> {
        self.check_span(src, len)?;
        self.check_span(dst, len)?;
        if len == 0 || src == dst {
            return Ok(());
        }
        if dst > src {
            for k in (0..len).rev() {
                let value = self.slots[src + k].take();
                self.slots[dst + k] = value;
            }
        } else {
            for k in 0..len {
                let value = self.slots[src + k].take();
                self.slots[dst + k] = value;
            }
        }
        Ok(())
    }

    /// A lazy reader over up to `len` slots starting at `index`.
    ///
    /// `index` may equal the capacity (an empty read). `len` is clamped so
    /// the reader never passes the end of the allocation.
    pub fn read(&self, index: usize, len: usize) -> Result<Read<'_, T>, CollectionError> {
        let capacity = self.capacity();
        if index > capacity {
            return Err(CollectionError::OutOfRange {
                index,
                len: capacity + 1,
            });
        }
        let end = index + len.min(capacity - index);
        Ok(Read::new(index, &self.slots[index..end]))
    }

    /// A reader over every slot.
    pub fn iter(&self) -> Read<'_, T> {
        Read::new(0, &self.slots)
    }

    /// Assign `values` to consecutive slots starting at `index`.
    ///
    /// Writing stops silently at the capacity boundary; values past it are
    /// not consumed. Returns the number of slots written.
    pub fn write<I>(&mut self, index: usize, values: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        let capacity = self.capacity();
        if index > capacity {
            return Err(CollectionError::OutOfRange {
                index,
                len: capacity + 1,
            });
        }
        let mut written = 0;
        for (slot, value) in self.slots[index..].iter_mut().zip(values) {
            *slot = Some(value);
            written += 1;
        }
        Ok(written)
    }

    /// Sort the slots in `range` by `compare`. Vacant slots sort last.
    ///
    /// The sort is stable.
    pub fn sort_range<F>(&mut self, range: Range<usize>, mut compare: F) -> Result<(), CollectionError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.check_range(&range)?;
        self.slots[range].sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        Ok(())
    }

    /// Reverse the order of the slots in `range`.
    pub fn reverse_range(&mut self, range: Range<usize>) -> Result<(), CollectionError> {
        self.check_range(&range)?;
        self.slots[range].reverse();
        Ok(())
    }

    /// Vacate every slot, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    fn check_span(&self, start: usize, len: usize) -> Result<(), CollectionError> {
        let end = start.checked_add(len).ok_or_else(|| {
            CollectionError::invalid(format!("range {start} + {len} overflows"))
        })?;
        self.check_range(&(start..end))
    }

    fn check_range(&self, range: &Range<usize>) -> Result<(), CollectionError> {
        if range.start > range.end {
            return Err(CollectionError::invalid(format!(
                "range start {} exceeds end {}",
                range.start, range.end
            )));
        }
        let capacity = self.capacity();
        if range.end > capacity {
            return Err(CollectionError::OutOfRange {
                index: range.end,
                len: capacity + 1,
            });
        }
        Ok(())
    }
}

impl<T: Clone> Allocation<T> {
    /// Duplicate `len` slots starting at `src` into a new allocation.
    ///
    /// The result has capacity `dst + len`; the copies occupy
    /// `[dst, dst + len)` and every slot before `dst` is vacant. The source
    /// allocation is not modified.
    pub fn copy(&self, src: usize, dst: usize, len: usize) -> Result<Allocation<T>, CollectionError> {
        self.check_span(src, len)?;
        let capacity = dst.checked_add(len).ok_or_else(|| {
            CollectionError::invalid(format!("copy target {dst} + {len} overflows"))
        })?;
        let mut copy = Allocation::new(capacity);
        copy.slots[dst..].clone_from_slice(&self.slots[src..src + len]);
        Ok(copy)
    }
}

impl<T> Default for Allocation<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Consumes the allocation, yielding every slot in position order.
impl<T> IntoIterator for Allocation<T> {
    type Item = Option<T>;
    type IntoIter = std::vec::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32]) -> Allocation<i32> {
        let mut alloc = Allocation::new(values.len());
        alloc.write(0, values.iter().copied()).unwrap();
        alloc
    }

    fn contents(alloc: &Allocation<i32>) -> Vec<Option<i32>> {
        alloc.iter().map(|slot| slot.copied()).collect()
    }

    #[test]
    fn new_allocation_is_vacant() {
        let alloc: Allocation<u8> = Allocation::new(4);
        assert_eq!(alloc.capacity(), 4);
        assert_eq!(alloc.occupied(), 0);
        assert_eq!(alloc.get(3), Ok(None));
    }

    #[test]
    fn zero_capacity_rejects_every_index() {
        let alloc: Allocation<u8> = Allocation::new(0);
        assert_eq!(
            alloc.get(0),
            Err(CollectionError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn set_get_take() {
        let mut alloc = Allocation::new(3);
        assert_eq!(alloc.set(1, "x"), Ok(None));
        assert_eq!(alloc.set(1, "y"), Ok(Some("x")));
        assert_eq!(alloc.get(1), Ok(Some(&"y")));
        assert!(alloc.is_occupied(1));
        assert_eq!(alloc.take(1), Ok(Some("y")));
        assert!(!alloc.is_occupied(1));
        assert!(alloc.set(3, "z").is_err());
    }

    #[test]
    fn reallocate_preserves_prefix() {
        let mut alloc = filled(&[1, 2, 3, 4]);
        alloc.reallocate(6);
        assert_eq!(
            contents(&alloc),
            vec![Some(1), Some(2), Some(3), Some(4), None, None]
        );
        alloc.reallocate(2);
        assert_eq!(contents(&alloc), vec![Some(1), Some(2)]);
    }

    #[test]
    fn grow_to_and_truncate_are_one_directional() {
        let mut alloc: Allocation<u8> = Allocation::new(8);
        alloc.grow_to(4);
        assert_eq!(alloc.capacity(), 8);
        alloc.truncate(16);
        assert_eq!(alloc.capacity(), 8);
        alloc.grow_to(16);
        assert_eq!(alloc.capacity(), 16);
        alloc.truncate(2);
        assert_eq!(alloc.capacity(), 2);
    }

    #[test]
    fn swap_exchanges_slots() {
        let mut alloc = filled(&[1, 2, 3]);
        alloc.swap(0, 2).unwrap();
        assert_eq!(contents(&alloc), vec![Some(3), Some(2), Some(1)]);
        assert!(alloc.swap(0, 3).is_err());
        assert_eq!(contents(&alloc), vec![Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn move_right_opens_gap() {
        let mut alloc = filled(&[1, 2, 3, 0]);
        alloc.take(3).unwrap();
        alloc.move_range(1, 2, 2).unwrap();
        assert_eq!(contents(&alloc), vec![Some(1), None, Some(2), Some(3)]);
    }

    #[test]
    fn move_left_closes_gap() {
        let mut alloc = filled(&[1, 2, 3, 4]);
        alloc.take(1).unwrap();
        alloc.move_range(2, 1, 2).unwrap();
        assert_eq!(contents(&alloc), vec![Some(1), Some(3), Some(4), None]);
    }

    #[test]
    fn move_disjoint_clears_source() {
        let mut alloc = filled(&[1, 2, 3, 4, 5, 6]);
        alloc.move_range(0, 4, 2).unwrap();
        assert_eq!(
            contents(&alloc),
            vec![None, None, Some(3), Some(4), Some(1), Some(2)]
        );
    }

    #[test]
    fn move_out_of_bounds_leaves_allocation_unchanged() {
        let mut alloc = filled(&[1, 2, 3]);
        let before = alloc.clone();
        assert!(alloc.move_range(0, 2, 2).is_err());
        assert!(alloc.move_range(2, 0, 2).is_err());
        assert!(alloc.move_range(usize::MAX, 0, 2).is_err());
        assert_eq!(alloc, before);
    }

    #[test]
    fn copy_returns_independent_allocation() {
        let alloc = filled(&[1, 2, 3, 4]);
        let mut copy = alloc.copy(1, 0, 2).unwrap();
        assert_eq!(contents(&copy), vec![Some(2), Some(3)]);
        copy.set(0, 99).unwrap();
        assert_eq!(alloc.get(1), Ok(Some(&2)));
    }

    #[test]
    fn copy_with_target_offset() {
        let alloc = filled(&[7, 8]);
        let copy = alloc.copy(0, 2, 2).unwrap();
        assert_eq!(contents(&copy), vec![None, None, Some(7), Some(8)]);
        assert!(alloc.copy(1, 0, 2).is_err());
    }

    #[test]
    fn read_clamps_to_capacity() {
        let alloc = filled(&[1, 2, 3]);
        let read = alloc.read(1, 10).unwrap();
        assert_eq!(read.len(), 2);
        let values: Vec<_> = read.flatten().copied().collect();
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn read_at_capacity_is_empty() {
        let alloc = filled(&[1, 2, 3]);
        assert_eq!(alloc.read(3, 5).unwrap().count(), 0);
        assert_eq!(
            alloc.read(4, 1).unwrap_err(),
            CollectionError::OutOfRange { index: 4, len: 4 }
        );
    }

    #[test]
    fn read_is_restartable() {
        let alloc = filled(&[5, 6]);
        let read = alloc.read(0, 2).unwrap();
        let first: Vec<_> = read.clone().collect();
        let second: Vec<_> = read.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn write_stops_at_capacity() {
        let mut alloc = Allocation::new(3);
        let mut source = vec![1, 2, 3, 4, 5].into_iter();
        let written = alloc.write(1, source.by_ref()).unwrap();
        assert_eq!(written, 2);
        assert_eq!(contents(&alloc), vec![None, Some(1), Some(2)]);
        // The value past the boundary was not consumed.
        assert_eq!(source.next(), Some(3));
    }

    #[test]
    fn sort_range_only_touches_range() {
        let mut alloc = filled(&[9, 4, 7, 1, 0]);
        alloc.sort_range(1..4, |a, b| a.cmp(b)).unwrap();
        assert_eq!(
            contents(&alloc),
            vec![Some(9), Some(1), Some(4), Some(7), Some(0)]
        );
    }

    #[test]
    fn sort_range_places_vacant_last() {
        let mut alloc = filled(&[3, 1, 2]);
        alloc.take(1).unwrap();
        alloc.sort_range(0..3, |a, b| a.cmp(b)).unwrap();
        assert_eq!(contents(&alloc), vec![Some(2), Some(3), None]);
    }

    #[test]
    fn reverse_range_validates_before_mutating() {
        let mut alloc = filled(&[1, 2, 3, 4]);
        alloc.reverse_range(1..4).unwrap();
        assert_eq!(contents(&alloc), vec![Some(1), Some(4), Some(3), Some(2)]);

        let before = alloc.clone();
        #[allow(clippy::reversed_empty_ranges)]
        let backwards = 3..1;
        assert!(matches!(
            alloc.reverse_range(backwards),
            Err(CollectionError::InvalidArgument { .. })
        ));
        assert!(matches!(
            alloc.reverse_range(0..5),
            Err(CollectionError::OutOfRange { index: 5, len: 5 })
        ));
        assert_eq!(alloc, before);
    }

    #[test]
    fn into_iter_yields_every_slot() {
        let mut alloc = filled(&[1, 2, 3]);
        alloc.take(1).unwrap();
        let slots: Vec<_> = alloc.into_iter().collect();
        assert_eq!(slots, vec![Some(1), None, Some(3)]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut alloc = filled(&[1, 2]);
        alloc.clear();
        assert_eq!(alloc.capacity(), 2);
        assert_eq!(alloc.occupied(), 0);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn move_preserves_moved_values(
                values in prop::collection::vec(any::<i32>(), 1..32),
                src in 0usize..32,
                dst in 0usize..32,
                len in 0usize..32,
            ) {
                let mut alloc = filled(&values);
                let cap = values.len();
                let valid = src + len <= cap && dst + len <= cap;
                let before = alloc.clone();
                let result = alloc.move_range(src, dst, len);
                prop_assert_eq!(result.is_ok(), valid);
                if valid {
                    for k in 0..len {
                        prop_assert_eq!(alloc.get(dst + k).unwrap(), Some(&values[src + k]));
                    }
                    for i in src..src + len {
                        if i < dst || i >= dst + len {
                            prop_assert_eq!(alloc.get(i).unwrap(), None);
                        }
                    }
                } else {
                    prop_assert_eq!(alloc, before);
                }
            }

            #[test]
            fn reverse_twice_is_identity(
                values in prop::collection::vec(any::<i32>(), 0..32),
            ) {
                let mut alloc = filled(&values);
                let cap = values.len();
                alloc.reverse_range(0..cap).unwrap();
                alloc.reverse_range(0..cap).unwrap();
                prop_assert_eq!(alloc, filled(&values));
            }

            #[test]
            fn sort_range_yields_sorted_permutation(
                values in prop::collection::vec(any::<i16>(), 0..32),
            ) {
                let mut alloc = Allocation::new(values.len());
                alloc.write(0, values.iter().copied()).unwrap();
                alloc.sort_range(0..values.len(), |a, b| a.cmp(b)).unwrap();
                let got: Vec<i16> = alloc.iter().flatten().copied().collect();
                let mut expected = values.clone();
                expected.sort();
                prop_assert_eq!(got, expected);
            }
        }
    }
}
