//! Insertion-ordered hash table.
//!
//! Entries live in an append-only log (a [`Vector`] of optional entries)
//! whose order is the enumeration order. A separate bucket array maps
//! `hash mod buckets` to the log positions of the entries in that bucket;
//! collisions inside a bucket are resolved by the key contract's equality.
//!
//! ```text
//! buckets: [ [0, 3] | [] | [1] | [2] ]      SmallVec<[usize; 4]> each
//!              │  │          │     │
//! entries: [ e0 , e1 , e2 , e3 , ∅ , e5 ]   Vector<Option<Entry>>
//!                                ↑ tombstone (removed, awaiting compaction)
//! ```
//!
//! Removal vacates the log slot and drops it from its bucket. Once
//! tombstones outnumber live entries by the configured ratio, the log is
//! compacted and the buckets are rebuilt.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use corral_core::{CollectionError, KeyContract, Structural};
use corral_seq::Vector;
use smallvec::SmallVec;

use crate::config::TableConfig;

type Bucket = SmallVec<[usize; 4]>;

#[derive(Clone, Debug)]
struct Entry<K, V> {
    hash: u64,
    key: K,
    value: V,
}

/// A key → value table with unique keys and stable insertion order.
///
/// Key identity is decided by the contract `C` (structural `Hash + Eq` by
/// default). Updating an existing key keeps its position; a removed key
/// that is put again goes to the end.
#[derive(Clone)]
pub struct HashTable<K, V, C = Structural> {
    entries: Vector<Option<Entry<K, V>>>,
    buckets: Vec<Bucket>,
    live: usize,
    contract: C,
    config: TableConfig,
}

impl<K, V> HashTable<K, V, Structural> {
    /// An empty table using structural key equality.
    pub fn new() -> Self {
        Self::with_contract(Structural)
    }

    /// An empty table with custom sizing and structural key equality.
    pub fn with_config(config: TableConfig) -> Result<Self, CollectionError> {
        Self::with_config_and_contract(config, Structural)
    }
}

impl<K, V, C> HashTable<K, V, C> {
    /// An empty table using `contract` for key hashing and equality.
    pub fn with_contract(contract: C) -> Self {
        Self::from_parts(TableConfig::new(), contract)
    }

    /// An empty table with custom sizing and key contract.
    pub fn with_config_and_contract(config: TableConfig, contract: C) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self::from_parts(config, contract))
    }

    /// Assemble an empty table from an already-validated config.
    pub(crate) fn from_parts(config: TableConfig, contract: C) -> Self {
        Self {
            entries: Vector::new(),
            buckets: vec![Bucket::new(); config.initial_buckets],
            live: 0,
            contract,
            config,
        }
    }

    /// An empty table with the same sizing and contract.
    pub fn empty_like(&self) -> Self
    where
        C: Clone,
    {
        Self::from_parts(self.config.clone(), self.contract.clone())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current bucket count.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of removed entries still occupying the insertion-order log.
    pub fn tombstones(&self) -> usize {
        self.entries.len() - self.live
    }

    /// The key contract in use.
    pub fn contract(&self) -> &C {
        &self.contract
    }

    /// The sizing parameters in use.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.entries.iter(),
            remaining: self.live,
        }
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.iter().map(|(key, _)| key)
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.iter().map(|(_, value)| value)
    }

    /// First key (in insertion order) whose value equals `value`. O(n).
    pub fn find(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(key, _)| key)
    }

    /// The entry at `position` in insertion order. O(n).
    pub fn skip(&self, position: usize) -> Result<(&K, &V), CollectionError> {
        self.iter().nth(position).ok_or(CollectionError::OutOfRange {
            index: position,
            len: self.live,
        })
    }

    /// Remove every entry and reset the bucket array.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets = vec![Bucket::new(); self.config.initial_buckets];
        self.live = 0;
    }

    /// Reorder entries by `compare`. Membership is unchanged.
    ///
    /// The sort is stable.
    pub fn sort_entries_by<F>(&mut self, mut compare: F)
    where
        F: FnMut((&K, &V), (&K, &V)) -> Ordering,
    {
        if self.tombstones() > 0 {
            self.compact();
        }
        self.entries.sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare((&a.key, &a.value), (&b.key, &b.value)),
            (a, b) => a.is_none().cmp(&b.is_none()),
        });
        self.rebuild_buckets(self.buckets.len());
    }

    /// Reorder entries by value.
    pub fn sort_by_value<F>(&mut self, mut compare: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.sort_entries_by(|(_, a), (_, b)| compare(a, b));
    }

    /// Reorder entries by key.
    pub fn sort_by_key<F>(&mut self, mut compare: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        self.sort_entries_by(|(a, _), (b, _)| compare(a, b));
    }

    /// Copy the entries out in insertion order.
    pub fn to_vec(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Remove the entry at `position` in insertion order.
    pub fn take_at(&mut self, position: usize) -> Result<(K, V), CollectionError> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .nth(position)
            .map(|(index, _)| index)
            .ok_or(CollectionError::OutOfRange {
                index: position,
                len: self.live,
            })?;
        let entry = self.vacate(index).ok_or(CollectionError::OutOfRange {
            index: position,
            len: self.live,
        })?;
        Ok((entry.key, entry.value))
    }

    /// Vacate log slot `index`, unlinking it from its bucket.
    fn vacate(&mut self, index: usize) -> Option<Entry<K, V>> {
        let entry = self.entries.set(index, None).ok().flatten()?;
        let bucket = bucket_of(entry.hash, self.buckets.len());
        self.buckets[bucket].retain(|slot| *slot != index);
        self.live -= 1;
        self.compact_if_sparse();
        Some(entry)
    }

    fn grow_if_loaded(&mut self) {
        let buckets = self.buckets.len();
        if self.live as f64 / buckets as f64 > self.config.load_factor {
            let grown = buckets * 2;
            log::debug!("table rehash: {buckets} -> {grown} buckets, {} entries", self.live);
            self.rebuild_buckets(grown);
        }
    }

    fn compact_if_sparse(&mut self) {
        let tombstones = self.tombstones();
        if tombstones as f64 > self.config.compaction_ratio * self.live as f64 {
            self.compact();
        }
    }

    /// Drop tombstones from the log and re-link the buckets.
    fn compact(&mut self) {
        log::debug!(
            "table compaction: dropping {} tombstones, {} entries",
            self.tombstones(),
            self.live
        );
        let entries = std::mem::take(&mut self.entries);
        self.entries = entries.into_iter().filter(Option::is_some).collect();
        self.rebuild_buckets(self.buckets.len());
    }

    fn rebuild_buckets(&mut self, count: usize) {
        let mut buckets = vec![Bucket::new(); count];
        for (index, slot) in self.entries.iter().enumerate() {
            if let Some(entry) = slot {
                buckets[bucket_of(entry.hash, count)].push(index);
            }
        }
        self.buckets = buckets;
    }
}

impl<K, V, C: KeyContract<K>> HashTable<K, V, C> {
    /// Log position of the entry for `key`.
    fn locate(&self, key: &K) -> Option<usize> {
        let hash = self.contract.hash_key(key);
        let bucket = &self.buckets[bucket_of(hash, self.buckets.len())];
        bucket.iter().copied().find(|&index| {
            matches!(
                self.entries.get(index),
                Ok(Some(entry)) if entry.hash == hash && self.contract.keys_equal(&entry.key, key)
            )
        })
    }

    fn entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let index = self.locate(key)?;
        self.entries.get(index).ok()?.as_ref()
    }

    /// The value for `key`. Not-found if absent.
    pub fn get(&self, key: &K) -> Result<&V, CollectionError> {
        self.try_get(key).ok_or(CollectionError::NotFound)
    }

    /// The value for `key`, if present.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.entry(key).map(|entry| &entry.value)
    }

    /// The stored key and value for `key`, if present.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.entry(key).map(|entry| (&entry.key, &entry.value))
    }

    /// Mutable access to the value for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.locate(key)?;
        let slot = self.entries.get_mut(index).ok()?;
        slot.as_mut().map(|entry| &mut entry.value)
    }

    /// Whether `key` has an entry.
    pub fn has(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Insert or update. Returns the replaced value if `key` was present.
    ///
    /// An update keeps the entry's position in insertion order.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(index) = self.locate(&key) {
            if let Ok(Some(entry)) = self.entries.get_mut(index) {
                return Some(std::mem::replace(&mut entry.value, value));
            }
        }
        let hash = self.contract.hash_key(&key);
        let index = self.entries.len();
        self.entries.push(Some(Entry { hash, key, value }));
        let bucket = bucket_of(hash, self.buckets.len());
        self.buckets[bucket].push(index);
        self.live += 1;
        self.grow_if_loaded();
        None
    }

    /// Remove the entry for `key`, returning its value.
    pub fn take(&mut self, key: &K) -> Option<V> {
        let index = self.locate(key)?;
        self.vacate(index).map(|entry| entry.value)
    }

    /// Remove the entry for `key`. Returns whether one existed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }
}

impl<K, V> Default for HashTable<K, V, Structural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for HashTable<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> IntoIterator for HashTable<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            slots: self.entries.into_iter(),
            remaining: self.live,
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a HashTable<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

fn bucket_of(hash: u64, buckets: usize) -> usize {
    (hash % buckets as u64) as usize
}

/// Borrowing iterator over table entries in insertion order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slots: corral_seq::Iter<'a, Option<Entry<K, V>>>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.slots.find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.next_back() {
            if let Some(entry) = slot {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
        }
        None
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Owning iterator over table entries in insertion order.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    slots: corral_seq::IntoIter<Option<Entry<K, V>>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let entry = self.slots.find_map(|slot| slot)?;
        self.remaining -= 1;
        Some((entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        while let Some(slot) = self.slots.next_back() {
            if let Some(entry) = slot {
                self.remaining -= 1;
                return Some((entry.key, entry.value));
            }
        }
        None
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use corral_core::{ByHashable, FnContract};
    use corral_test_utils::CollidingKey;

    fn keys_of<C>(table: &HashTable<&'static str, i32, C>) -> Vec<&'static str> {
        table.keys().copied().collect()
    }

    #[test]
    fn put_then_get() {
        let mut table = HashTable::new();
        assert_eq!(table.put("a", 1), None);
        assert_eq!(table.get(&"a"), Ok(&1));
        assert_eq!(table.get(&"b"), Err(CollectionError::NotFound));
        assert_eq!(table.try_get(&"b"), None);
        assert!(table.has(&"a"));
    }

    #[test]
    fn update_keeps_position() {
        let mut table = HashTable::new();
        table.put("a", 1);
        table.put("b", 2);
        table.put("c", 3);
        assert_eq!(table.put("a", 10), Some(1));
        assert_eq!(keys_of(&table), vec!["a", "b", "c"]);
        assert_eq!(table.get(&"a"), Ok(&10));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn remove_then_reput_goes_to_end() {
        let mut table = HashTable::new();
        table.put("a", 1);
        table.put("b", 2);
        assert!(table.remove(&"a"));
        assert!(!table.remove(&"a"));
        assert_eq!(table.get(&"a"), Err(CollectionError::NotFound));
        table.put("a", 3);
        assert_eq!(keys_of(&table), vec!["b", "a"]);
    }

    #[test]
    fn buckets_double_past_load_factor() {
        let mut table = HashTable::new();
        for i in 0..6 {
            table.put(i, i);
        }
        assert_eq!(table.bucket_count(), 8);
        table.put(6, 6);
        assert_eq!(table.bucket_count(), 16);
        for i in 0..7 {
            assert_eq!(table.get(&i), Ok(&i));
        }
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn tombstones_are_compacted() {
        let mut table = HashTable::new();
        for i in 0..10 {
            table.put(i, ());
        }
        for i in 0..5 {
            table.remove(&i);
        }
        assert_eq!(table.tombstones(), 5);
        table.remove(&5);
        assert_eq!(table.tombstones(), 0);
        assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![6, 7, 8, 9]);
        assert!(table.has(&9));
        assert!(!table.has(&0));
    }

    #[test]
    fn colliding_keys_resolve_by_equality() {
        let mut table = HashTable::with_contract(ByHashable);
        for id in 0..20 {
            table.put(CollidingKey(id), id * 2);
        }
        assert_eq!(table.len(), 20);
        for id in 0..20 {
            assert_eq!(table.get(&CollidingKey(id)), Ok(&(id * 2)));
        }
        assert!(table.remove(&CollidingKey(7)));
        assert!(!table.has(&CollidingKey(7)));
        assert!(table.has(&CollidingKey(8)));
    }

    #[test]
    fn fn_contract_folds_case() {
        let contract = FnContract::new(
            |key: &String| {
                key.to_ascii_lowercase()
                    .bytes()
                    .fold(0u64, |h, b| h.wrapping_mul(31).wrapping_add(u64::from(b)))
            },
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        );
        let mut table = HashTable::with_contract(contract);
        table.put("Key".to_string(), 1);
        assert_eq!(table.put("KEY".to_string(), 2), Some(1));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&"key".to_string()), Ok(&2));
    }

    #[test]
    fn find_and_skip_follow_insertion_order() {
        let mut table = HashTable::new();
        table.put("x", 1);
        table.put("y", 2);
        table.put("z", 1);
        assert_eq!(table.find(&1), Some(&"x"));
        assert_eq!(table.find(&9), None);
        assert_eq!(table.skip(1), Ok((&"y", &2)));
        assert_eq!(
            table.skip(3),
            Err(CollectionError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn take_at_removes_by_position() {
        let mut table = HashTable::new();
        table.put("x", 1);
        table.put("y", 2);
        table.put("z", 3);
        table.remove(&"x");
        assert_eq!(table.take_at(1), Ok(("z", 3)));
        assert_eq!(keys_of(&table), vec!["y"]);
        assert!(table.take_at(1).is_err());
    }

    #[test]
    fn sorting_reorders_without_losing_entries() {
        let mut table = HashTable::new();
        table.put("b", 3);
        table.put("a", 2);
        table.put("gone", 0);
        table.put("c", 1);
        table.remove(&"gone");
        table.sort_by_value(|a, b| a.cmp(b));
        assert_eq!(keys_of(&table), vec!["c", "a", "b"]);
        table.sort_by_key(|a, b| a.cmp(b));
        assert_eq!(keys_of(&table), vec!["a", "b", "c"]);
        assert_eq!(table.get(&"c"), Ok(&1));
        table.put("d", 0);
        assert_eq!(table.get(&"d"), Ok(&0));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut table = HashTable::new();
        table.put(1, vec![1]);
        table.get_mut(&1).unwrap().push(2);
        assert_eq!(table.get(&1), Ok(&vec![1, 2]));
        assert!(table.get_mut(&2).is_none());
    }

    #[test]
    fn iterators_report_exact_length() {
        let mut table = HashTable::new();
        for i in 0..5 {
            table.put(i, i * i);
        }
        table.remove(&2);
        let mut it = table.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next_back(), Some((&4, &16)));
        assert_eq!(it.len(), 3);
        let owned: Vec<_> = table.into_iter().collect();
        assert_eq!(owned, vec![(0, 0), (1, 1), (3, 9), (4, 16)]);
    }

    #[test]
    fn clear_resets_buckets() {
        let mut table = HashTable::new();
        for i in 0..100 {
            table.put(i, i);
        }
        assert!(table.bucket_count() > 8);
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.bucket_count(), 8);
        assert_eq!(table.try_get(&1), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = TableConfig {
            load_factor: 2.0,
            ..TableConfig::new()
        };
        assert!(HashTable::<u8, u8>::with_config(config).is_err());
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use corral_test_utils::ModelTable;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_insertion_ordered_model(
                ops in prop::collection::vec((any::<bool>(), 0u8..32, any::<u16>()), 0..300),
            ) {
                let mut table = HashTable::new();
                let mut model = ModelTable::new();
                for (insert, key, value) in ops {
                    if insert {
                        prop_assert_eq!(table.put(key, value), model.put(key, value));
                    } else {
                        prop_assert_eq!(table.take(&key), model.remove(&key));
                    }
                    prop_assert_eq!(table.len(), model.len());
                }
                let got: Vec<_> = table.iter().collect();
                let expected: Vec<_> = model.pairs().collect();
                prop_assert_eq!(got, expected);
            }
        }
    }
}
