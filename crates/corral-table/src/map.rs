//! Map view over [`HashTable`].

use std::cmp::Ordering;
use std::fmt;

use corral_core::{
    Arrayable, Collection, CollectionError, KeyContract, Map, Sortable, Structural,
};
use corral_seq::Vector;

use crate::config::TableConfig;
use crate::set::HashSet;
use crate::table::{HashTable, IntoIter, Iter};

/// A hashed key → value map that enumerates in insertion order.
///
/// Algebra operations (`union`, `intersection`, `difference`,
/// `exclusive`) build a new map; neither operand is modified.
#[derive(Clone)]
pub struct HashMap<K, V, C = Structural> {
    table: HashTable<K, V, C>,
}

impl<K, V> HashMap<K, V, Structural> {
    /// An empty map using structural key equality.
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// An empty map with custom table sizing.
    pub fn with_config(config: TableConfig) -> Result<Self, CollectionError> {
        Ok(Self {
            table: HashTable::with_config(config)?,
        })
    }
}

impl<K, V, C> HashMap<K, V, C> {
    /// An empty map using `contract` for key hashing and equality.
    pub fn with_contract(contract: C) -> Self {
        Self {
            table: HashTable::with_contract(contract),
        }
    }

    /// An empty map with custom table sizing and key contract.
    pub fn with_config_and_contract(
        config: TableConfig,
        contract: C,
    ) -> Result<Self, CollectionError> {
        Ok(Self {
            table: HashTable::with_config_and_contract(config, contract)?,
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The backing table.
    pub fn table(&self) -> &HashTable<K, V, C> {
        &self.table
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.table.iter()
    }

    /// The first entry in insertion order. Underflow if empty.
    pub fn first(&self) -> Result<(&K, &V), CollectionError> {
        self.table.iter().next().ok_or(CollectionError::Underflow)
    }

    /// The last entry in insertion order. Underflow if empty.
    pub fn last(&self) -> Result<(&K, &V), CollectionError> {
        self.table.iter().next_back().ok_or(CollectionError::Underflow)
    }

    /// The entry at `position` in insertion order.
    pub fn skip(&self, position: usize) -> Result<(&K, &V), CollectionError> {
        self.table.skip(position)
    }

    /// First key whose value equals `value`.
    pub fn find(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        self.table.find(value)
    }

    /// Fold entries in insertion order into an accumulator.
    pub fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.iter().fold(initial, |acc, (key, value)| f(acc, key, value))
    }

    /// Reorder entries by key.
    pub fn ksort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        self.table.sort_by_key(compare);
    }

    /// Reorder entries by the natural order of their keys.
    pub fn ksort(&mut self)
    where
        K: Ord,
    {
        self.table.sort_by_key(K::cmp);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K, V, C: KeyContract<K>> HashMap<K, V, C> {
    /// The value for `key`. Not-found if absent.
    pub fn get(&self, key: &K) -> Result<&V, CollectionError> {
        self.table.get(key)
    }

    /// The value for `key`, if present.
    pub fn try_get(&self, key: &K) -> Option<&V> {
        self.table.try_get(key)
    }

    /// Mutable access to the value for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.get_mut(key)
    }

    /// Whether `key` has an entry.
    pub fn has(&self, key: &K) -> bool {
        self.table.has(key)
    }

    /// Insert or update, returning the replaced value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.table.put(key, value)
    }

    /// Put every pair from `pairs`, in order.
    pub fn put_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            self.table.put(key, value);
        }
    }

    /// Remove the entry for `key`. Returns whether one existed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.table.remove(key)
    }

    /// Remove the entry for `key`, returning its value.
    pub fn take(&mut self, key: &K) -> Option<V> {
        self.table.take(key)
    }

    /// Remove every key in `keys`. Absent keys are ignored.
    pub fn remove_all<'k, I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
    {
        for key in keys {
            self.table.remove(key);
        }
    }
}

impl<K: Clone, V: Clone, C: KeyContract<K> + Clone> HashMap<K, V, C> {
    /// A new map of the entries for which `predicate` holds.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        let mut out = Self {
            table: self.table.empty_like(),
        };
        for (key, value) in self.iter().filter(|&(k, v)| predicate(k, v)) {
            out.put(key.clone(), value.clone());
        }
        out
    }

    /// A new map with `f` applied to every value. Keys and order are kept.
    pub fn map<U, F>(&self, mut f: F) -> HashMap<K, U, C>
    where
        F: FnMut(&K, &V) -> U,
    {
        let mut out = HashMap {
            table: HashTable::from_parts(self.table.config().clone(), self.table.contract().clone()),
        };
        for (key, value) in self.iter() {
            out.put(key.clone(), f(key, value));
        }
        out
    }

    /// Every pair of `self`, then every pair of `other`; `other`'s values
    /// win on shared keys.
    pub fn union<C2: KeyContract<K>>(&self, other: &HashMap<K, V, C2>) -> Self {
        let mut out = self.clone();
        out.put_all(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }

    /// Pairs of `self` whose keys are also in `other`. Values come from
    /// `self`.
    pub fn intersection<C2: KeyContract<K>>(&self, other: &HashMap<K, V, C2>) -> Self {
        self.filter(|key, _| other.has(key))
    }

    /// Pairs of `self` whose keys are not in `other`.
    pub fn difference<C2: KeyContract<K>>(&self, other: &HashMap<K, V, C2>) -> Self {
        let mut out = self.clone();
        out.remove_all(other.iter().map(|(key, _)| key));
        out
    }

    /// Pairs whose keys are in exactly one of the two maps.
    pub fn exclusive<C2: KeyContract<K>>(&self, other: &HashMap<K, V, C2>) -> Self {
        let mut out = self.difference(other);
        for (key, value) in other.iter() {
            if !self.has(key) {
                out.put(key.clone(), value.clone());
            }
        }
        out
    }
}

impl<K, V> Default for HashMap<K, V, Structural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for HashMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Maps are equal when they hold the same keys with equal values,
/// regardless of enumeration order.
impl<K, V: PartialEq, C: KeyContract<K>> PartialEq for HashMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.try_get(key) == Some(value))
    }
}

impl<K, V: Eq, C: KeyContract<K>> Eq for HashMap<K, V, C> {}

impl<K, V, C: KeyContract<K>> Extend<(K, V)> for HashMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K, V, C: KeyContract<K> + Default> FromIterator<(K, V)> for HashMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::with_contract(C::default());
        map.put_all(iter);
        map
    }
}

impl<K, V, C> IntoIterator for HashMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        self.table.into_iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a HashMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C> Collection for HashMap<K, V, C> {
    fn count(&self) -> usize {
        self.table.len()
    }

    fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K: Clone, V: Clone, C> Arrayable for HashMap<K, V, C> {
    type Item = (K, V);

    fn to_vec(&self) -> Vec<(K, V)> {
        self.table.to_vec()
    }
}

/// Sorting a map reorders its entries by value.
impl<K, V, C> Sortable<V> for HashMap<K, V, C> {
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.table.sort_by_value(compare);
    }
}

impl<K, V, C> Map<K, V> for HashMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: KeyContract<K> + Clone,
{
    type Keys = HashSet<K, C>;
    type Values = Vector<V>;

    fn get(&self, key: &K) -> Result<&V, CollectionError> {
        self.table.get(key)
    }

    fn try_get(&self, key: &K) -> Option<&V> {
        self.table.try_get(key)
    }

    fn has(&self, key: &K) -> bool {
        self.table.has(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.table.put(key, value)
    }

    fn remove(&mut self, key: &K) -> bool {
        self.table.remove(key)
    }

    fn find(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        self.table.find(value)
    }

    fn keys(&self) -> HashSet<K, C> {
        let mut keys = HashSet::with_contract(self.table.contract().clone());
        keys.add_all(self.table.keys().cloned());
        keys
    }

    fn values(&self) -> Vector<V> {
        self.table.values().cloned().collect()
    }

    fn pairs<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)>
    where
        K: 'a,
        V: 'a,
    {
        self.table.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_of(pairs: &[(&'static str, i32)]) -> HashMap<&'static str, i32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn keys_and_values() {
        let mut map = map_of(&[("a", 1)]);
        map.put("b", 2);
        let keys = Map::keys(&map);
        assert_eq!(keys.to_vec(), vec!["a", "b"]);
        assert_eq!(Map::values(&map).to_vec(), vec![1, 2]);
    }

    #[test]
    fn intersection_keeps_own_values() {
        let map = map_of(&[("a", 1), ("b", 2)]);
        let other = map_of(&[("b", 3), ("c", 4)]);
        assert_eq!(map.intersection(&other).to_vec(), vec![("b", 2)]);
    }

    #[test]
    fn union_prefers_other_values() {
        let map = map_of(&[("a", 1), ("b", 2)]);
        let other = map_of(&[("b", 3), ("c", 4)]);
        assert_eq!(
            map.union(&other).to_vec(),
            vec![("a", 1), ("b", 3), ("c", 4)]
        );
        assert_eq!(map.get(&"b"), Ok(&2));
    }

    #[test]
    fn difference_and_exclusive() {
        let map = map_of(&[("a", 1), ("b", 2)]);
        let other = map_of(&[("b", 3), ("c", 4)]);
        assert_eq!(map.difference(&other).to_vec(), vec![("a", 1)]);
        assert_eq!(map.exclusive(&other).to_vec(), vec![("a", 1), ("c", 4)]);
    }

    #[test]
    fn first_last_and_underflow() {
        let map = map_of(&[("x", 1), ("y", 2)]);
        assert_eq!(map.first(), Ok((&"x", &1)));
        assert_eq!(map.last(), Ok((&"y", &2)));
        let empty: HashMap<u8, u8> = HashMap::new();
        assert_eq!(empty.first(), Err(CollectionError::Underflow));
        assert_eq!(empty.last(), Err(CollectionError::Underflow));
    }

    #[test]
    fn filter_map_reduce() {
        let map = map_of(&[("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(map.filter(|_, v| v % 2 == 1).to_vec(), vec![("a", 1), ("c", 3)]);
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled.get(&"c"), Ok(&6));
        assert_eq!(map.reduce(0, |acc, _, v| acc + v), 6);
    }

    #[test]
    fn put_all_and_remove_all() {
        let mut map = HashMap::new();
        map.put_all([(1, 'a'), (2, 'b'), (3, 'c')]);
        map.remove_all(&[1, 3, 9]);
        assert_eq!(map.to_vec(), vec![(2, 'b')]);
    }

    #[test]
    fn equality_ignores_order() {
        let a = map_of(&[("a", 1), ("b", 2)]);
        let b = map_of(&[("b", 2), ("a", 1)]);
        let c = map_of(&[("a", 1), ("b", 3)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn sort_by_value_and_ksort() {
        let mut map = map_of(&[("b", 1), ("c", 3), ("a", 2)]);
        Sortable::sort(&mut map);
        assert_eq!(map.to_vec(), vec![("b", 1), ("a", 2), ("c", 3)]);
        map.ksort();
        assert_eq!(map.to_vec(), vec![("a", 2), ("b", 1), ("c", 3)]);
    }

    #[test]
    fn config_and_contract_combine() {
        use corral_core::FnContract;

        let folded = FnContract::new(
            |k: &String| k.to_ascii_lowercase().bytes().map(u64::from).sum::<u64>(),
            |a: &String, b: &String| a.eq_ignore_ascii_case(b),
        );
        let config = TableConfig {
            initial_buckets: 2,
            ..TableConfig::new()
        };
        let mut map = HashMap::with_config_and_contract(config, folded).unwrap();
        map.put("Key".to_string(), 1);
        map.put("KEY".to_string(), 2);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"key".to_string()), Ok(&2));
        assert_eq!(map.table().config().initial_buckets, 2);

        let bad = TableConfig {
            load_factor: 0.0,
            ..TableConfig::new()
        };
        assert!(HashMap::<String, i32, _>::with_config_and_contract(bad, folded).is_err());
    }

    #[test]
    fn pairs_through_the_map_trait() {
        fn collect_pairs<M: Map<&'static str, i32>>(map: &M) -> Vec<(&'static str, i32)> {
            map.pairs().map(|(k, v)| (*k, *v)).collect()
        }
        let map = map_of(&[("x", 1), ("y", 2)]);
        assert_eq!(collect_pairs(&map), vec![("x", 1), ("y", 2)]);
    }

    #[test]
    fn map_trait_find() {
        let map = map_of(&[("a", 1), ("b", 2)]);
        assert_eq!(Map::find(&map, &2), Some(&"b"));
        assert_eq!(Map::get(&map, &"z"), Err(CollectionError::NotFound));
    }
}
