//! Reference model for differential testing of hashed maps.

use std::hash::Hash;

use indexmap::IndexMap;

/// An insertion-ordered map with the semantics the hashed structures must
/// reproduce.
///
/// Updating an existing key keeps its position; removing a key closes the
/// gap, preserving the relative order of the rest.
#[derive(Clone, Debug)]
pub struct ModelTable<K, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> ModelTable<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or update, returning the replaced value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at enumeration position `index`.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get_index(index)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> Default for ModelTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
