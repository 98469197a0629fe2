//! Ordered grouping collections
//!
//! `GroupedMap` is an insertion-ordered map: keys keep the position in which
//! they were first seen, which gives grouped listings and statistics a
//! deterministic display order independent of hashing.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Map whose iteration order is the order in which keys were first inserted
#[derive(Debug, Clone)]
pub struct GroupedMap<K, V> {
    /// Entries in first-seen key order
    entries: Vec<(K, V)>,
    /// Position of each key in `entries`
    index: FxHashMap<K, usize>,
}

impl<K, V> GroupedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create a new empty map
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Get the value for `key`, inserting `default()` at the end if it is new
    pub fn entry_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let position = if let Some(&position) = self.index.get(&key) {
            position
        } else {
            let position = self.entries.len();
            self.index.insert(key.clone(), position);
            self.entries.push((key, default()));
            position
        };
        &mut self.entries[position].1
    }

    /// Insert a value, returning the previous one
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Get the value stored for a key
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        Some(&self.entries[position].1)
    }

    /// Get a mutable reference to the value stored for a key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index.get(key)?;
        Some(&mut self.entries[position].1)
    }

    /// Check whether a key is present
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Transform every value, keeping keys and order
    pub fn map_values<U, F>(self, mut f: F) -> GroupedMap<K, U>
    where
        F: FnMut(&K, V) -> U,
    {
        let entries: Vec<(K, U)> = self
            .entries
            .into_iter()
            .map(|(key, value)| {
                let mapped = f(&key, value);
                (key, mapped)
            })
            .collect();
        GroupedMap {
            entries,
            index: self.index,
        }
    }

    /// Transform every value with a fallible function, stopping at the first error
    pub fn try_map_values<U, E, F>(self, mut f: F) -> Result<GroupedMap<K, U>, E>
    where
        F: FnMut(&K, V) -> Result<U, E>,
    {
        let mut entries = Vec::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            let mapped = f(&key, value)?;
            entries.push((key, mapped));
        }
        Ok(GroupedMap {
            entries,
            index: self.index,
        })
    }
}

impl<K, V> GroupedMap<K, V> {
    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Values in first-seen key order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Entries in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K, V> Default for GroupedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for GroupedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for GroupedMap<K, V> {}

impl<K, V> FromIterator<(K, V)> for GroupedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V> IntoIterator for GroupedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a GroupedMap<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Partition items by a key function, preserving first-seen key order and the
/// input order of items inside each group
pub fn group_by<T, K, F>(items: &[T], key_fn: F) -> GroupedMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut groups = GroupedMap::new();
    for item in items {
        groups
            .entry_or_insert_with(key_fn(item), Vec::new)
            .push(item.clone());
    }
    groups
}
