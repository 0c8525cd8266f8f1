//! Generic grouping of records by a key.
//!
//! Groups come out in the order their key was first seen, and each group
//! keeps its items in input order. Nothing is sorted.

use std::collections::HashMap;
use std::hash::Hash;


/// An insertion-ordered mapping from key to the items sharing it.
#[derive(Debug, Clone)]
pub struct Groups<K, T> {
    entries: Vec<(K, Vec<T>)>,
    index: HashMap<K, usize>,
}

impl<K, T> Groups<K, T>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, key: K, item: T) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1.push(item);
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, vec![item]));
        }
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items grouped under `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// `(key, items)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.entries
            .iter()
            .map(|(key, items)| (key, items.as_slice()))
    }

    /// Consumes the mapping into its ordered entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<(K, Vec<T>)> {
        self.entries
    }
}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Groups `items` by the value `key` extracts from each one.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Groups<K, T>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut groups = Groups::new();
    for item in items {
        groups.push(key(&item), item);
    }
    groups
}

/// Groups `items` by an optional key.
///
/// With no key, returns exactly one group keyed `None` holding every item
/// (even when `items` is empty). With a key, every group is keyed `Some`.
pub fn group<T, K, F>(items: impl IntoIterator<Item = T>, key: Option<F>) -> Groups<Option<K>, T>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    match key {
        None => {
            let mut groups = Groups::new();
            groups.index.insert(None, 0);
            groups.entries.push((None, items.into_iter().collect()));
            groups
        }
        Some(mut key) => group_by(items, |item| Some(key(item))),
    }
}
