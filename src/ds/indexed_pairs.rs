use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::InvariantError;

/// A single key/value entry in the packed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// Packed sequence of key/value entries plus a key -> position index.
///
/// Positions are dense: entries occupy `0..len()` with no holes. Removal is
/// swap-based, so the entry previously at the tail takes over the vacated
/// position and positional order is only insertion order until the first
/// removal.
#[derive(Debug)]
pub struct IndexedPairs<K, V> {
    entries: Vec<Entry<K, V>>,
    index: FxHashMap<K, usize>,
}

impl<K, V> IndexedPairs<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current position of `key`, if present. Not stable across removals.
    pub fn position_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn get(&self, position: usize) -> Option<(&K, &V)> {
        self.entries
            .get(position)
            .map(|entry| (&entry.key, &entry.value))
    }

    pub fn value_of(&self, key: &K) -> Option<&V> {
        self.position_of(key)
            .and_then(|position| self.entries.get(position))
            .map(|entry| &entry.value)
    }

    pub fn value_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = self.position_of(key)?;
        self.entries.get_mut(position).map(|entry| &mut entry.value)
    }

    /// Appends a new entry at the tail and indexes it.
    ///
    /// The caller must have checked that `key` is not already present;
    /// pushing a duplicate would leave a stale index slot behind.
    pub fn push(&mut self, key: K, value: V) -> usize {
        debug_assert!(!self.index.contains_key(&key), "push of duplicate key");
        let position = self.entries.len();
        self.index.insert(key.clone(), position);
        self.entries.push(Entry { key, value });
        position
    }

    /// Removes the entry at `position` in O(1) by swapping in the tail entry.
    pub fn swap_remove(&mut self, position: usize) -> Option<Entry<K, V>> {
        if position >= self.entries.len() {
            return None;
        }
        let entry = self.entries.swap_remove(position);
        self.index.remove(&entry.key);
        // If a tail entry was swapped into the hole, re-point its index slot.
        if let Some(moved) = self.entries.get(position) {
            self.index.insert(moved.key.clone(), position);
        }
        Some(entry)
    }

    pub fn remove_key(&mut self, key: &K) -> Option<Entry<K, V>> {
        let position = self.position_of(key)?;
        self.swap_remove(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|entry| (&entry.key, &entry.value))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Verifies that the index and the packed sequence agree.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.entries.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "length mismatch: {} entries, {} index slots",
                self.entries.len(),
                self.index.len()
            )));
        }
        for (key, &position) in &self.index {
            match self.entries.get(position) {
                Some(entry) if entry.key == *key => {},
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "index slot for position {position} points at a different key"
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index position {position} is out of bounds"
                    )));
                },
            }
        }
        Ok(())
    }
}
