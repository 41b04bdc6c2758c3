//! # Capped Set Implementation
//!
//! A fixed-capacity associative collection that maps unique keys to numeric
//! values and evicts the entry holding the smallest value whenever an
//! insertion into a full set occurs.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────────┐
//!   │                        CappedSet<K, V>                            │
//!   │                                                                   │
//!   │   ┌───────────────────────────────────────────────────────────┐   │
//!   │   │  entries: IndexedPairs<K, V>                              │   │
//!   │   │                                                           │   │
//!   │   │  packed sequence            key → position index          │   │
//!   │   │  ┌─────┬─────┬───────┐      ┌─────────┬──────────┐        │   │
//!   │   │  │ pos │ key │ value │      │   key   │ position │        │   │
//!   │   │  ├─────┼─────┼───────┤      ├─────────┼──────────┤        │   │
//!   │   │  │  0  │  A  │  80   │      │    A    │    0     │        │   │
//!   │   │  │  1  │  B  │  30   │      │    B    │    1     │        │   │
//!   │   │  │  2  │  C  │  10   │      │    C    │    2     │        │   │
//!   │   │  └─────┴─────┴───────┘      └─────────┴──────────┘        │   │
//!   │   └───────────────────────────────────────────────────────────┘   │
//!   │                                                                   │
//!   │   capacity: usize   (fixed at construction, never exceeded)       │
//!   │   counters: OpCounters                                            │
//!   └───────────────────────────────────────────────────────────────────┘
//!
//!   Insert Flow (new key)
//!   ─────────────────────
//!     insert(D, 20):
//!       1. len() == capacity?          → yes: evict current floor first
//!       2. scan entries for floor      → (C, 10) at position 2
//!       3. swap_remove(2)              → tail entry fills the hole
//!       4. push (D, 20) at the tail
//!       5. return new floor            → scan again over the result
//! ```
//!
//! ## Core Operations
//!
//! | Method             | Complexity | Description                            |
//! |--------------------|------------|----------------------------------------|
//! | `new(capacity)`    | O(1)       | Create set; panics on zero capacity    |
//! | `try_new(capacity)`| O(1)       | Fallible constructor                   |
//! | `insert(k, v)`     | O(n)       | Insert, evicting the floor when full   |
//! | `update(&k, v)`    | O(n)       | Overwrite value of an existing key     |
//! | `remove(&k)`       | O(n)       | Remove entry; absent key is a no-op    |
//! | `value_of(&k)`     | O(1)       | Value for key, `KeyNotFound` if absent |
//! | `get(&k)`          | O(1)       | Value reference, `None` if absent      |
//! | `lowest()`         | O(n)       | Current floor pair                     |
//! | `element_at(pos)`  | O(1)       | Pair at a position                     |
//! | `len()`            | O(1)       | Current number of entries              |
//!
//! The O(n) cost on every mutating operation is the floor scan over the
//! packed sequence. Capacity is a small fixed bound, not a scaling
//! dimension, so the scan stays cheap and — unlike a heap — keeps the
//! tie-breaking rule (earliest-positioned among equal minimums) for free.
//!
//! ## Eviction Semantics
//!
//! Inserting a *new* key into a full set first evicts the entry holding the
//! smallest value among the pre-insert contents, then appends the new entry.
//! The new entry therefore always survives its own insertion, even when its
//! value is below the evicted floor. Inserting a key that already exists
//! overwrites its value in place (no eviction, size unchanged), preserving
//! key uniqueness.
//!
//! Every mutating operation returns the floor of the resulting set, so the
//! caller always learns the current eviction candidate. `None` means the set
//! is empty.
//!
//! ## Positional Order
//!
//! `element_at` positions follow insertion order until the first removal.
//! Removal (including eviction) is swap-based: the tail entry fills the
//! vacated slot, so positions of entries that existed before a removal may
//! change. Callers must not rely on positional stability across removals.
//!
//! ## Example Usage
//!
//! ```
//! use cappedset::set::CappedSet;
//!
//! let mut set: CappedSet<&str, u64> = CappedSet::new(2);
//!
//! set.insert("a", 80);
//! let floor = set.insert("b", 30);
//! assert_eq!(floor, Some(("b", 30)));
//!
//! // Full: inserting evicts the floor ("b", 30), then admits ("c", 10).
//! let floor = set.insert("c", 10);
//! assert_eq!(floor, Some(("c", 10)));
//! assert!(!set.contains(&"b"));
//! assert_eq!(set.len(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! `CappedSet` is **not** thread-safe and deliberately carries no internal
//! locking: it is an owned value mutated through `&mut self` by exactly one
//! caller at a time. Every operation runs to completion, leaving the
//! structural invariants intact on both sides.
//!
//! ## Implementation Notes
//!
//! - Backed by [`IndexedPairs`]: packed `Vec` of entries plus an `FxHashMap`
//!   key → position index.
//! - Floor scan uses strict `<`, so the first entry in sequence order wins
//!   ties among equal minimums.
//! - Lookup hit/miss counters use `Cell` so read paths stay `&self`.

use std::cell::Cell;
use std::hash::Hash;

use crate::ds::IndexedPairs;
use crate::error::{ConfigError, InvariantError, SetError};
use crate::traits::{MinEvictingSet, ReadOnlySet};

/// Point-in-time view of a set's operation counters.
///
/// `len` and `capacity` are gauges captured at snapshot time; the remaining
/// fields are monotonic counters since construction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SetMetrics {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub updates: u64,
    pub removes: u64,
    pub evictions: u64,
    pub len: usize,
    pub capacity: usize,
}

/// Operation counters backing [`SetMetrics`].
///
/// Hit/miss counters live in `Cell`s because lookups take `&self`; all
/// access is externally serialized by the single-owner execution model.
#[derive(Debug, Default)]
struct OpCounters {
    hits: Cell<u64>,
    misses: Cell<u64>,
    inserts: u64,
    updates: u64,
    removes: u64,
    evictions: u64,
}

/// Fixed-capacity key/value set with lowest-value eviction.
///
/// See the module-level documentation for semantics and layout.
#[derive(Debug)]
pub struct CappedSet<K, V> {
    capacity: usize,
    entries: IndexedPairs<K, V>,
    counters: OpCounters,
}

impl<K, V> CappedSet<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + Ord,
{
    /// Creates a new `CappedSet` holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// caller-supplied capacities.
    ///
    /// # Examples
    /// ```
    /// use cappedset::set::CappedSet;
    ///
    /// let set: CappedSet<u64, u64> = CappedSet::new(5);
    /// assert_eq!(set.capacity(), 5);
    /// assert_eq!(set.len(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "set capacity must be greater than zero");
        Self {
            capacity,
            entries: IndexedPairs::with_capacity(capacity),
            counters: OpCounters::default(),
        }
    }

    /// Fallible constructor for user-configurable capacities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("set capacity must be greater than zero"));
        }
        Ok(Self::new(capacity))
    }

    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks if a key exists. Does not touch hit/miss counters.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// Inserts a key-value pair, returning the floor of the resulting set.
    ///
    /// A new key is appended at the tail; if the set was full, the entry
    /// holding the smallest pre-insert value (earliest position wins ties)
    /// is evicted first, so the new entry always survives. An existing key
    /// has its value overwritten in place instead, with no eviction.
    ///
    /// # Examples
    /// ```
    /// use cappedset::set::CappedSet;
    ///
    /// let mut set: CappedSet<&str, u64> = CappedSet::new(5);
    /// set.insert("a", 80);
    /// set.insert("b", 30);
    /// assert_eq!(set.insert("c", 50), Some(("b", 30)));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.entries.value_mut(&key) {
            // Duplicate key: collapse to an in-place update to keep keys
            // unique.
            *slot = value;
            self.counters.updates += 1;
            return self.lowest();
        }

        if self.entries.len() == self.capacity {
            if let Some(position) = self.floor_position() {
                self.entries.swap_remove(position);
                self.counters.evictions += 1;
            }
        }

        self.entries.push(key, value);
        self.counters.inserts += 1;
        self.lowest()
    }

    /// Overwrites the value of an existing key in place.
    ///
    /// No eviction occurs and the entry count is unchanged. The returned
    /// floor reflects the update, which may itself have created a new
    /// minimum.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::KeyNotFound`] if the key is absent; the set is
    /// left untouched.
    pub fn update(&mut self, key: &K, value: V) -> Result<(K, V), SetError> {
        let slot = self.entries.value_mut(key).ok_or(SetError::KeyNotFound)?;
        *slot = value;
        self.counters.updates += 1;
        // The key just updated is present, so the set cannot be empty.
        Ok(self
            .lowest()
            .expect("set is non-empty after a successful update"))
    }

    /// Removes a key, returning the floor of the resulting set.
    ///
    /// Removing an absent key is deliberately a successful no-op, unlike
    /// [`update`](Self::update). Removal is swap-based, so positions of
    /// remaining entries may change. `None` means the set is now empty.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        if self.entries.remove_key(key).is_some() {
            self.counters.removes += 1;
        }
        self.lowest()
    }

    /// Returns the value associated with a key.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::KeyNotFound`] if the key is absent.
    pub fn value_of(&self, key: &K) -> Result<V, SetError> {
        match self.entries.value_of(key) {
            Some(value) => {
                self.counters.hits.set(self.counters.hits.get() + 1);
                Ok(*value)
            },
            None => {
                self.counters.misses.set(self.counters.misses.get() + 1);
                Err(SetError::KeyNotFound)
            },
        }
    }

    /// Returns a reference to the value for a key, `None` if absent.
    pub fn get(&self, key: &K) -> Option<&V> {
        let value = self.entries.value_of(key);
        match value {
            Some(_) => self.counters.hits.set(self.counters.hits.get() + 1),
            None => self.counters.misses.set(self.counters.misses.get() + 1),
        }
        value
    }

    /// Returns the floor: the pair holding the smallest value, ties broken
    /// toward the earliest position. `None` when the set is empty.
    pub fn lowest(&self) -> Option<(K, V)> {
        let position = self.floor_position()?;
        let (key, value) = self.entries.get(position)?;
        Some((key.clone(), *value))
    }

    /// Returns the pair at a zero-based position in the current sequence.
    ///
    /// Positions follow insertion order only until the first removal; see
    /// the module documentation.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::PositionOutOfRange`] if `position >= len()`.
    pub fn element_at(&self, position: usize) -> Result<(K, V), SetError> {
        self.entries
            .get(position)
            .map(|(key, value)| (key.clone(), *value))
            .ok_or(SetError::PositionOutOfRange {
                position,
                len: self.entries.len(),
            })
    }

    /// Iterates over (key, value) pairs in current positional order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Removes all entries. Capacity and counters are unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of the operation counters.
    pub fn metrics(&self) -> SetMetrics {
        SetMetrics {
            hits: self.counters.hits.get(),
            misses: self.counters.misses.get(),
            inserts: self.counters.inserts,
            updates: self.counters.updates,
            removes: self.counters.removes,
            evictions: self.counters.evictions,
            len: self.entries.len(),
            capacity: self.capacity,
        }
    }

    /// Verifies the structural invariants: the entry/index agreement of the
    /// backing storage and the capacity bound.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.entries.check_invariants()?;
        if self.entries.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "length {} exceeds capacity {}",
                self.entries.len(),
                self.capacity
            )));
        }
        Ok(())
    }

    /// Position of the floor entry. Linear scan with strict `<` so the
    /// earliest-positioned entry wins ties.
    fn floor_position(&self) -> Option<usize> {
        let mut best: Option<(usize, V)> = None;
        for (position, (_, value)) in self.entries.iter().enumerate() {
            match best {
                Some((_, floor)) if *value >= floor => {},
                _ => best = Some((position, *value)),
            }
        }
        best.map(|(position, _)| position)
    }
}

impl<K, V> ReadOnlySet<K, V> for CappedSet<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + Ord,
{
    fn contains(&self, key: &K) -> bool {
        CappedSet::contains(self, key)
    }

    fn len(&self) -> usize {
        CappedSet::len(self)
    }

    fn capacity(&self) -> usize {
        CappedSet::capacity(self)
    }
}

impl<K, V> MinEvictingSet<K, V> for CappedSet<K, V>
where
    K: Eq + Hash + Clone,
    V: Copy + Ord,
{
    fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        CappedSet::insert(self, key, value)
    }

    fn update(&mut self, key: &K, value: V) -> Result<(K, V), SetError> {
        CappedSet::update(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<(K, V)> {
        CappedSet::remove(self, key)
    }

    fn lowest(&self) -> Option<(K, V)> {
        CappedSet::lowest(self)
    }
}

// ==============================================
// CAPPED SET TESTS
// ==============================================
