//! # Set Trait Hierarchy
//!
//! This module defines the trait seam for the capped-set types, separating
//! the non-mutating surface from the mutating, eviction-aware surface.
//!
//! ## Architecture
//!
//! ```text
//!          ┌─────────────────────────────────────────┐
//!          │           ReadOnlySet<K, V>             │
//!          │                                         │
//!          │  contains(&, &K) → bool                 │
//!          │  len(&) → usize                         │
//!          │  is_empty(&) → bool                     │
//!          │  capacity(&) → usize                    │
//!          └──────────────────┬──────────────────────┘
//!                             │
//!                             ▼
//!          ┌─────────────────────────────────────────┐
//!          │         MinEvictingSet<K, V>            │
//!          │                                         │
//!          │  insert(&mut, K, V) → Option<(K, V)>    │
//!          │  update(&mut, &K, V) → Result<(K, V)>   │
//!          │  remove(&mut, &K) → Option<(K, V)>      │
//!          │  lowest(&) → Option<(K, V)>             │
//!          └─────────────────────────────────────────┘
//! ```
//!
//! ## Trait Summary
//!
//! | Trait            | Extends       | Purpose                             |
//! |------------------|---------------|-------------------------------------|
//! | `ReadOnlySet`    | -             | Non-mutating set observations       |
//! | `MinEvictingSet` | `ReadOnlySet` | Mutation with lowest-value eviction |
//!
//! Every mutating operation of `MinEvictingSet` reports the *floor* of the
//! set after the operation: the (key, value) pair currently holding the
//! smallest value, ties broken toward the earliest position. `None` means
//! the set ended up empty.
//!
//! ## Example Usage
//!
//! ```
//! use cappedset::set::CappedSet;
//! use cappedset::traits::{MinEvictingSet, ReadOnlySet};
//!
//! fn drain_below<S: MinEvictingSet<u64, u64>>(set: &mut S, threshold: u64) {
//!     while let Some((key, value)) = set.lowest() {
//!         if value >= threshold {
//!             break;
//!         }
//!         set.remove(&key);
//!     }
//! }
//!
//! let mut set = CappedSet::new(8);
//! set.insert(1, 5);
//! set.insert(2, 50);
//! drain_below(&mut set, 10);
//! assert_eq!(set.len(), 1);
//! ```

use crate::error::SetError;

/// Non-mutating observations common to all set types.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash + Clone`)
/// - `V`: Value type (implementations typically require `Copy + Ord`)
pub trait ReadOnlySet<K, V> {
    /// Checks if a key exists. Never mutates the set.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed maximum number of entries.
    fn capacity(&self) -> usize;
}

/// Mutating operations for sets that evict their lowest-value entry.
///
/// All three mutating operations return the floor of the set *after* the
/// operation, so callers always learn the current eviction candidate.
pub trait MinEvictingSet<K, V>: ReadOnlySet<K, V> {
    /// Inserts a key-value pair, evicting the current floor first when the
    /// set is full. Returns the floor of the resulting set.
    fn insert(&mut self, key: K, value: V) -> Option<(K, V)>;

    /// Overwrites the value of an existing key in place.
    ///
    /// Fails with [`SetError::KeyNotFound`] when the key is absent, leaving
    /// the set unchanged. On success returns the floor, which the update
    /// itself may have lowered.
    fn update(&mut self, key: &K, value: V) -> Result<(K, V), SetError>;

    /// Removes a key if present; removing an absent key is a no-op.
    /// Returns the floor of the resulting set.
    fn remove(&mut self, key: &K) -> Option<(K, V)>;

    /// Returns the current floor without mutating the set.
    fn lowest(&self) -> Option<(K, V)>;
}
