// ==============================================
// CAPPED SET INVARIANT TESTS (integration)
// ==============================================
//
// End-to-end scenarios exercised through the public API only: the capacity
// bound, key uniqueness, remove idempotence, and the eviction/floor
// reporting contract of every mutating operation.

use cappedset::prelude::*;

// Fixture mirroring the canonical deployment scenario: capacity 5, four
// entries with values {80, 30, 50, 10}.
fn seeded() -> CappedSet<&'static str, u64> {
    let mut set = CappedSet::new(5);
    set.insert("alpha", 80);
    set.insert("bravo", 30);
    set.insert("charlie", 50);
    set.insert("delta", 10);
    set
}

// ==============================================
// Construction
// ==============================================

#[test]
fn seeded_set_has_four_entries_and_fixed_capacity() {
    let set = seeded();
    assert_eq!(set.capacity(), 5);
    assert_eq!(set.len(), 4);
    assert_eq!(set.lowest(), Some(("delta", 10)));
}

#[test]
fn zero_capacity_is_rejected_at_construction() {
    assert!(CappedSet::<u64, u64>::try_new(0).is_err());
}

// ==============================================
// Insert and Eviction
// ==============================================

#[test]
fn fifth_insert_fits_without_eviction() {
    let mut set = seeded();
    let floor = set.insert("echo", 20);

    assert_eq!(floor, Some(("delta", 10)));
    assert_eq!(set.len(), 5);
    assert_eq!(set.metrics().evictions, 0);
}

#[test]
fn sixth_insert_evicts_the_previous_floor() {
    let mut set = seeded();
    set.insert("echo", 20);

    let floor = set.insert("foxtrot", 1);

    assert_eq!(floor, Some(("foxtrot", 1)));
    assert_eq!(set.len(), 5);
    assert!(!set.contains(&"delta"), "previous floor must be evicted");
    assert!(set.contains(&"foxtrot"), "new entry must survive insertion");
    assert_eq!(set.lowest(), Some(("foxtrot", 1)));
    assert_eq!(set.metrics().evictions, 1);
}

#[test]
fn eviction_removes_exactly_one_entry_per_overflowing_insert() {
    let mut set: CappedSet<u64, u64> = CappedSet::new(3);
    for key in 0..10u64 {
        set.insert(key, 100 + key);
        assert!(set.len() <= 3);
        set.check_invariants().unwrap();
    }
    // Values grow monotonically, so the survivors are the last three keys.
    assert!(set.contains(&7) && set.contains(&8) && set.contains(&9));
    assert_eq!(set.metrics().evictions, 7);
}

#[test]
fn returned_floor_is_the_true_minimum_of_the_result() {
    let mut set: CappedSet<u64, u64> = CappedSet::new(4);
    let mut floor = None;
    for key in 0..50u64 {
        floor = set.insert(key, (key * 31) % 17);
        let scanned = set
            .iter()
            .map(|(k, v)| (*k, *v))
            .min_by_key(|&(_, v)| v);
        assert_eq!(floor, scanned);
    }
    assert!(floor.is_some());
}

// ==============================================
// Key Uniqueness
// ==============================================

#[test]
fn enumerated_keys_are_unique_after_churn() {
    let mut set: CappedSet<u64, u64> = CappedSet::new(6);
    for i in 0..120u64 {
        set.insert(i % 10, i);
        if i % 4 == 0 {
            set.remove(&(i % 7));
        }

        let mut keys: Vec<u64> = set.iter().map(|(k, _)| *k).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), set.len(), "duplicate key in enumeration");
        set.check_invariants().unwrap();
    }
}

// ==============================================
// Update
// ==============================================

#[test]
fn update_missing_key_fails_without_side_effects() {
    let mut set = seeded();
    let before = set.len();

    assert_eq!(set.update(&"zulu", 1), Err(SetError::KeyNotFound));
    assert_eq!(set.len(), before);
    assert_eq!(set.lowest(), Some(("delta", 10)));
}

#[test]
fn update_can_create_a_new_floor() {
    let mut set = seeded();
    let floor = set.update(&"alpha", 1).unwrap();

    assert_eq!(floor, ("alpha", 1));
    assert_eq!(set.value_of(&"alpha"), Ok(1));
    assert_eq!(set.lowest(), Some(("alpha", 1)));
}

#[test]
fn update_can_raise_a_value_without_eviction() {
    let mut set = seeded();
    let floor = set.update(&"alpha", 81).unwrap();

    assert_eq!(floor, ("delta", 10));
    assert_eq!(set.value_of(&"alpha"), Ok(81));
    assert_eq!(set.len(), 4);
}

// ==============================================
// Remove
// ==============================================

#[test]
fn remove_reports_floor_of_the_remainder() {
    let mut set = seeded();
    let floor = set.remove(&"bravo");
    assert_eq!(floor, Some(("delta", 10)));
    assert_eq!(set.len(), 3);
}

#[test]
fn remove_of_absent_key_changes_nothing() {
    let mut set = seeded();
    let values_before: Vec<u64> = {
        let mut v: Vec<u64> = set.iter().map(|(_, value)| *value).collect();
        v.sort_unstable();
        v
    };

    let floor = set.remove(&"zulu");

    assert_eq!(floor, Some(("delta", 10)));
    assert_eq!(set.len(), 4);
    let mut values_after: Vec<u64> = set.iter().map(|(_, value)| *value).collect();
    values_after.sort_unstable();
    assert_eq!(values_after, values_before);
}

#[test]
fn double_remove_equals_single_remove() {
    let mut once = seeded();
    once.remove(&"charlie");

    let mut twice = seeded();
    twice.remove(&"charlie");
    let floor = twice.remove(&"charlie");

    assert_eq!(twice.len(), once.len());
    assert_eq!(floor, once.lowest());
    assert_eq!(twice.metrics().removes, 1);
}

#[test]
fn draining_the_set_ends_with_an_empty_floor() {
    let mut set = seeded();
    let keys: Vec<&str> = set.iter().map(|(k, _)| *k).collect();
    let mut last = None;
    for key in &keys {
        last = set.remove(key);
    }
    assert!(set.is_empty());
    assert_eq!(last, None);
    assert_eq!(set.lowest(), None);
}

// ==============================================
// Positional Access
// ==============================================

#[test]
fn positions_track_insertion_order_until_first_removal() {
    let set = seeded();
    assert_eq!(set.element_at(0), Ok(("alpha", 80)));
    assert_eq!(set.element_at(1), Ok(("bravo", 30)));
    assert_eq!(set.element_at(2), Ok(("charlie", 50)));
    assert_eq!(set.element_at(3), Ok(("delta", 10)));
}

#[test]
fn out_of_range_position_is_a_hard_failure() {
    let set = seeded();
    assert_eq!(
        set.element_at(9),
        Err(SetError::PositionOutOfRange { position: 9, len: 4 })
    );
}

#[test]
fn all_positions_stay_dense_after_removals() {
    let mut set = seeded();
    set.remove(&"alpha");
    set.remove(&"charlie");

    for position in 0..set.len() {
        assert!(set.element_at(position).is_ok());
    }
    assert!(set.element_at(set.len()).is_err());
}

// ==============================================
// Trait Surface
// ==============================================

#[test]
fn operations_compose_through_the_trait_seam() {
    fn run<S: MinEvictingSet<u64, u64>>(set: &mut S) {
        set.insert(1, 30);
        set.insert(2, 10);
        set.insert(3, 20);
        assert_eq!(set.lowest(), Some((2, 10)));
        assert_eq!(set.update(&2, 40), Ok((3, 20)));
        assert_eq!(set.remove(&3), Some((1, 30)));
        assert_eq!(set.len(), 2);
        assert!(set.capacity() >= set.len());
    }

    let mut set: CappedSet<u64, u64> = CappedSet::new(4);
    run(&mut set);
    set.check_invariants().unwrap();
}
