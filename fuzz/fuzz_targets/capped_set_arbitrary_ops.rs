#![no_main]

use cappedset::set::CappedSet;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on CappedSet
//
// Tests random sequences of insert, update, remove, value_of, element_at,
// and lowest operations to find edge cases and invariant violations.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize % 32).max(1);
    let mut set: CappedSet<u32, u32> = CappedSet::new(capacity);

    let mut idx = 1;
    while idx + 2 < data.len() {
        let op = data[idx] % 6;
        let key = data[idx + 1] as u32;
        let value = data[idx + 2] as u32;

        match op {
            0 => {
                let floor = set.insert(key, value);
                // The freshly inserted key always survives its own insert.
                assert!(set.contains(&key));
                assert!(floor.is_some());
            }
            1 => {
                let existed = set.contains(&key);
                let result = set.update(&key, value);
                assert_eq!(result.is_ok(), existed);
            }
            2 => {
                let floor = set.remove(&key);
                assert!(!set.contains(&key));
                assert_eq!(floor.is_none(), set.is_empty());
            }
            3 => {
                let result = set.value_of(&key);
                assert_eq!(result.is_ok(), set.contains(&key));
            }
            4 => {
                let position = data[idx + 1] as usize;
                assert_eq!(set.element_at(position).is_ok(), position < set.len());
            }
            5 => {
                if let Some((floor_key, floor_value)) = set.lowest() {
                    // Floor value is a true lower bound over the contents.
                    assert!(set.iter().all(|(_, v)| *v >= floor_value));
                    assert!(set.contains(&floor_key));
                }
            }
            _ => unreachable!(),
        }

        assert!(set.len() <= set.capacity());
        set.check_invariants().unwrap();

        idx += 3;
    }
});
