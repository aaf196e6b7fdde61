use avl_dictionary::avl_tree::AvlMap;
use rand::{thread_rng, Rng, SeedableRng, XorShiftRng};
use std::vec::Vec;

fn height_bound(len: usize) -> usize {
    (1.44 * ((len + 2) as f64).log2()).ceil() as usize
}

#[test]
fn int_test_avl_map() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = AvlMap::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>();
        let val = rng.gen::<u32>();

        map.insert(key, val);
        expected.push((key, val));
    }

    expected.reverse();
    expected.sort_by(|l, r| l.0.cmp(&r.0));
    expected.dedup_by_key(|pair| pair.0);

    assert_eq!(map.len(), expected.len());
    assert!(map.height() <= height_bound(map.len()));

    for entry in &expected {
        assert!(map.contains_key(&entry.0));
        assert_eq!(map.get(&entry.0), Some(&entry.1));
    }

    assert_eq!(
        map.iter().map(|(key, value)| (*key, *value)).collect::<Vec<(u32, u32)>>(),
        expected,
    );

    thread_rng().shuffle(&mut expected);

    let mut expected_len = expected.len();
    for entry in expected {
        let old_entry = map.remove(&entry.0);
        expected_len -= 1;
        assert_eq!(old_entry, Some((entry.0, entry.1)));
        assert_eq!(map.len(), expected_len);
        assert!(map.height() <= height_bound(map.len()));
    }

    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
}

#[test]
fn int_test_avl_map_string_keys() {
    let mut rng: XorShiftRng = SeedableRng::from_seed([3, 1, 4, 1]);
    let mut map = AvlMap::new();
    let mut expected = std::collections::BTreeMap::new();

    for _ in 0..10_000 {
        let len = rng.gen_range(1, 6);
        let key = rng.gen_ascii_chars().take(len).collect::<String>();
        let value = rng.gen::<u64>().to_string();

        if rng.gen_weighted_bool(4) {
            assert_eq!(
                map.remove(key.as_str()),
                expected.remove(&key).map(|value| (key.clone(), value)),
            );
        } else {
            assert_eq!(map.insert(key.clone(), value.clone()), expected.insert(key, value));
        }
    }

    assert_eq!(map.len(), expected.len());
    assert!(map.iter().eq(expected.iter()));
    assert!(map.into_iter().eq(expected.into_iter()));
}
