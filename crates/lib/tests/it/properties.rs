//! Property-based tests

use std::collections::BTreeSet;

use dotdot::Value;
use proptest::prelude::*;

use crate::helpers::Map;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}"
}

fn path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..5)
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[ -~]{0,12}".prop_map(Value::Text),
    ]
}

/// Builds a tree from writes, skipping writes that would descend through a leaf
fn build(writes: &[(Vec<String>, Value)]) -> Map {
    let mut map = Map::new();
    for (segments, value) in writes {
        let _ = dotdot::put(&segments.join("."), value.clone(), &mut map);
    }
    map
}

proptest! {
    #[test]
    fn put_then_get_round_trips(segments in path(), value in leaf()) {
        let path = segments.join(".");
        let mut map = Map::new();
        dotdot::put(&path, value.clone(), &mut map).unwrap();
        prop_assert_eq!(dotdot::get(&path, &map).unwrap(), Some(&value));
    }

    #[test]
    fn get_on_empty_is_absent(segments in path()) {
        let map = Map::new();
        prop_assert_eq!(dotdot::get(&segments.join("."), &map).unwrap(), None);
    }

    #[test]
    fn flatten_is_idempotent(writes in prop::collection::vec((path(), leaf()), 0..8)) {
        let map = build(&writes);
        let once = dotdot::flatten_keys(&map);
        prop_assert_eq!(&once, &dotdot::flatten_keys(&map));

        for key in &once {
            prop_assert!(dotdot::has(key, &map).unwrap());
        }
    }

    #[test]
    fn copy_of_all_leaves_is_equal(writes in prop::collection::vec((path(), leaf()), 0..8)) {
        let map = build(&writes);
        let copied = dotdot::copy_include(&map, dotdot::flatten_keys(&map)).unwrap().unwrap();
        prop_assert_eq!(copied, map);
    }

    #[test]
    fn merge_is_right_biased(
        left in prop::collection::vec((path(), leaf()), 0..6),
        right in prop::collection::vec((path(), leaf()), 0..6),
    ) {
        let a = build(&left);
        let b = build(&right);

        match dotdot::merge(Some(a.clone()), Some(b.clone())) {
            Ok(merged) => {
                let merged = merged.unwrap();
                for key in dotdot::flatten_keys(&b) {
                    prop_assert_eq!(dotdot::get(&key, &merged).unwrap(), dotdot::get(&key, &b).unwrap());
                }

                let keys: BTreeSet<String> = dotdot::flatten_keys(&merged);
                for key in &keys {
                    let from_b = dotdot::get(key, &b).ok().flatten();
                    let from_a = dotdot::get(key, &a).ok().flatten();
                    prop_assert!(from_b.is_some() || from_a.is_some());
                }
            }
            // Only possible when some leaf of `b` lies below a leaf of `a`
            Err(err) => {
                prop_assert!(err.is_path_conflict());
                let blocked = dotdot::flatten_keys(&b)
                    .iter()
                    .any(|key| dotdot::get(key, &a).is_err());
                prop_assert!(blocked);
            }
        }
    }
}
