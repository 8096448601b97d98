//! Tests for `flatten_keys`

use std::collections::BTreeSet;

use dotdot::{Navigator, Value};

use crate::helpers::{Map, map_of, nested_person, written_tree};

fn set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_flatten_written_tree() {
    let map = written_tree();
    assert_eq!(
        dotdot::flatten_keys(&map),
        set(&["a.b.c.d1", "a.b.c.d2", "a.b.c.d3.A", "a.b2", "b"])
    );
}

#[test]
fn test_flatten_hand_built_tree() {
    let map = nested_person();
    assert_eq!(
        dotdot::flatten_keys(&map),
        set(&["firstname", "one.lastname", "one.two.age", "one.two.three"])
    );
}

#[test]
fn test_flatten_is_idempotent() {
    let map = written_tree();
    assert_eq!(dotdot::flatten_keys(&map), dotdot::flatten_keys(&map));
}

#[test]
fn test_flatten_empty_and_absent() {
    assert!(dotdot::flatten_keys(&Map::new()).is_empty());
    assert!(Navigator::<Map>::new().flatten_keys(None).is_empty());
}

#[test]
fn test_flatten_skips_empty_nested_mappings() {
    let map = map_of([
        ("empty", Value::Map(Map::new())),
        ("list", Value::List(vec![Value::Int(1)])),
    ]);
    assert_eq!(dotdot::flatten_keys(&map), set(&["list"]));
}

#[test]
fn test_flatten_every_key_resolves() {
    let map = written_tree();
    for key in dotdot::flatten_keys(&map) {
        assert!(dotdot::has(&key, &map).unwrap(), "{key} should resolve");
    }
}
