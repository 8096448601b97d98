//! Write-path tests

use dotdot::{Error, Value};

use crate::helpers::{Map, map_of, value_at, written_tree};

#[test]
fn test_put_builds_intermediates() {
    let map = written_tree();

    assert_eq!(value_at("a.b.c.d1", &map), Some(&Value::Int(12)));
    assert_eq!(value_at("a.b.c.d2", &map), Some(&Value::from("Hello")));
    assert_eq!(value_at("a.b2", &map), Some(&Value::Float(3.141592)));
    assert_eq!(value_at("a.b.c.d3.A", &map), Some(&Value::from("Mostafa")));
    assert_eq!(value_at("b", &map), Some(&Value::Int(100)));
}

#[test]
fn test_put_shares_intermediate_chain() {
    let map = written_tree();

    assert_eq!(map.len(), 2);
    let c = dotdot::get_mapping("a.b.c", &map).unwrap().unwrap();
    let mut keys: Vec<&str> = c.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["d1", "d2", "d3"]);
}

#[test]
fn test_put_single_segment() {
    let mut map = Map::new();
    dotdot::put("key", "value", &mut map).unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["key"], "value");
}

#[test]
fn test_put_overwrites_leaf_and_returns_previous() {
    let mut map = Map::new();
    assert_eq!(dotdot::put("a.b", 1, &mut map).unwrap(), None);
    assert_eq!(dotdot::put("a.b", 2, &mut map).unwrap(), Some(Value::Int(1)));
    assert_eq!(value_at("a.b", &map), Some(&Value::Int(2)));
}

#[test]
fn test_put_extends_existing_mapping() {
    let mut map = map_of([("a", Value::Map(map_of([("x", Value::Int(1))])))]);
    dotdot::put("a.y", 2, &mut map).unwrap();

    assert_eq!(value_at("a.x", &map), Some(&Value::Int(1)));
    assert_eq!(value_at("a.y", &map), Some(&Value::Int(2)));
}

#[test]
fn test_put_through_leaf_fails_without_changes() {
    let mut map = written_tree();
    let before = map.clone();

    let err = dotdot::put("b.c.d", 1, &mut map).unwrap_err();
    match &err {
        Error::PathConflict { path, remainder } => {
            assert_eq!(path, "b.c.d");
            assert_eq!(remainder, "c.d");
        }
        other => panic!("Expected a path conflict, got {other:?}"),
    }
    assert_eq!(map, before);
}

#[test]
fn test_put_replaces_whole_subtree_at_leaf_position() {
    let mut map = written_tree();
    dotdot::put("a.b", "flat", &mut map).unwrap();

    assert_eq!(value_at("a.b", &map), Some(&Value::from("flat")));
    assert_eq!(value_at("a.b2", &map), Some(&Value::Float(3.141592)));
}

#[test]
fn test_put_if_some() {
    let mut map = Map::new();
    dotdot::put_if_some("a.b", Some("x"), &mut map).unwrap();
    dotdot::put_if_some::<_, &str>("a.c", None, &mut map).unwrap();

    assert!(dotdot::has("a.b", &map).unwrap());
    assert!(!dotdot::has("a.c", &map).unwrap());
}

#[test]
fn test_put_rejects_malformed_path() {
    let mut map = Map::new();
    let err = dotdot::put("a..b", 1, &mut map).unwrap_err();
    assert!(err.is_invalid_path());
    assert_eq!(err.path(), Some("a..b"));
    assert!(map.is_empty());
}
