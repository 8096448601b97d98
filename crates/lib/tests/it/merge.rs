//! Tests for `merge`

use dotdot::{Error, Value};

use crate::helpers::{Map, map_of, value_at, written_tree};

fn tree(paths: &[(&str, Value)]) -> Map {
    let mut map = Map::new();
    for (path, value) in paths {
        dotdot::put(path, value.clone(), &mut map).expect("Failed to build tree");
    }
    map
}

#[test]
fn test_merge_disjoint_nested_keys() {
    let a = tree(&[("x.y", Value::Int(1))]);
    let b = tree(&[("x.z", Value::Int(2))]);

    let merged = dotdot::merge(Some(a), Some(b)).unwrap().unwrap();
    assert_eq!(merged, tree(&[("x.y", Value::Int(1)), ("x.z", Value::Int(2))]));
}

#[test]
fn test_merge_right_side_wins() {
    let a = map_of([("x", Value::Int(1))]);
    let b = map_of([("x", Value::Int(2))]);

    let merged = dotdot::merge(Some(a), Some(b)).unwrap().unwrap();
    assert_eq!(merged, map_of([("x", Value::Int(2))]));
}

#[test]
fn test_merge_with_absent_side() {
    let a = written_tree();

    assert_eq!(dotdot::merge(Some(a.clone()), None).unwrap(), Some(a.clone()));
    assert_eq!(dotdot::merge(None, Some(a.clone())).unwrap(), Some(a));
    assert_eq!(dotdot::merge::<Map>(None, None).unwrap(), None);
}

#[test]
fn test_merge_through_left_leaf_is_a_conflict() {
    let a = map_of([("x", Value::Int(1))]);
    let b = tree(&[("x.y", Value::Int(2))]);

    // The same write fails through `put`, and merge agrees
    let mut direct = a.clone();
    let put_err = dotdot::put("x.y", 2, &mut direct).unwrap_err();

    let err = dotdot::merge(Some(a), Some(b)).unwrap_err();
    match (&err, &put_err) {
        (
            Error::PathConflict { path, remainder },
            Error::PathConflict {
                remainder: put_remainder,
                ..
            },
        ) => {
            assert_eq!(path, "x.y");
            assert_eq!(remainder, "y");
            assert_eq!(remainder, put_remainder);
        }
        other => panic!("Expected path conflicts, got {other:?}"),
    }
}

#[test]
fn test_merge_right_leaf_replaces_left_subtree() {
    let a = tree(&[("x.y", Value::Int(1))]);
    let b = map_of([("x", Value::from("flat"))]);

    let merged = dotdot::merge(Some(a), Some(b)).unwrap().unwrap();
    assert_eq!(merged, map_of([("x", Value::from("flat"))]));
}

#[test]
fn test_merge_keeps_all_leaves() {
    let a = written_tree();
    let b = tree(&[("a.b.c.d1", Value::Int(13)), ("z", Value::Bool(true))]);

    let merged = dotdot::merge(Some(a.clone()), Some(b)).unwrap().unwrap();

    let mut expected = dotdot::flatten_keys(&a);
    expected.insert("z".to_string());
    assert_eq!(dotdot::flatten_keys(&merged), expected);
    assert_eq!(value_at("a.b.c.d1", &merged), Some(&Value::Int(13)));
    assert_eq!(value_at("a.b.c.d3.A", &merged), Some(&Value::from("Mostafa")));
}

#[test]
fn test_merge_does_not_share_state_with_inputs() {
    let a = written_tree();
    let b = tree(&[("b", Value::Int(1))]);

    let mut merged = dotdot::merge(Some(a.clone()), Some(b)).unwrap().unwrap();
    dotdot::put("a.b.c.d1", 0, &mut merged).unwrap();

    assert_eq!(value_at("a.b.c.d1", &a), Some(&Value::Int(12)));
}
