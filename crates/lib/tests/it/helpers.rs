use std::collections::HashMap;

use dotdot::Value;

/// String-keyed tree used by most tests
pub type Map = HashMap<String, Value>;

/// Builds a mapping from `(key, value)` pairs without going through the path engine
pub fn map_of<const N: usize>(entries: [(&str, Value); N]) -> Map {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// A three-level person record built by hand:
///
/// ```text
/// {"firstname": "Mostafa", "one": {"lastname": "Asgari", "two": {"age": 22, "three": 3}}}
/// ```
pub fn nested_person() -> Map {
    let level3 = map_of([("age", Value::Int(22)), ("three", Value::Int(3))]);
    let level2 = map_of([
        ("lastname", Value::from("Asgari")),
        ("two", Value::Map(level3)),
    ]);
    map_of([
        ("firstname", Value::from("Mostafa")),
        ("one", Value::Map(level2)),
    ])
}

/// The mapping produced by the standard sequence of five writes
pub fn written_tree() -> Map {
    let mut map = Map::new();
    dotdot::put("a.b.c.d1", 12, &mut map).expect("Failed to put a.b.c.d1");
    dotdot::put("a.b.c.d2", "Hello", &mut map).expect("Failed to put a.b.c.d2");
    dotdot::put("a.b2", 3.141592, &mut map).expect("Failed to put a.b2");
    dotdot::put("a.b.c.d3.A", "Mostafa", &mut map).expect("Failed to put a.b.c.d3.A");
    dotdot::put("b", 100, &mut map).expect("Failed to put b");
    map
}

/// Reads `path` and panics unless the read succeeds
pub fn value_at<'m>(path: &str, map: &'m Map) -> Option<&'m Value> {
    dotdot::get(path, map).unwrap_or_else(|e| panic!("Failed to get {path}: {e}"))
}
