//! Shared helpers for benchmarks

use std::collections::HashMap;

use dotdot::Value;

pub type Map = HashMap<String, Value>;

/// Path of `depth` segments, e.g. `k0.k1.k2`
pub fn deep_path(depth: usize) -> String {
    (0..depth)
        .map(|i| format!("k{i}"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Creates a tree with `width` branches, each `depth` levels deep
/// Each leaf is `b{N}.k0...` -> N
pub fn wide_tree(width: usize, depth: usize) -> Map {
    let mut map = Map::new();
    let tail = deep_path(depth.saturating_sub(1));
    for i in 0..width {
        let path = if tail.is_empty() {
            format!("b{i}")
        } else {
            format!("b{i}.{tail}")
        };
        dotdot::put(&path, i as i64, &mut map).expect("Failed to build tree");
    }
    map
}
