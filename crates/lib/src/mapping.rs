//! Container contracts for nested key/value data.
//!
//! The path engine never names a concrete container. It works against two
//! traits:
//!
//! - [`Mapping`] - a key/value container (lookup, insertion, iteration)
//! - [`Nested`] - a value type that can hold another mapping of the same kind
//!
//! Nesting is represented by a value that wraps a mapping, so a tree of
//! `HashMap<String, Value>` where `Value` has a map variant is walked the same
//! way as a `serde_json::Map` or a `BTreeMap` keyed by integers.
//!
//! Implementations are provided for [`HashMap`] and [`BTreeMap`] with any value
//! type implementing [`Nested`], and for `serde_json::Map` in [`crate::json`].
//! Mappings must form a tree: a mapping that (indirectly) contains itself is
//! not supported.

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// A key/value container addressed by the path engine.
pub trait Mapping: Sized {
    /// Key type of this mapping
    type Key;
    /// Value type, which may wrap a nested mapping of the same type
    type Value: Nested<Self>;

    /// Returns the value stored under `key`
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns a mutable reference to the value stored under `key`
    fn lookup_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    /// Stores `value` under `key`, returning the previous value if any
    fn store(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Returns the value under `key`, inserting `default()` first if the key is missing
    fn get_or_insert_with<F>(&mut self, key: Self::Key, default: F) -> &mut Self::Value
    where
        F: FnOnce() -> Self::Value;

    /// Iterates over all entries in the container's own order
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Number of entries
    fn len(&self) -> usize;

    /// Returns true if the mapping has no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A value that may itself be a mapping of type `M`.
pub trait Nested<M>: Sized {
    /// Views this value as a nested mapping
    fn as_mapping(&self) -> Option<&M>;

    /// Views this value as a mutable nested mapping
    fn as_mapping_mut(&mut self) -> Option<&mut M>;

    /// Wraps a mapping so it can be stored as a value
    fn from_mapping(map: M) -> Self;

    /// The null value. Stored nulls read back as absent.
    fn null() -> Self;

    /// Returns true for the null value
    fn is_null(&self) -> bool;

    /// Builds an ordered sequence of `{key, value}` records.
    fn from_records(records: Vec<(String, Self)>) -> Self;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Nested<Self>,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        self.entry(key).or_insert_with(default)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord,
    V: Nested<Self>,
{
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn store(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        self.entry(key).or_insert_with(default)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}
