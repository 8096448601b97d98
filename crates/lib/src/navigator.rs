//! Dot-path access to nested mappings.
//!
//! [`Navigator`] bundles the two collaborators that every operation needs: a
//! [`KeyConverter`] that turns path segments into keys, and a factory that builds
//! empty mappings when a write has to create intermediate nodes or an operation
//! returns a fresh mapping. All operations delegate traversal to the resolver;
//! none of them walk mappings on their own.
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use dotdot::{Navigator, Value};
//!
//! type IntMap = HashMap<i32, Value<i32>>;
//!
//! let nav = Navigator::<IntMap>::new();
//! let mut map = IntMap::new();
//! nav.put("2.22.31", 22, &mut map)?;
//!
//! assert_eq!(nav.get_as::<i64>("2.22.31", &map)?, Some(22));
//! assert!(nav.has("2.22", &map)?);
//! assert!(nav.get("x", &map).is_err()); // "x" is not an i32
//! # Ok::<(), dotdot::Error>(())
//! ```
//!
//! Operations that read accept either `&map` or `None`; an absent root behaves
//! like an empty one.

use std::{collections::BTreeSet, fmt};

use tracing::debug;

use crate::{
    Error, Result,
    convert::{FromSegment, KeyConverter},
    mapping::{Mapping, Nested},
    path::Path,
    resolve,
};

/// Dot-path operations over mappings of type `M`.
///
/// A navigator holds no data. It is `Copy` and can be created once and reused
/// for any number of mappings of the same type.
pub struct Navigator<M: Mapping> {
    converter: KeyConverter<M::Key>,
    factory: fn() -> M,
}

impl<M: Mapping> Clone for Navigator<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Mapping> Copy for Navigator<M> {}

impl<M: Mapping> fmt::Debug for Navigator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("mapping", &std::any::type_name::<M>())
            .finish_non_exhaustive()
    }
}

impl<M> Navigator<M>
where
    M: Mapping + Default,
    M::Key: FromSegment,
{
    /// Creates a navigator using the standard converter for the key type and
    /// `M::default` as the factory.
    pub fn new() -> Self {
        Self::with_parts(<M::Key as FromSegment>::CONVERTER, M::default)
    }
}

impl<M> Default for Navigator<M>
where
    M: Mapping + Default,
    M::Key: FromSegment,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mapping> Navigator<M> {
    /// Creates a navigator from an explicit converter and factory.
    pub fn with_parts(converter: KeyConverter<M::Key>, factory: fn() -> M) -> Self {
        Self { converter, factory }
    }

    /// Replaces the key converter
    pub fn converter(mut self, converter: KeyConverter<M::Key>) -> Self {
        self.converter = converter;
        self
    }

    /// Replaces the factory used for new mappings
    pub fn factory(mut self, factory: fn() -> M) -> Self {
        self.factory = factory;
        self
    }

    /// Reads the value at `path`.
    ///
    /// Returns `Ok(None)` if the root is absent or any segment is missing. Fails
    /// with [`Error::PathConflict`] if the path descends through a leaf value.
    pub fn get<'m>(&self, path: &str, map: impl Into<Option<&'m M>>) -> Result<Option<&'m M::Value>>
    where
        M: 'm,
    {
        let path = Path::parse(path)?;
        match map.into() {
            Some(root) => resolve::resolve_get(&path, root, self.converter),
            None => Ok(None),
        }
    }

    /// Reads the nested mapping at `path`. A leaf value at `path` reads as `None`.
    pub fn get_mapping<'m>(&self, path: &str, map: impl Into<Option<&'m M>>) -> Result<Option<&'m M>>
    where
        M: 'm,
    {
        Ok(self
            .get(path, map)?
            .and_then(<M::Value as Nested<M>>::as_mapping))
    }

    /// Reads the value at `path` converted to `T`.
    ///
    /// A value that cannot be converted reads as `None`, the same as a missing one.
    pub fn get_as<'m, T>(&self, path: &str, map: impl Into<Option<&'m M>>) -> Result<Option<T>>
    where
        M: 'm,
        T: TryFrom<&'m M::Value>,
    {
        Ok(self.get(path, map)?.and_then(|v| T::try_from(v).ok()))
    }

    /// Reads the value at `path` converted to `T`, falling back to `default`.
    pub fn get_or<'m, T>(&self, path: &str, map: impl Into<Option<&'m M>>, default: T) -> Result<T>
    where
        M: 'm,
        T: TryFrom<&'m M::Value>,
    {
        Ok(self.get_as(path, map)?.unwrap_or(default))
    }

    /// Stores `value` at `path`, creating intermediate mappings as needed.
    ///
    /// Returns the value previously stored at `path`. Existing intermediate
    /// mappings are extended, never replaced; a leaf value on the way fails with
    /// [`Error::PathConflict`] and leaves `map` unchanged.
    pub fn put(
        &self,
        path: &str,
        value: impl Into<M::Value>,
        map: &mut M,
    ) -> Result<Option<M::Value>> {
        let path = Path::parse(path)?;
        resolve::resolve_put(&path, value.into(), map, self.converter, self.factory)
    }

    /// Stores `value` at `path` only when it is `Some`.
    pub fn put_if_some<V>(&self, path: &str, value: Option<V>, map: &mut M) -> Result<Option<M::Value>>
    where
        V: Into<M::Value>,
    {
        match value {
            Some(value) => self.put(path, value, map),
            None => Ok(None),
        }
    }

    /// Returns true if `path` has a value.
    pub fn has<'m>(&self, path: &str, map: impl Into<Option<&'m M>>) -> Result<bool>
    where
        M: 'm,
    {
        Ok(self.get(path, map)?.is_some())
    }

    /// Returns true if every path in `paths` has a value.
    pub fn has_all<'m, I>(&self, paths: I, map: impl Into<Option<&'m M>>) -> Result<bool>
    where
        M: 'm,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let map = map.into();
        for path in paths {
            if !self.has(path.as_ref(), map)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the value at `path`, failing with [`Error::NoValue`] if there is none.
    pub fn must_have_value<'m>(&self, path: &str, map: impl Into<Option<&'m M>>) -> Result<&'m M::Value>
    where
        M: 'm,
    {
        self.get(path, map)?.ok_or_else(|| Error::NoValue {
            path: path.to_string(),
        })
    }

    /// Checks that the value at `path` equals `expected`.
    ///
    /// A missing value only matches `expected == None`; an expected null counts
    /// as `None`, the same as a stored null. Fails with
    /// [`Error::NotEqual`] carrying both sides otherwise.
    pub fn must_equal<'m>(
        &self,
        path: &str,
        expected: Option<&M::Value>,
        map: impl Into<Option<&'m M>>,
    ) -> Result<()>
    where
        M: 'm,
        M::Value: PartialEq + fmt::Debug,
    {
        let actual = self.get(path, map)?;
        let expected = expected.filter(|v| !v.is_null());
        if actual == expected {
            return Ok(());
        }

        fn describe<V: fmt::Debug>(value: Option<&V>) -> String {
            value.map_or_else(|| "null".to_string(), |v| format!("{v:?}"))
        }

        Err(Error::NotEqual {
            path: path.to_string(),
            actual: describe(actual),
            expected: describe(expected),
        })
    }

    /// Builds a new mapping holding only the values at `paths`.
    ///
    /// Paths without a value are left out. Returns `None` for an absent root.
    pub fn copy_include<'m, I>(&self, map: impl Into<Option<&'m M>>, paths: I) -> Result<Option<M>>
    where
        M: 'm,
        M::Value: Clone,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(source) = map.into() else {
            return Ok(None);
        };

        let mut result = (self.factory)();
        let mut copied = 0usize;
        for path in paths {
            let path = path.as_ref();
            if let Some(value) = self.get(path, source)? {
                self.put(path, value.clone(), &mut result)?;
                copied += 1;
            }
        }

        debug!(copied, "Copied included paths");
        Ok(Some(result))
    }

    /// Stores the entries of `entries` at `path` as ordered `{key, value}` records.
    ///
    /// Records follow the iteration order of `entries`. An absent `entries`
    /// stores null, which reads back as no value.
    pub fn put_as_key_value_array(
        &self,
        path: &str,
        entries: Option<&M>,
        map: &mut M,
    ) -> Result<Option<M::Value>>
    where
        M::Key: fmt::Display,
        M::Value: Clone,
    {
        let value = match entries {
            Some(entries) => <M::Value as Nested<M>>::from_records(
                entries
                    .entries()
                    .map(|(key, value)| (key.to_string(), value.clone()))
                    .collect(),
            ),
            None => <M::Value as Nested<M>>::null(),
        };
        self.put(path, value, map)
    }

    /// Returns every leaf path of `map` in dot notation.
    ///
    /// Nested mappings are descended into and named by the keys leading to
    /// them; an empty nested mapping has no leaves. An absent root has none.
    pub fn flatten_keys<'m>(&self, map: impl Into<Option<&'m M>>) -> BTreeSet<String>
    where
        M: 'm,
        M::Key: fmt::Display,
    {
        let mut keys = BTreeSet::new();
        if let Some(root) = map.into() {
            resolve::for_each_leaf(root, &mut |path: &[&M::Key], _| {
                keys.insert(join_keys(path));
            });
        }
        keys
    }

    /// Deep-merges two mappings into a new one.
    ///
    /// If either side is absent the other is returned unchanged. Otherwise every
    /// leaf of `a` is written into a fresh mapping, then every leaf of `b`, so
    /// `b` wins wherever both define a value. Each leaf is written the same way
    /// as [`Navigator::put`], so a leaf of `b` below a leaf of `a` fails with
    /// [`Error::PathConflict`].
    pub fn merge(&self, a: Option<M>, b: Option<M>) -> Result<Option<M>>
    where
        M::Key: Clone + fmt::Display,
        M::Value: Clone,
    {
        let (a, b) = match (a, b) {
            (None, other) | (other, None) => return Ok(other),
            (Some(a), Some(b)) => (a, b),
        };

        let mut merged = (self.factory)();
        let mut leaves = 0usize;
        for source in [&a, &b] {
            let mut failure = None;
            resolve::for_each_leaf(source, &mut |path: &[&M::Key], value: &M::Value| {
                if failure.is_some() {
                    return;
                }
                match self.replay(&mut merged, path, value.clone()) {
                    Ok(()) => leaves += 1,
                    Err(e) => failure = Some(e),
                }
            });
            if let Some(e) = failure {
                return Err(e);
            }
        }

        debug!(leaves, "Merged mappings");
        Ok(Some(merged))
    }

    fn replay(&self, target: &mut M, path: &[&M::Key], value: M::Value) -> Result<()>
    where
        M::Key: Clone + fmt::Display,
    {
        let Some((leaf, parents)) = path.split_last() else {
            return Ok(());
        };

        let parent = resolve::descend_for_put(
            target,
            parents.iter().map(|k| (*k).clone()),
            self.factory,
        )
        .map_err(|depth| {
            let remainder = join_keys(&path[depth + 1..]);
            debug!(path = %join_keys(path), remainder = %remainder, "Cannot merge through a leaf value");
            Error::PathConflict {
                path: join_keys(path),
                remainder,
            }
        })?;

        parent.store((*leaf).clone(), value);
        Ok(())
    }
}

fn join_keys<K: fmt::Display>(keys: &[&K]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
