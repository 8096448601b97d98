//!
//! DotDot: dot-path access to nested mappings.
//!
//! A path expression such as `"server.tls.port"` addresses a location inside a
//! tree of mappings nested within mappings. This library reads and writes those
//! locations without the caller walking the tree by hand.
//!
//! ## Core Concepts
//!
//! * **Paths (`path::Path`)**: A dot-delimited expression split into non-empty segments.
//! * **Mappings (`mapping::Mapping`)**: Any key/value container the engine can walk. `HashMap`, `BTreeMap` and `serde_json::Map` are supported out of the box.
//! * **Nesting (`mapping::Nested`)**: The value side of a mapping, which may wrap another mapping.
//! * **Converters (`convert::KeyConverter`)**: Functions that turn a segment into a key, so integer- or boolean-keyed mappings work with the same text paths.
//! * **Navigator (`navigator::Navigator`)**: Holds a converter and a factory for new mappings and exposes every operation.
//! * **Values (`value::Value`)**: A ready-made value tree for callers without their own value type.
//!
//! ## Quick Start
//!
//! The free functions in this module cover string-keyed mappings:
//!
//! ```
//! use std::collections::HashMap;
//! use dotdot::Value;
//!
//! let mut map: HashMap<String, Value> = HashMap::new();
//! dotdot::put("a.b.c", "Mostafa", &mut map)?;
//!
//! assert_eq!(dotdot::get("a.b.c", &map)?, Some(&Value::from("Mostafa")));
//! assert_eq!(dotdot::get("a.x", &map)?, None);
//! # Ok::<(), dotdot::Error>(())
//! ```
//!
//! Mappings keyed by other types go through a [`Navigator`].

use std::{collections::BTreeSet, fmt};

pub mod convert;
pub mod json;
pub mod mapping;
pub mod navigator;
pub mod path;
mod resolve;
pub mod value;

pub use convert::{ConvertError, KeyConverter};
pub use mapping::{Mapping, Nested};
pub use navigator::Navigator;
pub use path::{Path, PathError};
pub use value::{Record, Value};

/// Result type used throughout the DotDot library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the DotDot library.
///
/// Absence of a value is never an error on its own; only the `must_*`
/// operations turn it into [`Error::NoValue`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The path descends through a value that is not a mapping
    #[error("Cannot move deeper for these keys: {remainder} (path '{path}')")]
    PathConflict { path: String, remainder: String },

    /// A required value is missing
    #[error("{path} value is missing")]
    NoValue { path: String },

    /// A value differs from the expected one
    #[error("Provided value is {path}={actual} but expected {path}={expected}")]
    NotEqual {
        path: String,
        actual: String,
        expected: String,
    },

    /// A path segment could not be converted to the mapping's key type
    #[error(transparent)]
    KeyConversion(#[from] ConvertError),

    /// The path expression itself is malformed
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// A stored value has a different type than requested
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl Error {
    /// Check if this error is a conflict between the path and the stored data.
    pub fn is_path_conflict(&self) -> bool {
        matches!(self, Error::PathConflict { .. })
    }

    /// Check if this error indicates a required value was missing.
    pub fn is_no_value(&self) -> bool {
        matches!(self, Error::NoValue { .. })
    }

    /// Check if this error is a failed equality check.
    pub fn is_not_equal(&self) -> bool {
        matches!(self, Error::NotEqual { .. })
    }

    /// Check if this error came from a key converter.
    pub fn is_key_conversion(&self) -> bool {
        matches!(self, Error::KeyConversion(_))
    }

    /// Check if this error is about the path expression rather than the data.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Error::InvalidPath(_))
    }

    /// The path expression the error refers to, where there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::PathConflict { path, .. }
            | Error::NoValue { path }
            | Error::NotEqual { path, .. } => Some(path.as_str()),
            Error::InvalidPath(PathError::EmptySegment { path, .. }) => Some(path.as_str()),
            _ => None,
        }
    }
}

fn navigator<M>() -> Navigator<M>
where
    M: Mapping<Key = String> + Default,
{
    Navigator::new()
}

/// Reads the value at `path`. See [`Navigator::get`].
pub fn get<'m, M>(path: &str, map: &'m M) -> Result<Option<&'m M::Value>>
where
    M: Mapping<Key = String> + Default,
{
    navigator().get(path, map)
}

/// Reads the nested mapping at `path`. See [`Navigator::get_mapping`].
pub fn get_mapping<'m, M>(path: &str, map: &'m M) -> Result<Option<&'m M>>
where
    M: Mapping<Key = String> + Default,
{
    navigator().get_mapping(path, map)
}

/// Reads the value at `path` as `T`. See [`Navigator::get_as`].
pub fn get_as<'m, T, M>(path: &str, map: &'m M) -> Result<Option<T>>
where
    M: Mapping<Key = String> + Default,
    T: TryFrom<&'m M::Value>,
{
    navigator().get_as(path, map)
}

/// Reads the value at `path` as `T`, or returns `default`. See [`Navigator::get_or`].
pub fn get_or<'m, T, M>(path: &str, map: &'m M, default: T) -> Result<T>
where
    M: Mapping<Key = String> + Default,
    T: TryFrom<&'m M::Value>,
{
    navigator().get_or(path, map, default)
}

/// Stores `value` at `path`. See [`Navigator::put`].
pub fn put<M>(path: &str, value: impl Into<M::Value>, map: &mut M) -> Result<Option<M::Value>>
where
    M: Mapping<Key = String> + Default,
{
    navigator().put(path, value, map)
}

/// Stores `value` at `path` when it is `Some`. See [`Navigator::put_if_some`].
pub fn put_if_some<M, V>(path: &str, value: Option<V>, map: &mut M) -> Result<Option<M::Value>>
where
    M: Mapping<Key = String> + Default,
    V: Into<M::Value>,
{
    navigator().put_if_some(path, value, map)
}

/// Returns true if `path` has a value.
pub fn has<M>(path: &str, map: &M) -> Result<bool>
where
    M: Mapping<Key = String> + Default,
{
    navigator().has(path, map)
}

/// Returns true if every path has a value.
pub fn has_all<M, I>(paths: I, map: &M) -> Result<bool>
where
    M: Mapping<Key = String> + Default,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    navigator().has_all(paths, map)
}

/// Returns the value at `path` or fails with [`Error::NoValue`].
pub fn must_have_value<'m, M>(path: &str, map: &'m M) -> Result<&'m M::Value>
where
    M: Mapping<Key = String> + Default,
{
    navigator().must_have_value(path, map)
}

/// Checks the value at `path` against `expected`. See [`Navigator::must_equal`].
pub fn must_equal<M>(path: &str, expected: Option<&M::Value>, map: &M) -> Result<()>
where
    M: Mapping<Key = String> + Default,
    M::Value: PartialEq + fmt::Debug,
{
    navigator().must_equal(path, expected, map)
}

/// Copies the values at `paths` into a new mapping. See [`Navigator::copy_include`].
pub fn copy_include<M, I>(map: &M, paths: I) -> Result<Option<M>>
where
    M: Mapping<Key = String> + Default,
    M::Value: Clone,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    navigator().copy_include(map, paths)
}

/// Stores `entries` at `path` as `{key, value}` records. See [`Navigator::put_as_key_value_array`].
pub fn put_as_key_value_array<M>(path: &str, entries: Option<&M>, map: &mut M) -> Result<Option<M::Value>>
where
    M: Mapping<Key = String> + Default,
    M::Value: Clone,
{
    navigator().put_as_key_value_array(path, entries, map)
}

/// Returns every leaf path of `map`. See [`Navigator::flatten_keys`].
pub fn flatten_keys<M>(map: &M) -> BTreeSet<String>
where
    M: Mapping<Key = String> + Default,
{
    navigator().flatten_keys(map)
}

/// Deep-merges two mappings, `b` winning on collisions. See [`Navigator::merge`].
pub fn merge<M>(a: Option<M>, b: Option<M>) -> Result<Option<M>>
where
    M: Mapping<Key = String> + Default,
    M::Value: Clone,
{
    navigator().merge(a, b)
}
