//! Path resolution over nested mappings.
//!
//! This is the traversal engine behind every facade operation. Reads walk the
//! segments of a [`Path`] through nested mappings; writes walk the same way but
//! create any missing intermediate mapping with the caller's factory.
//!
//! Both directions fail with [`Error::PathConflict`] when a path asks to descend
//! through a value that is not a mapping. Absence is never an error here.

use tracing::{debug, trace};

use crate::{
    Error, Result,
    convert::KeyConverter,
    mapping::{Mapping, Nested},
    path::Path,
};

fn new_node<M: Mapping>(factory: fn() -> M) -> M::Value {
    <M::Value as Nested<M>>::from_mapping(factory())
}

/// Resolves `path` for reading.
///
/// Returns `Ok(None)` when any segment is missing or holds null. Keys are
/// converted one segment at a time, so a segment after a missing key is never
/// converted.
pub(crate) fn resolve_get<'m, M: Mapping>(
    path: &Path<'_>,
    root: &'m M,
    convert: KeyConverter<M::Key>,
) -> Result<Option<&'m M::Value>> {
    let mut current = root;
    let last = path.len() - 1;

    for (i, segment) in path.segments().iter().enumerate() {
        let key = convert(segment)?;
        let value = current.lookup(&key).filter(|v| !v.is_null());

        if i == last {
            trace!(path = %path, found = value.is_some(), "Resolved path");
            return Ok(value);
        }

        let Some(value) = value else {
            trace!(path = %path, missing = *segment, "Path ends early");
            return Ok(None);
        };

        match value.as_mapping() {
            Some(map) => current = map,
            None => {
                let remainder = path.remainder(i + 1);
                debug!(path = %path, remainder = %remainder, "Cannot descend through a leaf value");
                return Err(Error::PathConflict {
                    path: path.to_string(),
                    remainder,
                });
            }
        }
    }

    Ok(None)
}

/// Walks `keys` from `root`, creating missing mappings with `factory`.
///
/// Returns the mapping that the last key led to. On a conflict the error
/// carries the depth of the offending key so the caller can report the rest of
/// the path. Missing and null entries are both
/// replaced by a new mapping; an existing mapping is only ever extended.
///
/// A conflict can only happen while walking mappings that already existed, so
/// a failed walk has not created anything.
pub(crate) fn descend_for_put<M, I>(
    root: &mut M,
    keys: I,
    factory: fn() -> M,
) -> std::result::Result<&mut M, usize>
where
    M: Mapping,
    I: IntoIterator<Item = M::Key>,
{
    let mut cursor = root;

    for (depth, key) in keys.into_iter().enumerate() {
        let mut created = false;
        let slot = cursor.get_or_insert_with(key, || {
            created = true;
            new_node(factory)
        });

        if slot.is_null() {
            created = true;
            *slot = new_node(factory);
        } else if slot.as_mapping().is_none() {
            return Err(depth);
        }

        if created {
            debug!(depth, "Created intermediate mapping");
        }

        cursor = match slot.as_mapping_mut() {
            Some(map) => map,
            None => return Err(depth),
        };
    }

    Ok(cursor)
}

/// Stores `value` at `path`, creating intermediate mappings as needed.
///
/// Every segment is converted before the mapping is touched, so a conversion
/// failure leaves `root` unchanged. Returns the value previously stored at the
/// leaf, if any.
pub(crate) fn resolve_put<M: Mapping>(
    path: &Path<'_>,
    value: M::Value,
    root: &mut M,
    convert: KeyConverter<M::Key>,
    factory: fn() -> M,
) -> Result<Option<M::Value>> {
    let parents = path
        .parents()
        .iter()
        .map(|segment| convert(segment))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let leaf = convert(path.leaf())?;

    let target = descend_for_put(root, parents, factory).map_err(|depth| {
        let remainder = path.remainder(depth + 1);
        debug!(path = %path, remainder = %remainder, "Cannot write through a leaf value");
        Error::PathConflict {
            path: path.to_string(),
            remainder,
        }
    })?;

    trace!(path = %path, "Storing value");
    Ok(target.store(leaf, value))
}

/// Visits every leaf below `map` with the sequence of keys leading to it.
///
/// Nested mappings are descended into and never reported themselves, so an
/// empty nested mapping contributes no leaves. Null values are leaves.
///
/// The walk recurses once per nesting level, so stack use grows with the depth
/// of the tree.
pub(crate) fn for_each_leaf<'m, M, F>(map: &'m M, f: &mut F)
where
    M: Mapping,
    F: FnMut(&[&'m M::Key], &'m M::Value),
{
    fn walk<'m, M, F>(map: &'m M, prefix: &mut Vec<&'m M::Key>, f: &mut F)
    where
        M: Mapping,
        F: FnMut(&[&'m M::Key], &'m M::Value),
    {
        for (key, value) in map.entries() {
            prefix.push(key);
            match value.as_mapping() {
                Some(nested) => walk(nested, prefix, f),
                None => f(prefix.as_slice(), value),
            }
            prefix.pop();
        }
    }

    walk(map, &mut Vec::new(), f);
}
