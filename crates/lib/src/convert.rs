//! Conversion of path segments into mapping keys.
//!
//! A path expression is always text, but the mappings it addresses may be keyed
//! by any scalar type. A [`KeyConverter`] turns one segment into the key type of
//! the mapping being walked. Converters are plain functions: they hold no state
//! and have no side effects, so they can be stored in a [`Navigator`] and copied
//! freely.
//!
//! # Usage
//!
//! ```
//! use dotdot::convert;
//!
//! assert_eq!(convert::i32("42").unwrap(), 42);
//! assert_eq!(convert::string("name").unwrap(), "name");
//! assert!(convert::boolean("TRUE").unwrap());
//! assert!(convert::i32("abc").is_err());
//! ```
//!
//! [`Navigator`]: crate::Navigator

use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// A stateless conversion from a path segment to a mapping key.
pub type KeyConverter<K> = fn(&str) -> Result<K, ConvertError>;

/// Error returned when a segment cannot be represented as the target key type.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The segment text is not a valid literal of the target type
    #[error("Cannot convert segment '{segment}' to {target}: {reason}")]
    InvalidSegment {
        segment: String,
        target: &'static str,
        reason: String,
    },
}

impl ConvertError {
    /// The segment that failed to convert
    pub fn segment(&self) -> &str {
        match self {
            ConvertError::InvalidSegment { segment, .. } => segment,
        }
    }

    /// Name of the key type the segment was converted to
    pub fn target(&self) -> &'static str {
        match self {
            ConvertError::InvalidSegment { target, .. } => target,
        }
    }
}

fn parse<T>(segment: &str, target: &'static str) -> Result<T, ConvertError>
where
    T: FromStr,
    T::Err: Display,
{
    segment
        .parse()
        .map_err(|e: T::Err| ConvertError::InvalidSegment {
            segment: segment.to_string(),
            target,
            reason: e.to_string(),
        })
}

/// Identity conversion. This is the default for string-keyed mappings.
pub fn string(segment: &str) -> Result<String, ConvertError> {
    Ok(segment.to_string())
}

/// Parses the segment as a signed byte.
pub fn i8(segment: &str) -> Result<i8, ConvertError> {
    parse(segment, "i8")
}

/// Parses the segment as a short integer.
pub fn i16(segment: &str) -> Result<i16, ConvertError> {
    parse(segment, "i16")
}

/// Parses the segment as an integer.
pub fn i32(segment: &str) -> Result<i32, ConvertError> {
    parse(segment, "i32")
}

/// Parses the segment as a long integer.
pub fn i64(segment: &str) -> Result<i64, ConvertError> {
    parse(segment, "i64")
}

/// Parses the segment as a single precision float.
pub fn f32(segment: &str) -> Result<f32, ConvertError> {
    parse(segment, "f32")
}

/// Parses the segment as a double precision float.
pub fn f64(segment: &str) -> Result<f64, ConvertError> {
    parse(segment, "f64")
}

/// Boolean conversion.
///
/// `"1"` and any spelling of `"true"` regardless of case are `true`. Every other
/// segment is `false`; this converter never fails.
pub fn boolean(segment: &str) -> Result<bool, ConvertError> {
    Ok(segment == "1" || segment.eq_ignore_ascii_case("true"))
}

/// Key types that have a standard segment conversion.
///
/// Used to pick a default converter for a mapping from its key type alone.
pub trait FromSegment: Sized {
    /// The standard converter for this key type
    const CONVERTER: KeyConverter<Self>;
}

macro_rules! from_segment {
    ($($ty:ty => $f:ident),* $(,)?) => {
        $(
            impl FromSegment for $ty {
                const CONVERTER: KeyConverter<Self> = $f;
            }
        )*
    };
}

from_segment! {
    String => string,
    i8 => i8,
    i16 => i16,
    i32 => i32,
    i64 => i64,
    f32 => f32,
    f64 => f64,
    bool => boolean,
}

/// Converts a segment with the standard converter for `K`.
///
/// ```
/// use dotdot::convert::segment;
///
/// assert_eq!(segment::<i64>("-7").unwrap(), -7);
/// ```
pub fn segment<K: FromSegment>(segment: &str) -> Result<K, ConvertError> {
    (K::CONVERTER)(segment)
}
