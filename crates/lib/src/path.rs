//! Dot-delimited path expressions.
//!
//! A path expression such as `"user.profile.name"` addresses
//! `map["user"]["profile"]["name"]`. This module splits an expression into its
//! segments and validates it. No escaping is supported, so a segment can never
//! contain a dot, and splitting then rejoining with `.` always reproduces the
//! original expression.
//!
//! # Usage
//!
//! ```
//! use dotdot::path::Path;
//!
//! let path = Path::parse("user.profile.name")?;
//! assert_eq!(path.segments(), ["user", "profile", "name"]);
//! assert_eq!(path.leaf(), "name");
//! assert_eq!(path.remainder(1), "profile.name");
//! # Ok::<(), dotdot::path::PathError>(())
//! ```

use std::fmt;

use thiserror::Error;

/// Error type for path validation failures.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path expression has no segments at all
    #[error("Path expression is empty")]
    Empty,

    /// A segment between two dots (or at either end) is empty
    #[error("Path '{path}' has an empty segment at position {index}")]
    EmptySegment { path: String, index: usize },
}

/// A parsed path expression, borrowing the text it was parsed from.
///
/// Always holds at least one segment, and every segment is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<'a> {
    expr: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// Parses a path expression.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] for `""` and [`PathError::EmptySegment`] for
    /// expressions such as `"a..b"`, `".a"` or `"a."`.
    pub fn parse(expr: &'a str) -> Result<Self, PathError> {
        if expr.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<&str> = expr.split('.').collect();
        if let Some(index) = segments.iter().position(|s| s.is_empty()) {
            return Err(PathError::EmptySegment {
                path: expr.to_string(),
                index,
            });
        }

        Ok(Path { expr, segments })
    }

    /// The original expression
    pub fn as_str(&self) -> &'a str {
        self.expr
    }

    /// All segments, in order
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns false: a path always has at least one segment
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Segments leading up to the leaf
    pub fn parents(&self) -> &[&'a str] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The final segment
    pub fn leaf(&self) -> &'a str {
        self.segments[self.segments.len() - 1]
    }

    /// The segments from `from` onward, rejoined with dots.
    ///
    /// Used to report which part of a path could not be resolved.
    pub fn remainder(&self, from: usize) -> String {
        self.segments[from.min(self.segments.len())..].join(".")
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expr)
    }
}

impl AsRef<str> for Path<'_> {
    fn as_ref(&self) -> &str {
        self.expr
    }
}

impl<'a> TryFrom<&'a str> for Path<'a> {
    type Error = PathError;

    fn try_from(expr: &'a str) -> Result<Self, Self::Error> {
        Path::parse(expr)
    }
}
