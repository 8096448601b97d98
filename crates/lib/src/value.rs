//! A ready-made value tree for nested mappings.
//!
//! [`Value`] is a heterogeneous value whose [`Value::Map`] variant holds a
//! `HashMap` of further values, so `HashMap<K, Value<K>>` forms a tree that the
//! path engine can walk for any key type `K`. Callers with their own value type
//! can implement [`Nested`] instead; this type exists so the common case needs
//! no glue code.
//!
//! # Direct Comparisons
//!
//! `Value` implements `PartialEq` with primitive types:
//!
//! ```
//! # use dotdot::Value;
//! let text: Value = Value::Text("hello".to_string());
//! let number: Value = Value::Int(42);
//!
//! assert!(text == "hello");
//! assert!(number == 42);
//! assert!(42 == number);
//! assert!(!(number == "hello"));
//! ```

use std::{collections::HashMap, fmt, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::{Error, mapping::Nested};

/// Values that can be stored in a nested mapping.
///
/// ## Leaf Values
/// - [`Value::Null`] - stored null, which reads back as absent
/// - [`Value::Bool`], [`Value::Int`], [`Value::Float`], [`Value::Text`]
/// - [`Value::List`] - an ordered sequence of values
/// - [`Value::Records`] - an ordered sequence of `{key, value}` records
///
/// ## Branch Values
/// - [`Value::Map`] - a nested mapping with the same key type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "K: Serialize", deserialize = "K: Deserialize<'de>"))]
pub enum Value<K = String>
where
    K: Eq + Hash,
{
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered collection of values
    List(Vec<Value<K>>),
    /// Ordered key/value records
    Records(Vec<Record<K>>),
    /// Nested mapping
    Map(HashMap<K, Value<K>>),
}

/// One `{key, value}` entry of a [`Value::Records`] sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "K: Serialize", deserialize = "K: Deserialize<'de>"))]
pub struct Record<K = String>
where
    K: Eq + Hash,
{
    pub key: String,
    pub value: Value<K>,
}

impl<K: Eq + Hash> Value<K> {
    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        !self.is_map()
    }

    /// Returns true if this is a nested mapping
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Records(_) => "records",
            Value::Map(_) => "map",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list
    pub fn as_list(&self) -> Option<&[Value<K>]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to key/value records
    pub fn as_records(&self) -> Option<&[Record<K>]> {
        match self {
            Value::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Attempts to convert to a nested mapping
    pub fn as_map(&self) -> Option<&HashMap<K, Value<K>>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable nested mapping
    pub fn as_map_mut(&mut self) -> Option<&mut HashMap<K, Value<K>>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.type_name(),
        }
    }
}

impl<K: Eq + Hash> Nested<HashMap<K, Value<K>>> for Value<K> {
    fn as_mapping(&self) -> Option<&HashMap<K, Value<K>>> {
        self.as_map()
    }

    fn as_mapping_mut(&mut self) -> Option<&mut HashMap<K, Value<K>>> {
        self.as_map_mut()
    }

    fn from_mapping(map: HashMap<K, Value<K>>) -> Self {
        Value::Map(map)
    }

    fn null() -> Self {
        Value::Null
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn from_records(records: Vec<(String, Self)>) -> Self {
        Value::Records(
            records
                .into_iter()
                .map(|(key, value)| Record { key, value })
                .collect(),
        )
    }
}

impl<K: Eq + Hash + fmt::Display> fmt::Display for Value<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Records(records) => {
                write!(f, "[")?;
                for (i, record) in records.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{{key: {}, value: {}}}", record.key, record.value)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations for common types
impl<K: Eq + Hash> From<bool> for Value<K> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<K: Eq + Hash> From<i64> for Value<K> {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl<K: Eq + Hash> From<i32> for Value<K> {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl<K: Eq + Hash> From<i16> for Value<K> {
    fn from(value: i16) -> Self {
        Value::Int(value.into())
    }
}

impl<K: Eq + Hash> From<i8> for Value<K> {
    fn from(value: i8) -> Self {
        Value::Int(value.into())
    }
}

impl<K: Eq + Hash> From<u32> for Value<K> {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl<K: Eq + Hash> From<f64> for Value<K> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<K: Eq + Hash> From<f32> for Value<K> {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl<K: Eq + Hash> From<char> for Value<K> {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl<K: Eq + Hash> From<String> for Value<K> {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<K: Eq + Hash> From<&str> for Value<K> {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<K: Eq + Hash> From<Vec<Value<K>>> for Value<K> {
    fn from(value: Vec<Value<K>>) -> Self {
        Value::List(value)
    }
}

impl<K: Eq + Hash> From<HashMap<K, Value<K>>> for Value<K> {
    fn from(value: HashMap<K, Value<K>>) -> Self {
        Value::Map(value)
    }
}

// TryFrom implementations back the typed accessors (`get_as`, `get_or`)
impl<K: Eq + Hash> TryFrom<&Value<K>> for bool {
    type Error = Error;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| value.mismatch("bool"))
    }
}

impl<K: Eq + Hash> TryFrom<&Value<K>> for i64 {
    type Error = Error;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| value.mismatch("i64"))
    }
}

macro_rules! narrow_int {
    ($($ty:ty),*) => {
        $(
            impl<K: Eq + Hash> TryFrom<&Value<K>> for $ty {
                type Error = Error;

                fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
                    value
                        .as_int()
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| value.mismatch(stringify!($ty)))
                }
            }
        )*
    };
}

narrow_int!(i32, i16, i8);

impl<K: Eq + Hash> TryFrom<&Value<K>> for f64 {
    type Error = Error;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| value.mismatch("f64"))
    }
}

impl<K: Eq + Hash> TryFrom<&Value<K>> for f32 {
    type Error = Error;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value
            .as_float()
            .map(|f| f as f32)
            .ok_or_else(|| value.mismatch("f32"))
    }
}

impl<K: Eq + Hash> TryFrom<&Value<K>> for String {
    type Error = Error;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| value.mismatch("String"))
    }
}

impl<'a, K: Eq + Hash> TryFrom<&'a Value<K>> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value<K>) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| value.mismatch("&str"))
    }
}

impl<K: Eq + Hash> TryFrom<&Value<K>> for char {
    type Error = Error;

    fn try_from(value: &Value<K>) -> Result<Self, Self::Error> {
        let mut chars = value.as_text().unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(value.mismatch("char")),
        }
    }
}

// PartialEq implementations for comparing Value with other types
impl<K: Eq + Hash> PartialEq<str> for Value<K> {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl<K: Eq + Hash> PartialEq<&str> for Value<K> {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl<K: Eq + Hash> PartialEq<String> for Value<K> {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl<K: Eq + Hash> PartialEq<i64> for Value<K> {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl<K: Eq + Hash> PartialEq<i32> for Value<K> {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(i64::from(*other))
    }
}

impl<K: Eq + Hash> PartialEq<f64> for Value<K> {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(f) if f == other)
    }
}

impl<K: Eq + Hash> PartialEq<bool> for Value<K> {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

// Reverse implementations for symmetry
impl<K: Eq + Hash> PartialEq<Value<K>> for &str {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}

impl<K: Eq + Hash> PartialEq<Value<K>> for String {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}

impl<K: Eq + Hash> PartialEq<Value<K>> for i64 {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}

impl<K: Eq + Hash> PartialEq<Value<K>> for i32 {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}

impl<K: Eq + Hash> PartialEq<Value<K>> for f64 {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}

impl<K: Eq + Hash> PartialEq<Value<K>> for bool {
    fn eq(&self, other: &Value<K>) -> bool {
        other == self
    }
}
