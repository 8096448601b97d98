//! `serde_json` support.
//!
//! `serde_json::Map<String, serde_json::Value>` is a [`Mapping`] and
//! `serde_json::Value` is its [`Nested`] value, so JSON objects can be read and
//! written with dot paths directly:
//!
//! ```
//! use serde_json::json;
//!
//! let mut doc = json!({"server": {"port": 8080}});
//! let root = doc.as_object_mut().unwrap();
//!
//! dotdot::put("server.host", json!("localhost"), root)?;
//! assert_eq!(dotdot::get("server.port", root)?, Some(&json!(8080)));
//! assert_eq!(doc["server"]["host"], "localhost");
//! # Ok::<(), dotdot::Error>(())
//! ```
//!
//! Key/value records are encoded as an array of `{"key": .., "value": ..}`
//! objects. Conversions between [`crate::Value`] and `serde_json::Value` are
//! provided for string-keyed trees. JSON integers above `i64::MAX` become
//! [`crate::Value::Text`] holding their exact digits, so they convert back as
//! JSON strings.

use std::collections::HashMap;

use serde_json::{Map, Number, Value as Json};

use crate::{
    mapping::{Mapping, Nested},
    value::{Record, Value},
};

impl Mapping for Map<String, Json> {
    type Key = String;
    type Value = Json;

    fn lookup(&self, key: &String) -> Option<&Json> {
        self.get(key)
    }

    fn lookup_mut(&mut self, key: &String) -> Option<&mut Json> {
        self.get_mut(key)
    }

    fn store(&mut self, key: String, value: Json) -> Option<Json> {
        self.insert(key, value)
    }

    fn get_or_insert_with<F: FnOnce() -> Json>(&mut self, key: String, default: F) -> &mut Json {
        self.entry(key).or_insert_with(default)
    }

    fn entries(&self) -> impl Iterator<Item = (&String, &Json)> {
        self.iter()
    }

    fn len(&self) -> usize {
        Map::len(self)
    }
}

impl Nested<Map<String, Json>> for Json {
    fn as_mapping(&self) -> Option<&Map<String, Json>> {
        self.as_object()
    }

    fn as_mapping_mut(&mut self) -> Option<&mut Map<String, Json>> {
        self.as_object_mut()
    }

    fn from_mapping(map: Map<String, Json>) -> Self {
        Json::Object(map)
    }

    fn null() -> Self {
        Json::Null
    }

    fn is_null(&self) -> bool {
        Json::is_null(self)
    }

    fn from_records(records: Vec<(String, Self)>) -> Self {
        Json::Array(
            records
                .into_iter()
                .map(|(key, value)| {
                    let mut record = Map::new();
                    record.insert("key".to_string(), Json::String(key));
                    record.insert("value".to_string(), value);
                    Json::Object(record)
                })
                .collect(),
        )
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None if n.is_u64() => Value::Text(n.to_string()),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<HashMap<_, _>>(),
            ),
        }
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(n) => Json::Number(n.into()),
            Value::Float(f) => Number::from_f64(f).map(Json::Number).unwrap_or(Json::Null),
            Value::Text(s) => Json::String(s),
            Value::List(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Records(records) => <Json as Nested<Map<String, Json>>>::from_records(
                records
                    .into_iter()
                    .map(|Record { key, value }| (key, Json::from(value)))
                    .collect(),
            ),
            Value::Map(map) => Json::Object(map.into_iter().map(|(k, v)| (k, Json::from(v))).collect()),
        }
    }
}
