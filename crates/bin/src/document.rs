//! Loading JSON documents and parsing values from the command line.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use serde_json::{Map, Value as Json};
use tracing::debug;

/// A top-level JSON object
pub type Document = Map<String, Json>;

/// Read a JSON object from `path`, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?
    };

    debug!(path = %path.display(), bytes = text.len(), "Loaded document");
    parse_document(&text).map_err(|e| format!("{}: {e}", path.display()).into())
}

fn parse_document(text: &str) -> Result<Document, String> {
    match serde_json::from_str(text).map_err(|e| e.to_string())? {
        Json::Object(map) => Ok(map),
        other => Err(format!(
            "expected a JSON object at the top level, found {}",
            kind(&other)
        )),
    }
}

fn kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

/// Parse a value argument as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Json {
    serde_json::from_str(raw).unwrap_or_else(|_| Json::String(raw.to_string()))
}
