//! JSON parsing for graph documents.
//!
//! Optional fields are read leniently: a field of the wrong JSON type is
//! treated as absent instead of failing the whole document. Only input that is
//! not a JSON object at the top level is rejected.

use crate::error::LoadError;
use crate::graph::{Document, Entity};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse a graph document from a JSON string.
pub fn from_json(json: &str) -> Result<Document, LoadError> {
    from_value(serde_json::from_str(json)?)
}

/// Parse a graph document from raw bytes.
pub fn from_slice(bytes: &[u8]) -> Result<Document, LoadError> {
    from_value(serde_json::from_slice(bytes)?)
}

/// Parse a graph document from an already-decoded JSON value.
pub fn from_value(value: Value) -> Result<Document, LoadError> {
    if !value.is_object() {
        return Err(LoadError::Parse(serde::de::Error::custom(
            "graph document must be a JSON object",
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// Serialize one entity back to pretty-printed JSON-LD, members in document order.
pub fn entity_to_json(entity: &Entity) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entity)
}

/// A string member; any other shape reads as absent.
pub(crate) fn text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// A list of strings; non-string members are dropped.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => strings_of(items),
        _ => Vec::new(),
    }
}

/// Like [`string_list`], but a bare string counts as a one-element list
/// (JSON-LD allows `"@type": "Weapon"`).
pub(crate) fn string_or_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => strings_of(items),
        _ => Vec::new(),
    }
}

pub(crate) fn lenient_object<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map.into_iter().collect(),
        _ => IndexMap::new(),
    })
}

pub(crate) fn lenient_entities<'de, D>(deserializer: D) -> Result<Vec<Entity>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        _ => {
            tracing::warn!("@graph is not an array; treating the document as empty");
            return Ok(Vec::new());
        }
    };

    let mut entities = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(object) => {
                entities.push(Entity::from_attributes(object.into_iter().collect()));
            }
            _ => tracing::warn!(position, "skipping @graph member that is not an object"),
        }
    }
    Ok(entities)
}

fn strings_of(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
