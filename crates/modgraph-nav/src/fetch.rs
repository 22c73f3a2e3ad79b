//! Entity detail: everything shown when a single entity is selected.

use crate::chain::{Chain, build_chain};
use crate::stats::{EntityStats, entity_stats};
use modgraph_core::graph::{Entity, ModGraph};
use serde::Serialize;
use serde_json::Value;

/// Keys shown in the entity header rather than the property list.
pub const METADATA_KEYS: &[&str] = &["@id", "@type", "name", "depends_on", "description"];

/// One displayable attribute of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub key: String,
    /// `key` with underscores replaced by spaces.
    pub label: String,
    pub value: String,
}

/// Full detail for one entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDetail<'a> {
    pub entity: &'a Entity,
    pub dependencies: &'a [String],
    pub dependents: &'a [String],
    pub properties: Vec<Property>,
    pub stats: EntityStats,
    pub chain: Chain,
}

/// Gather the detail view for `name`, or `None` when no such entity exists.
pub fn fetch<'a>(graph: &'a ModGraph, name: &str) -> Option<EntityDetail<'a>> {
    let entity = graph.get_entity(name)?;
    Some(EntityDetail {
        entity,
        dependencies: entity.depends_on.as_slice(),
        dependents: graph.direct_dependents(name),
        properties: properties(entity),
        stats: entity_stats(graph, name),
        chain: build_chain(graph, name),
    })
}

/// Non-metadata members of the entity's JSON-LD object, in document order.
pub fn properties(entity: &Entity) -> Vec<Property> {
    entity
        .to_attributes()
        .into_iter()
        .filter(|(key, _)| !METADATA_KEYS.contains(&key.as_str()))
        .map(|(key, value)| Property {
            label: key.replace('_', " "),
            value: render_value(&value),
            key,
        })
        .collect()
}

/// Strings render bare; objects and lists render as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
