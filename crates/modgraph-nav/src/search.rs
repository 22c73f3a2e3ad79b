//! Substring search over entities, grouped by primary type.

use indexmap::IndexMap;
use modgraph_core::graph::{Entity, ModGraph};
use serde::Serialize;

/// Primary types listed first, in this order, when grouping results.
pub const DEFAULT_TYPE_ORDER: &[&str] = &[
    "StatusEffect",
    "Weapon",
    "Class",
    "Trait",
    "Enchantment",
];

/// Matching entities that share one primary type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeGroup<'a> {
    pub primary_type: String,
    /// Sorted by name, case-insensitively.
    pub entities: Vec<&'a Entity>,
}

/// Case-insensitive substring test against name, primary type, every type
/// tag, and element. An empty query matches everything.
pub fn matches(entity: &Entity, query: &str) -> bool {
    let query = query.to_lowercase();
    query.is_empty() || matches_lowered(entity, &query)
}

fn matches_lowered(entity: &Entity, query: &str) -> bool {
    let hit = |text: &str| text.to_lowercase().contains(query);
    hit(entity.name.as_str())
        || hit(entity.primary_type())
        || entity.element.as_deref().is_some_and(hit)
        || entity.types.iter().any(|t| hit(t.as_str()))
}

/// Search the graph and group hits by primary type.
///
/// Groups for the types in `type_order` come first, in that order; any other
/// primary types follow in first-seen order. Types with no hits are omitted.
pub fn search<'a, S: AsRef<str>>(
    graph: &'a ModGraph,
    query: &str,
    type_order: &[S],
) -> Vec<TypeGroup<'a>> {
    let query = query.to_lowercase();

    let mut grouped: IndexMap<&str, Vec<&'a Entity>> = IndexMap::new();
    for preferred in type_order {
        grouped.insert(preferred.as_ref(), Vec::new());
    }
    for entity in graph.entities() {
        if query.is_empty() || matches_lowered(entity, &query) {
            grouped
                .entry(entity.primary_type())
                .or_default()
                .push(entity);
        }
    }

    grouped
        .into_iter()
        .filter(|(_, entities)| !entities.is_empty())
        .map(|(primary_type, mut entities)| {
            entities.sort_by_cached_key(|e| e.name.to_lowercase());
            TypeGroup {
                primary_type: primary_type.to_string(),
                entities,
            }
        })
        .collect()
}

/// Total hits across all groups.
pub fn hit_count(groups: &[TypeGroup<'_>]) -> usize {
    groups.iter().map(|g| g.entities.len()).sum()
}
