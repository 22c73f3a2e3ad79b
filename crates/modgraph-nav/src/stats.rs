//! Graph-wide metrics, hub detection, and per-entity statistics.

use crate::traverse::{transitive_ancestors, transitive_reach};
use indexmap::IndexMap;
use modgraph_core::graph::ModGraph;
use serde::Serialize;

/// A dependency name and how many declarations reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubEntry {
    pub name: String,
    pub dependents: usize,
}

/// Whole-graph summary, computed once per loaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalStats {
    pub total_entities: usize,
    /// Sum of all `depends_on` lengths, dangling references included.
    pub total_edges: usize,
    pub type_count: usize,
    pub root_count: usize,
    pub top_hub: Option<HubEntry>,
    pub context_term_count: usize,
    /// Entity count per primary type, in first-seen order.
    pub type_counts: Vec<(String, usize)>,
}

/// Statistics shown for one selected entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityStats {
    pub name: String,
    /// First `@type` tag, if the entity exists and has one.
    pub primary_type: Option<String>,
    pub element: Option<String>,
    pub direct_deps: usize,
    pub direct_dependents: usize,
    pub transitive_reach: usize,
    pub transitive_ancestors: usize,
}

/// Rank dependency names by reverse in-degree, highest first.
///
/// Counts accumulate in first-discovery order (entity list order, then
/// `depends_on` order) and the sort is stable, so among equal counts the name
/// referenced earliest in the document comes first.
pub fn hub_ranking(graph: &ModGraph) -> Vec<HubEntry> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for entity in graph.entities() {
        for dep in &entity.depends_on {
            *counts.entry(dep.as_str()).or_default() += 1;
        }
    }

    let mut ranking: Vec<HubEntry> = counts
        .into_iter()
        .map(|(name, dependents)| HubEntry {
            name: name.to_string(),
            dependents,
        })
        .collect();
    ranking.sort_by(|a, b| b.dependents.cmp(&a.dependents));
    ranking
}

/// The `limit` most referenced dependency names.
pub fn top_hubs(graph: &ModGraph, limit: usize) -> Vec<HubEntry> {
    let mut ranking = hub_ranking(graph);
    ranking.truncate(limit);
    ranking
}

pub fn global_stats(graph: &ModGraph) -> GlobalStats {
    let entities = graph.entities();
    let type_counts: Vec<(String, usize)> = graph
        .primary_types()
        .map(|t| (t.to_string(), graph.list_by_type(t).len()))
        .collect();

    GlobalStats {
        total_entities: entities.len(),
        total_edges: entities.iter().map(|e| e.depends_on.len()).sum(),
        type_count: type_counts.len(),
        root_count: graph.roots().count(),
        top_hub: hub_ranking(graph).into_iter().next(),
        context_term_count: graph.context().len(),
        type_counts,
    }
}

/// Statistics for `name`. Unknown names, dangling references included, are
/// isolated nodes and get all-zero counts.
pub fn entity_stats(graph: &ModGraph, name: &str) -> EntityStats {
    let entity = graph.get_entity(name);
    EntityStats {
        name: name.to_string(),
        primary_type: entity.and_then(|e| e.types.first().cloned()),
        element: entity.and_then(|e| e.element.clone()),
        direct_deps: graph.direct_dependencies(name).len(),
        direct_dependents: graph.direct_dependents(name).len(),
        transitive_reach: transitive_reach(graph, name),
        transitive_ancestors: transitive_ancestors(graph, name),
    }
}
