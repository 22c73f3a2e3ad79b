//! Derived indices: reverse dependencies and primary-type grouping.

use crate::graph::Entity;
use indexmap::IndexMap;

/// Indices computed in one pass over the entity list.
#[derive(Debug, Clone, Default)]
pub struct Indices {
    /// Dependency name → names of the entities declaring it, in discovery order.
    /// Keys include dangling names; repeated declarations produce repeated entries.
    pub dependents: IndexMap<String, Vec<String>>,
    /// Primary type → positions in the entity list, in document order.
    pub by_type: IndexMap<String, Vec<usize>>,
}

/// Build the reverse-dependency map and the type grouping.
pub fn build_indices(entities: &[Entity]) -> Indices {
    let mut indices = Indices::default();
    for (position, entity) in entities.iter().enumerate() {
        for dep in &entity.depends_on {
            indices
                .dependents
                .entry(dep.clone())
                .or_default()
                .push(entity.name.clone());
        }
        indices
            .by_type
            .entry(entity.primary_type().to_string())
            .or_default()
            .push(position);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UNKNOWN_TYPE;

    fn entity(name: &str, types: &[&str], deps: &[&str]) -> Entity {
        Entity {
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
            depends_on: deps.iter().map(|d| d.to_string()).collect(),
            ..Entity::default()
        }
    }

    #[test]
    fn test_dependents_in_discovery_order() {
        let indices = build_indices(&[
            entity("Burn", &["StatusEffect"], &[]),
            entity("Sword", &["Weapon"], &["Burn"]),
            entity("Torch", &["Weapon"], &["Burn"]),
        ]);
        assert_eq!(indices.dependents["Burn"], vec!["Sword", "Torch"]);
    }

    #[test]
    fn test_repeated_dependency_is_recorded_twice() {
        let indices = build_indices(&[entity("Sword", &["Weapon"], &["Burn", "Burn"])]);
        assert_eq!(indices.dependents["Burn"], vec!["Sword", "Sword"]);
    }

    #[test]
    fn test_dangling_dependency_gets_an_entry() {
        let indices = build_indices(&[entity("Sword", &["Weapon"], &["GhostBuff"])]);
        assert_eq!(indices.dependents["GhostBuff"], vec!["Sword"]);
    }

    #[test]
    fn test_group_by_primary_type() {
        let indices = build_indices(&[
            entity("Sword", &["Weapon", "Melee"], &[]),
            entity("Burn", &["StatusEffect"], &[]),
            entity("Bow", &["Weapon", "Ranged"], &[]),
            entity("Mystery", &[], &[]),
        ]);
        let types: Vec<&str> = indices.by_type.keys().map(String::as_str).collect();
        assert_eq!(types, vec!["Weapon", "StatusEffect", UNKNOWN_TYPE]);
        assert_eq!(indices.by_type["Weapon"], vec![0, 2]);
        assert_eq!(indices.by_type[UNKNOWN_TYPE], vec![3]);
    }
}
