//! Entity store: the raw entity list plus a name-keyed lookup.

use crate::graph::Entity;
use std::collections::HashMap;

/// Owns the entities of one document, in document order.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    /// Name → position in `entities`. Later duplicates overwrite earlier ones.
    by_name: HashMap<String, usize>,
}

impl EntityStore {
    pub fn new(entities: Vec<Entity>) -> Self {
        let mut by_name = HashMap::with_capacity(entities.len());
        for (position, entity) in entities.iter().enumerate() {
            if let Some(previous) = by_name.insert(entity.name.clone(), position) {
                tracing::warn!(
                    name = %entity.name,
                    previous,
                    position,
                    "duplicate entity name; the later entry wins lookups"
                );
            }
        }
        Self { entities, by_name }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).map(|&i| &self.entities[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of entities in the list, duplicates included.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
