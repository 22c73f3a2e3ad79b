//! Graph data model: entities, the JSON-LD document, and the indexed [`ModGraph`].

use crate::index::{Indices, build_indices};
use crate::schema;
use crate::store::EntityStore;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Primary type assigned to entities whose `@type` list is empty.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// A JSON object's members in document order.
pub type Attributes = IndexMap<String, Value>;

/// A named resource node (status effect, weapon, class, trait, ...).
///
/// The typed fields are lenient views of the source object: a member of the
/// wrong JSON shape reads as absent. The object itself is kept untouched in
/// `attributes`, and serialization writes it back in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    /// `@id`; empty when missing.
    pub id: String,
    /// `@type` tags; the first is the primary type, the rest are secondary classification.
    pub types: Vec<String>,
    pub name: String,
    /// Names of the entities this one depends on. May name entities that do not exist.
    pub depends_on: Vec<String>,
    pub description: Option<String>,
    pub element: Option<String>,
    pub scaling: Option<String>,
    /// The source object, every member included, in document order.
    pub attributes: Attributes,
}

impl Entity {
    /// Create a bare entity with the given name and no types or dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Read the typed fields out of a JSON-LD node object.
    pub fn from_attributes(attributes: Attributes) -> Self {
        Self {
            id: schema::text(attributes.get("@id")).unwrap_or_default(),
            types: schema::string_or_list(attributes.get("@type")),
            name: schema::text(attributes.get("name")).unwrap_or_default(),
            depends_on: schema::string_list(attributes.get("depends_on")),
            description: schema::text(attributes.get("description")),
            element: schema::text(attributes.get("element")),
            scaling: schema::text(attributes.get("scaling")),
            attributes,
        }
    }

    /// The entity as a JSON-LD object: the source members in document order,
    /// then any typed field that is set but has no source member (entities
    /// built in code rather than loaded).
    pub fn to_attributes(&self) -> Attributes {
        let typed = [
            ("@id", (!self.id.is_empty()).then(|| Value::from(self.id.as_str()))),
            ("@type", (!self.types.is_empty()).then(|| Value::from(self.types.clone()))),
            ("name", (!self.name.is_empty()).then(|| Value::from(self.name.as_str()))),
            (
                "depends_on",
                (!self.depends_on.is_empty()).then(|| Value::from(self.depends_on.clone())),
            ),
            ("description", self.description.as_deref().map(Value::from)),
            ("element", self.element.as_deref().map(Value::from)),
            ("scaling", self.scaling.as_deref().map(Value::from)),
        ];

        let mut object = self.attributes.clone();
        for (key, value) in typed {
            if let Some(value) = value
                && !object.contains_key(key)
            {
                object.insert(key.to_string(), value);
            }
        }
        object
    }

    /// First type tag, or [`UNKNOWN_TYPE`] when there is none.
    pub fn primary_type(&self) -> &str {
        self.types.first().map_or(UNKNOWN_TYPE, String::as_str)
    }

    /// Type tags after the primary one.
    pub fn secondary_types(&self) -> &[String] {
        self.types.get(1..).unwrap_or_default()
    }

    /// Roots are entities that declare no dependencies.
    pub fn is_root(&self) -> bool {
        self.depends_on.is_empty()
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_attributes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Entity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Attributes::deserialize(deserializer).map(Self::from_attributes)
    }
}

/// A JSON-LD-shaped graph document: `{ "@context": {...}, "@graph": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "@context", default, deserialize_with = "schema::lenient_object")]
    pub context: IndexMap<String, Value>,
    #[serde(rename = "@graph", default, deserialize_with = "schema::lenient_entities")]
    pub graph: Vec<Entity>,
}

/// One loaded document with its derived indices.
///
/// Built once per load and never mutated afterwards, so every query takes
/// `&ModGraph` and a new document means a new value.
#[derive(Debug, Clone)]
pub struct ModGraph {
    context: IndexMap<String, Value>,
    store: EntityStore,
    indices: Indices,
}

impl ModGraph {
    pub fn from_document(document: Document) -> Self {
        let Document { context, graph } = document;
        let store = EntityStore::new(graph);
        let indices = build_indices(store.entities());
        tracing::debug!(
            entities = store.len(),
            types = indices.by_type.len(),
            referenced = indices.dependents.len(),
            context_terms = context.len(),
            "indexed graph document"
        );
        Self {
            context,
            store,
            indices,
        }
    }

    /// Build a graph from bare entities with an empty `@context`.
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self::from_document(Document {
            context: IndexMap::new(),
            graph: entities,
        })
    }

    /// All entities in document order.
    pub fn entities(&self) -> &[Entity] {
        self.store.entities()
    }

    pub fn entity_count(&self) -> usize {
        self.store.len()
    }

    pub fn context(&self) -> &IndexMap<String, Value> {
        &self.context
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.store.get(name)
    }

    /// Entities with the given primary type, in document order.
    pub fn list_by_type(&self, primary_type: &str) -> Vec<&Entity> {
        self.indices
            .by_type
            .get(primary_type)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&i| self.store.entities().get(i))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Distinct primary types in first-seen order.
    pub fn primary_types(&self) -> impl Iterator<Item = &str> {
        self.indices.by_type.keys().map(String::as_str)
    }

    /// Declared dependencies of `name`. Empty for unknown names.
    pub fn direct_dependencies(&self, name: &str) -> &[String] {
        self.get_entity(name)
            .map(|entity| entity.depends_on.as_slice())
            .unwrap_or_default()
    }

    /// Names of entities that declare a dependency on `name`.
    ///
    /// Empty for names with no entity, even when something references them;
    /// the raw reverse index in [`Indices::dependents`] keeps those entries.
    pub fn direct_dependents(&self, name: &str) -> &[String] {
        if !self.store.contains(name) {
            return &[];
        }
        self.indices
            .dependents
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Entities with no declared dependencies, in document order.
    pub fn roots(&self) -> impl Iterator<Item = &Entity> {
        self.entities().iter().filter(|e| e.is_root())
    }
}
