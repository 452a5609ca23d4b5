//! Serde structs for source collections and compiled outputs.
//!
//! Source files are read into [`Collection`]s. Keys this crate does not know
//! about are carried through untouched, both on collections and on individual
//! difficulties, so compiled files lose nothing but the placeholder entry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::rating::{Rating, SortKey};

// ===========================================================================
// Difficulties
// ===========================================================================

/// One rated difficulty entry.
///
/// Every required field is optional here so that an incomplete entry still
/// loads; [`crate::validation`] reports what is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Opaque; any JSON value, `null` included, counts as present.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub decal_id: Option<Value>,
    /// An explicit `null` counts as present.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Rating>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub overview: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl Difficulty {
    /// A fully populated entry with no extra keys.
    pub fn new(
        name: impl Into<String>,
        decal_id: impl Into<Value>,
        rating: impl Into<Rating>,
        overview: impl Into<Value>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            decal_id: Some(decal_id.into()),
            rating: Some(rating.into()),
            overview: Some(overview.into()),
            extra: Map::new(),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.rating.as_ref().map_or(SortKey::MISSING, Rating::sort_key)
    }

    /// Copy this entry for the combined output, tagged with its owning class.
    pub fn tagged(&self, class_id: &str, class_name: &str) -> TaggedDifficulty {
        let mut difficulty = self.clone();
        difficulty.extra.remove("class_id");
        difficulty.extra.remove("class_name");
        TaggedDifficulty {
            difficulty,
            class_id: class_id.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

/// A difficulty in `all.json`, carrying the class it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedDifficulty {
    #[serde(flatten)]
    pub difficulty: Difficulty,
    pub class_id: String,
    pub class_name: String,
}

// ===========================================================================
// Collections
// ===========================================================================

/// Which kind of source file a collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Class,
    Chain,
}

impl CollectionKind {
    pub fn id_key(self) -> &'static str {
        match self {
            CollectionKind::Class => "class_id",
            CollectionKind::Chain => "chain_id",
        }
    }

    pub fn name_key(self) -> &'static str {
        match self {
            CollectionKind::Class => "class_name",
            CollectionKind::Chain => "chain_name",
        }
    }

    /// Lower-case noun used in messages and template text.
    pub fn label(self) -> &'static str {
        match self {
            CollectionKind::Class => "class",
            CollectionKind::Chain => "chain",
        }
    }
}

/// A class or chain file.
///
/// `meta` holds every top-level key other than `difficulties`, in input
/// order, which keeps `difficulties` last when the file is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(flatten)]
    pub meta: Map<String, Value>,
    #[serde(default)]
    pub difficulties: Vec<Difficulty>,
}

impl Collection {
    /// An empty collection with its id, display name and description set.
    pub fn new(kind: CollectionKind, id: &str, name: &str, description: &str) -> Self {
        let mut meta = Map::new();
        meta.insert(kind.id_key().to_string(), Value::from(id));
        meta.insert(kind.name_key().to_string(), Value::from(name));
        meta.insert("description".to_string(), Value::from(description));
        Self {
            meta,
            difficulties: Vec::new(),
        }
    }

    /// The collection id, or `fallback` (the file stem) when absent.
    pub fn id(&self, kind: CollectionKind, fallback: &str) -> String {
        self.meta_string(kind.id_key()).unwrap_or_else(|| fallback.to_string())
    }

    /// The display name, or `fallback` (the file stem) when absent.
    pub fn display_name(&self, kind: CollectionKind, fallback: &str) -> String {
        self.meta_string(kind.name_key())
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn description(&self) -> String {
        self.meta_string("description").unwrap_or_default()
    }

    fn meta_string(&self, key: &str) -> Option<String> {
        match self.meta.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

// ===========================================================================
// Index and combined outputs
// ===========================================================================

/// One class row in `index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub class_id: String,
    pub class_name: String,
    pub description: String,
    pub difficulty_count: usize,
    pub file: String,
}

/// One chain row in `index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSummary {
    pub chain_id: String,
    pub chain_name: String,
    pub description: String,
    pub difficulty_count: usize,
    pub file: String,
}

/// Contents of `index.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Index {
    pub total_difficulties: usize,
    pub total_classes: usize,
    pub total_chains: usize,
    pub classes: Vec<ClassSummary>,
    pub chains: Vec<ChainSummary>,
}

/// Contents of `all.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllDifficulties {
    pub total: usize,
    pub difficulties: Vec<TaggedDifficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn difficulty_from_json() {
        let d: Difficulty = serde_json::from_value(json!({
            "name": "Wall Hop",
            "decal_id": "rbxassetid://1",
            "rating": 3,
            "overview": "Hop the wall."
        }))
        .unwrap();
        assert_eq!(d.name.as_deref(), Some("Wall Hop"));
        assert_eq!(d.rating, Some(Rating::from(3)));
        assert!(d.extra.is_empty());
    }

    #[test]
    fn missing_and_null_rating_differ() {
        let missing: Difficulty = serde_json::from_value(json!({ "name": "a" })).unwrap();
        assert_eq!(missing.rating, None);

        let null: Difficulty =
            serde_json::from_value(json!({ "name": "a", "rating": null })).unwrap();
        assert_eq!(null.rating, Some(Rating::Other(Value::Null)));
    }

    #[test]
    fn opaque_fields_accept_any_value() {
        let d: Difficulty = serde_json::from_value(json!({
            "name": "Asset",
            "decal_id": 123456,
            "rating": 2,
            "overview": null
        }))
        .unwrap();
        assert_eq!(d.decal_id, Some(json!(123456)));
        assert_eq!(d.overview, Some(Value::Null));

        let out = serde_json::to_value(&d).unwrap();
        assert_eq!(out["decal_id"], 123456);
        assert!(out.get("overview").is_some_and(Value::is_null));
    }

    #[test]
    fn extra_keys_survive_round_trip() {
        let input = json!({
            "name": "Spiral",
            "decal_id": "rbxassetid://2",
            "rating": "13 (flow)",
            "overview": "Climb.",
            "creator": "someone",
            "tags": ["long"]
        });
        let d: Difficulty = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(d.extra.len(), 2);
        assert_eq!(serde_json::to_value(&d).unwrap(), input);
    }

    #[test]
    fn missing_fields_are_not_serialized() {
        let d = Difficulty {
            name: Some("only a name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({ "name": "only a name" })
        );
    }

    #[test]
    fn tagged_difficulty_flattens() {
        let d = Difficulty::new("Ladder", "rbxassetid://3", 1, "Climb it.");
        let tagged = d.tagged("class_1", "Class 1");
        assert_eq!(
            serde_json::to_value(&tagged).unwrap(),
            json!({
                "name": "Ladder",
                "decal_id": "rbxassetid://3",
                "rating": 1,
                "overview": "Climb it.",
                "class_id": "class_1",
                "class_name": "Class 1"
            })
        );
    }

    #[test]
    fn tagging_replaces_existing_class_keys() {
        let mut d = Difficulty::new("Ladder", "rbxassetid://3", 1, "Climb it.");
        d.extra.insert("class_id".to_string(), json!("stale"));
        let tagged = d.tagged("class_1", "Class 1");
        assert!(tagged.difficulty.extra.is_empty());
        let value = serde_json::to_value(&tagged).unwrap();
        assert_eq!(value["class_id"], "class_1");
    }

    #[test]
    fn collection_keeps_meta_order_and_difficulties_last() {
        let text = r#"{
            "class_id": "class_2",
            "class_name": "Class 2",
            "description": "Second.",
            "difficulties": [],
            "color": "blue"
        }"#;
        let c: Collection = serde_json::from_str(text).unwrap();
        let keys: Vec<&str> = c.meta.keys().map(String::as_str).collect();
        assert_eq!(keys, ["class_id", "class_name", "description", "color"]);

        let out = serde_json::to_string(&c).unwrap();
        assert!(out.ends_with("\"difficulties\":[]}"));
    }

    #[test]
    fn collection_fallbacks() {
        let c: Collection = serde_json::from_str("{}").unwrap();
        assert!(c.difficulties.is_empty());
        assert_eq!(c.id(CollectionKind::Class, "stem"), "stem");
        assert_eq!(c.display_name(CollectionKind::Chain, "stem"), "stem");
        assert_eq!(c.description(), "");
    }

    #[test]
    fn collection_accessors_use_kind_keys() {
        let c = Collection::new(CollectionKind::Chain, "gar_chain", "Gar Chain", "Gars.");
        assert_eq!(c.id(CollectionKind::Chain, "x"), "gar_chain");
        assert_eq!(c.display_name(CollectionKind::Chain, "x"), "Gar Chain");
        assert_eq!(c.id(CollectionKind::Class, "x"), "x");
        assert_eq!(c.description(), "Gars.");
    }
}
