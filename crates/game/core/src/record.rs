//! Character and item documents as the core sees them.
//!
//! Hosts own storage; these types are read from (and written back to) the raw
//! JSON the host hands over. Reading is lenient throughout.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::attributes::{self, ATTRIBUTES_FIELD, AttributeKey, AttributeSet};
use crate::coerce;

/// Default compendium image for items without one.
pub const DEFAULT_ITEM_IMG: &str = "icons/svg/item-bag.svg";

/// A character with canonical attributes.
///
/// `extra` keeps every other member of the raw record untouched so that
/// writing the record back only changes the attribute structure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterRecord {
    pub name: String,
    pub attributes: AttributeSet,
    pub items: Vec<ItemRecord>,
    pub extra: Map<String, Value>,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self {
            name: name.into(),
            attributes,
            ..Self::default()
        }
    }

    /// Read a raw host record, normalizing its attributes.
    pub fn from_value(raw: &Value) -> Self {
        let name = coerce::text(raw.get("name"));
        let attributes = attributes::normalize(raw.get(ATTRIBUTES_FIELD));
        let items = raw
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(ItemRecord::from_value).collect())
            .unwrap_or_default();
        let extra = raw
            .as_object()
            .map(|object| {
                object
                    .iter()
                    .filter(|(key, _)| !matches!(key.as_str(), "name" | ATTRIBUTES_FIELD | "items"))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name,
            attributes,
            items,
            extra,
        }
    }

    /// Write the record back in host shape with canonical attributes.
    pub fn to_value(&self) -> Value {
        let mut object = self.extra.clone();
        object.insert("name".to_string(), Value::String(self.name.clone()));
        object.insert(
            ATTRIBUTES_FIELD.to_string(),
            attributes::normalize::attributes_to_value(&self.attributes),
        );
        if !self.items.is_empty() {
            let items = self.items.iter().map(ItemRecord::to_value).collect();
            object.insert("items".to_string(), Value::Array(items));
        }
        Value::Object(object)
    }

    /// Number of chits the named attribute throws.
    pub fn chit_count(&self, key: AttributeKey) -> f64 {
        self.attributes.get(key).magnitude
    }
}

/// Item category guessed for extracted compendium entries.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    Armor,
    Weapon,
    #[default]
    Item,
}

/// Rules text attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemData {
    pub description: String,
    pub cost: String,
    pub effect: String,
    pub tags: Vec<String>,
}

/// An item document, in the shape compendium packs store it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Free-form item type; hosts may carry types beyond [`ItemKind`].
    #[serde(rename = "type")]
    pub kind: String,
    pub img: String,
    pub system: ItemData,
}

impl ItemRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.to_string(),
            img: DEFAULT_ITEM_IMG.to_string(),
            system: ItemData::default(),
        }
    }

    /// Lenient read of a raw item; missing or odd fields become empty.
    pub fn from_value(raw: &Value) -> Self {
        let system = raw.get("system");
        let tags = system
            .and_then(|system| system.get("tags"))
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: coerce::text(raw.get("_id")),
            name: coerce::text(raw.get("name")),
            kind: coerce::text(raw.get("type")),
            img: coerce::text(raw.get("img")),
            system: ItemData {
                description: coerce::text(system.and_then(|s| s.get("description"))),
                cost: coerce::text(system.and_then(|s| s.get("cost"))),
                effect: coerce::text(system.and_then(|s| s.get("effect"))),
                tags,
            },
        }
    }

    /// Write the item in compendium shape.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "_id": self.id,
            "name": self.name,
            "type": self.kind,
            "img": self.img,
            "system": {
                "description": self.system.description,
                "cost": self.system.cost,
                "effect": self.system.effect,
                "tags": self.system.tags,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeEntry;
    use serde_json::json;

    #[test]
    fn reads_raw_record_and_keeps_opaque_members() {
        let raw = json!({
            "name": "Gorb",
            "attributes": { "muscles": { "magnitude": 3 } },
            "items": [{ "_id": "a1", "name": "Stick", "type": "weapon" }],
            "biography": "lives in a bucket",
        });
        let record = CharacterRecord::from_value(&raw);

        assert_eq!(record.name, "Gorb");
        assert_eq!(record.attributes.muscles, AttributeEntry::new(3.0, 0.0));
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].kind, "weapon");
        assert_eq!(record.extra.get("biography"), Some(&json!("lives in a bucket")));
        assert_eq!(record.chit_count(AttributeKey::Muscles), 3.0);
    }

    #[test]
    fn writes_back_canonical_attributes() {
        let raw = json!({ "name": "Gorb", "attributes": { "junk": 1 }, "level": 2 });
        let value = CharacterRecord::from_value(&raw).to_value();

        assert_eq!(value["level"], 2);
        assert!(value["attributes"].get("junk").is_none());
        assert_eq!(value["attributes"]["brains"], json!({ "magnitude": 0, "units": 0 }));
    }

    #[test]
    fn items_write_back_without_nulls() {
        let raw = json!({
            "name": "Gorb",
            "items": [
                { "_id": "a1", "name": "Stick", "type": "weapon", "system": { "tags": ["oak"] } },
                { "name": "Lid" },
            ],
        });
        let record = CharacterRecord::from_value(&raw);
        let value = record.to_value();
        let items = value["items"].as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(Value::is_object));
        assert_eq!(items[0]["system"]["tags"], json!(["oak"]));
        assert_eq!(CharacterRecord::from_value(&value).items, record.items);
    }

    #[test]
    fn item_value_matches_serde_shape() {
        let mut item = ItemRecord::new("0123456789abcdef", "Mallet", ItemKind::Weapon);
        item.system.cost = "5 grubs".to_string();

        assert_eq!(item.to_value(), serde_json::to_value(&item).unwrap());
    }

    #[test]
    fn lenient_item_read() {
        let item = ItemRecord::from_value(&json!({
            "name": "Bucket Helm",
            "type": "armor",
            "system": { "cost": 4, "tags": ["head", 7] },
        }));

        assert_eq!(item.name, "Bucket Helm");
        assert_eq!(item.system.cost, "4");
        assert_eq!(item.system.tags, vec!["head".to_string()]);
        assert_eq!(item.id, "");
    }

    #[test]
    fn item_serializes_in_compendium_shape() {
        let item = ItemRecord::new("0123456789abcdef", "Mallet", ItemKind::Weapon);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["_id"], "0123456789abcdef");
        assert_eq!(value["type"], "weapon");
        assert_eq!(value["img"], DEFAULT_ITEM_IMG);
        assert_eq!(value["system"]["tags"], json!([]));
    }
}
