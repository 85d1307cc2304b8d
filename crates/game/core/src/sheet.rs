//! Sheet options and view data.
//!
//! The host renders sheets from templates; the core only decides the window
//! options and assembles the data the templates read.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::attributes::AttributeSet;
use crate::record::{CharacterRecord, ItemRecord};

/// A tab group on a sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabConfig {
    pub nav_selector: &'static str,
    pub content_selector: &'static str,
    pub initial: &'static str,
}

/// Window and template options for a sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SheetOptions {
    pub classes: Vec<&'static str>,
    pub width: u32,
    pub height: u32,
    pub tabs: Vec<TabConfig>,
    pub template: &'static str,
}

impl SheetOptions {
    pub fn actor() -> Self {
        Self {
            classes: vec!["repugnant", "sheet", "actor"],
            width: 680,
            height: 720,
            tabs: vec![TabConfig {
                nav_selector: ".sheet-tabs",
                content_selector: ".sheet-body",
                initial: "stats",
            }],
            template: "templates/actor/actor-sheet.html",
        }
    }

    pub fn item() -> Self {
        Self {
            classes: vec!["repugnant", "sheet", "item"],
            width: 520,
            height: 420,
            tabs: Vec::new(),
            template: "templates/item/item-sheet.html",
        }
    }
}

/// Data an actor sheet template renders.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActorSheetData {
    pub name: String,
    pub attributes: AttributeSet,
    pub items: Vec<ItemRecord>,
    /// Items grouped by their type; order within a group follows `items`.
    pub items_by_type: BTreeMap<String, Vec<ItemRecord>>,
}

impl ActorSheetData {
    pub fn assemble(actor: &CharacterRecord) -> Self {
        Self {
            name: actor.name.clone(),
            attributes: actor.attributes,
            items: actor.items.clone(),
            items_by_type: group_by_type(&actor.items),
        }
    }
}

/// Data an item sheet template renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemSheetData {
    pub item: ItemRecord,
}

impl ItemSheetData {
    pub fn assemble(item: &ItemRecord) -> Self {
        Self { item: item.clone() }
    }
}

fn group_by_type(items: &[ItemRecord]) -> BTreeMap<String, Vec<ItemRecord>> {
    let mut groups: BTreeMap<String, Vec<ItemRecord>> = BTreeMap::new();
    for item in items {
        groups.entry(item.kind.clone()).or_default().push(item.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ItemKind;

    #[test]
    fn groups_items_by_type_in_order() {
        let mut actor = CharacterRecord::new("Gorb", AttributeSet::default());
        actor.items = vec![
            ItemRecord::new("1", "Mallet", ItemKind::Weapon),
            ItemRecord::new("2", "Pot Lid", ItemKind::Armor),
            ItemRecord::new("3", "Club", ItemKind::Weapon),
        ];
        let data = ActorSheetData::assemble(&actor);

        let weapons: Vec<_> = data.items_by_type["weapon"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(weapons, ["Mallet", "Club"]);
        assert_eq!(data.items_by_type["armor"].len(), 1);
        assert!(!data.items_by_type.contains_key("item"));
        assert_eq!(data.items.len(), 3);
    }

    #[test]
    fn actor_without_items_has_no_groups() {
        let data = ActorSheetData::assemble(&CharacterRecord::default());
        assert!(data.items_by_type.is_empty());
    }

    #[test]
    fn sheet_options() {
        let actor = SheetOptions::actor();
        assert_eq!((actor.width, actor.height), (680, 720));
        assert_eq!(actor.tabs[0].initial, "stats");

        let item = SheetOptions::item();
        assert_eq!(item.classes, ["repugnant", "sheet", "item"]);
        assert!(item.tabs.is_empty());
    }
}
