//! Compendium output for extracted items.

use std::path::Path;

use repugnant_core::ItemRecord;

use crate::loaders::items::ExtractedItem;
use crate::loaders::{ContentConfig, LoadResult, write_file};

/// Writes extracted items as a JSON catalog and a compendium database.
pub struct CompendiumWriter;

impl CompendiumWriter {
    /// Write both outputs named by `config`; returns the compendium records.
    pub fn write(config: &ContentConfig, items: &[ExtractedItem]) -> LoadResult<Vec<ItemRecord>> {
        Self::write_catalog(&config.items_json, items)?;
        let records = Self::records(items, &config.default_img);
        Self::write_db(&config.compendium_db, &records)?;

        tracing::info!(
            count = items.len(),
            catalog = %config.items_json.display(),
            db = %config.compendium_db.display(),
            "Wrote compendium"
        );
        Ok(records)
    }

    /// Pretty-printed JSON array of the extracted items.
    pub fn write_catalog(path: &Path, items: &[ExtractedItem]) -> LoadResult<()> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| anyhow::anyhow!("Failed to serialize item catalog: {}", e))?;
        write_file(path, &json)
    }

    /// One compendium document per line.
    pub fn write_db(path: &Path, records: &[ItemRecord]) -> LoadResult<()> {
        let mut out = String::new();
        for record in records {
            let line = serde_json::to_string(record)
                .map_err(|e| anyhow::anyhow!("Failed to serialize item '{}': {}", record.name, e))?;
            out.push_str(&line);
            out.push('\n');
        }
        write_file(path, &out)
    }

    /// Assign fresh ids and the default image.
    pub fn records(items: &[ExtractedItem], img: &str) -> Vec<ItemRecord> {
        items
            .iter()
            .cloned()
            .map(|item| item.into_record(new_id(), img))
            .collect()
    }
}

/// 16 hex digits, the id length compendium packs use.
fn new_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(16);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::ItemExtractor;

    fn items() -> Vec<ExtractedItem> {
        ItemExtractor::parse("[] Pot Lid: Armor of sorts. Cost: 1 grub.\n\n[] Club: A club.\n")
    }

    #[test]
    fn writes_catalog_and_db() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentConfig::default().resolve(dir.path());

        let records = CompendiumWriter::write(&config, &items()).unwrap();
        assert_eq!(records.len(), 2);

        let catalog: Vec<ExtractedItem> =
            serde_json::from_str(&std::fs::read_to_string(&config.items_json).unwrap()).unwrap();
        assert_eq!(catalog, items());

        let db = std::fs::read_to_string(&config.compendium_db).unwrap();
        let lines: Vec<&str> = db.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: ItemRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.name, "Pot Lid");
        assert_eq!(first.kind, "armor");
        assert_eq!(first.system.cost, "1 grub");
        assert_eq!(first.img, repugnant_core::DEFAULT_ITEM_IMG);
    }

    #[test]
    fn ids_are_sixteen_hex_digits_and_distinct() {
        let records = CompendiumWriter::records(&items(), "icons/x.svg");

        for record in &records {
            assert_eq!(record.id.len(), 16);
            assert!(record.id.chars().all(|c| c.is_ascii_hexdigit()));
        }
        assert_ne!(records[0].id, records[1].id);
    }
}
