//! Item extraction from OCR'd rulebook text.
//!
//! Items in the book are checklist entries:
//!
//! ```text
//! [] Bucket Helm: A dented bucket worn as armor. Cost: 2 grubs. Effect: +1 vs bonks.
//!    Rattles when you run.
//! ```
//!
//! An entry runs from its `[] Name:` line until a blank line, a page break or
//! the next entry.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use repugnant_core::{ItemData, ItemKind, ItemRecord};
use serde::{Deserialize, Serialize};

use crate::loaders::{ContentConfig, LoadResult};

static ITEM_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[\]\s*([^:]{2,}):\s*(.*)$").expect("item start pattern"));
static COST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bCost\s*[:.]+\s*([^.\n]+)").expect("cost pattern"));
static EFFECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bEffect\s*[:.]+\s*([^.\n]+)").expect("effect pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
/// Line boundaries as OCR output uses them, page breaks (`\x0c`) included.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\x0b\x0c\r\x1c-\x1e\x{85}\x{2028}\x{2029}]").expect("line break pattern")
});

const WEAPON_WORDS: [&str; 6] = ["weapon", "mallet", "mace", "bow", "blade", "club"];

/// An item as read from the book, before it gets a compendium id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub description: String,
    pub cost: String,
    pub effect: String,
}

impl ExtractedItem {
    /// Compendium document for this item.
    pub fn into_record(self, id: impl Into<String>, img: impl Into<String>) -> ItemRecord {
        ItemRecord {
            id: id.into(),
            name: self.name,
            kind: self.kind.to_string(),
            img: img.into(),
            system: ItemData {
                description: self.description,
                cost: self.cost,
                effect: self.effect,
                tags: Vec::new(),
            },
        }
    }
}

/// Parser for the book's item entries.
pub struct ItemExtractor;

impl ItemExtractor {
    /// Read the configured OCR text (or its fallback) and parse every item.
    pub fn extract(config: &ContentConfig) -> LoadResult<Vec<ExtractedItem>> {
        let path = if config.text_path.exists() {
            &config.text_path
        } else {
            &config.fallback_text_path
        };
        if !path.exists() {
            anyhow::bail!("Missing OCR text: {}", path.display());
        }

        let items = Self::parse(&read_lossy(path)?);
        tracing::info!(count = items.len(), source = %path.display(), "Extracted items");
        Ok(items)
    }

    /// Parse item entries out of book text.
    pub fn parse(text: &str) -> Vec<ExtractedItem> {
        let mut items = Vec::new();
        let mut current: Option<(String, Vec<String>)> = None;

        for line in LINE_BREAK.split(text) {
            if let Some(captures) = ITEM_START.captures(line) {
                if let Some((name, lines)) = current.take() {
                    items.push(Self::build(&name, &lines));
                }
                current = Some((captures[1].to_string(), vec![captures[2].to_string()]));
                continue;
            }

            if line.trim().is_empty() {
                if let Some((name, lines)) = current.take() {
                    items.push(Self::build(&name, &lines));
                }
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line.to_string());
            }
        }

        if let Some((name, lines)) = current.take() {
            items.push(Self::build(&name, &lines));
        }
        items
    }

    fn build(name: &str, lines: &[String]) -> ExtractedItem {
        let full_text = normalize_text(&lines.join(" "));
        let capture = |pattern: &Regex| {
            pattern
                .captures(&full_text)
                .map(|captures| normalize_text(&captures[1]))
                .unwrap_or_default()
        };

        ExtractedItem {
            name: normalize_text(name),
            kind: guess_kind(&full_text),
            cost: capture(&*COST),
            effect: capture(&*EFFECT),
            description: full_text,
        }
    }
}

/// Collapse whitespace, straighten apostrophes and strip edge spaces/dashes.
pub fn normalize_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ").replace('\u{2019}', "'");
    collapsed
        .trim_matches(|c| matches!(c, ' ' | '-' | '\t' | '\n' | '\r'))
        .to_string()
}

/// Guess an item's category from its text.
pub fn guess_kind(text: &str) -> ItemKind {
    let lower = text.to_lowercase();
    if lower.contains("armor") {
        ItemKind::Armor
    } else if WEAPON_WORDS.iter().any(|word| lower.contains(word)) {
        ItemKind::Weapon
    } else {
        ItemKind::Item
    }
}

/// OCR output is not always valid UTF-8; bad bytes are replaced.
fn read_lossy(path: &Path) -> LoadResult<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
