//! Content loaders for reading and writing game data files.

pub mod actors;
pub mod compendium;
pub mod config;
pub mod items;

pub use actors::ActorLoader;
pub use compendium::CompendiumWriter;
pub use config::{ConfigLoader, ContentConfig};
pub use items::{ExtractedItem, ItemExtractor};

use std::path::Path;

use serde_json::Value;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Records read from a JSON file holding one object or an array of them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JsonRecords {
    pub records: Vec<Value>,
    /// The file held an array, even one with a single element.
    pub was_array: bool,
}

impl JsonRecords {
    /// Reshape the records the way the file had them.
    pub fn into_value(self) -> Value {
        if self.was_array {
            return Value::Array(self.records);
        }
        self.records.into_iter().next().unwrap_or(Value::Null)
    }
}

/// Read raw JSON records from `path` without interpreting them.
pub fn read_json_records(path: &Path) -> LoadResult<JsonRecords> {
    let content = read_file(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON records: {}", e))?;

    Ok(match value {
        Value::Array(records) => JsonRecords {
            records,
            was_array: true,
        },
        record => JsonRecords {
            records: vec![record],
            was_array: false,
        },
    })
}

/// Write `contents` to `path`, creating parent directories first.
pub(crate) fn write_file(path: &Path, contents: &str) -> LoadResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create directory {}: {}", parent.display(), e)
            })?;
        }
    }
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}
