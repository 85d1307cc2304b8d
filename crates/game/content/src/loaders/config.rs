//! Content configuration loader.

use std::path::{Path, PathBuf};

use repugnant_core::DEFAULT_ITEM_IMG;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Where the compendium tooling reads and writes its files.
///
/// Relative paths are resolved against a content root with
/// [`ContentConfig::resolve`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Preferred OCR text of the rulebook.
    pub text_path: PathBuf,
    /// Older OCR pass, used when `text_path` does not exist.
    pub fallback_text_path: PathBuf,
    /// Pretty-printed JSON catalog of extracted items.
    pub items_json: PathBuf,
    /// Newline-delimited compendium database.
    pub compendium_db: PathBuf,
    /// Image assigned to every extracted item.
    pub default_img: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            text_path: PathBuf::from("data/Repugnant_ocr3.txt"),
            fallback_text_path: PathBuf::from("data/Repugnant_ocr.txt"),
            items_json: PathBuf::from("data/repugnant_items.json"),
            compendium_db: PathBuf::from("packs/repugnant-items.db"),
            default_img: DEFAULT_ITEM_IMG.to_string(),
        }
    }
}

impl ContentConfig {
    /// Anchor every relative path at `root`.
    #[must_use]
    pub fn resolve(mut self, root: &Path) -> Self {
        for path in [
            &mut self.text_path,
            &mut self.fallback_text_path,
            &mut self.items_json,
            &mut self.compendium_db,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}

/// Loader for content configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load content configuration from a TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        let config: ContentConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse content config TOML: {}", e))?;

        tracing::debug!(path = %path.display(), "Loaded content config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "items_json = \"out/items.json\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.items_json, PathBuf::from("out/items.json"));
        assert_eq!(config.compendium_db, PathBuf::from("packs/repugnant-items.db"));
        assert_eq!(config.default_img, DEFAULT_ITEM_IMG);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "items_json = [").unwrap();

        let err = ConfigLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("content config"));
    }

    #[test]
    fn resolve_anchors_relative_paths() {
        let config = ContentConfig {
            compendium_db: PathBuf::from("/abs/items.db"),
            ..ContentConfig::default()
        }
        .resolve(Path::new("/srv/repugnant"));

        assert_eq!(config.text_path, PathBuf::from("/srv/repugnant/data/Repugnant_ocr3.txt"));
        assert_eq!(config.compendium_db, PathBuf::from("/abs/items.db"));
    }
}
