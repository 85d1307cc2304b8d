//! Build the item compendium from OCR'd rulebook text.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use repugnant_content::{CompendiumWriter, ConfigLoader, ContentConfig, ItemExtractor};

use crate::config::CliConfig;

/// Extract items into a JSON catalog and a compendium db
#[derive(Parser, Debug)]
pub struct ExtractItems {
    /// Content config TOML (defaults to REPUGNANT_CONTENT_CONFIG, then built-ins)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root for relative content paths (defaults to REPUGNANT_CONTENT_ROOT)
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,
}

impl ExtractItems {
    pub fn execute(self, cli_config: &CliConfig) -> Result<()> {
        let config_path = self.config.or_else(|| cli_config.content_config.clone());
        let content = match &config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load content config {}", path.display()))?,
            None => ContentConfig::default(),
        };
        let root = self.root.unwrap_or_else(|| cli_config.content_root.clone());
        let content = content.resolve(&root);

        let items = ItemExtractor::extract(&content)?;
        let records = CompendiumWriter::write(&content, &items)?;

        println!(
            "{} Extracted {} items -> {} and {}",
            style("✓").green().bold(),
            style(records.len()).cyan(),
            style(content.items_json.display()).cyan(),
            style(content.compendium_db.display()).cyan()
        );
        Ok(())
    }
}
