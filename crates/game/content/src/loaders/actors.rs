//! Character record loader.
//!
//! Reads host exports: either a single record object or an array of them.
//! Records are normalized on the way in.

use std::path::Path;

use anyhow::Context;
use repugnant_core::CharacterRecord;
use serde_json::Value;

use crate::loaders::{LoadResult, read_json_records};

/// Loader for character records from JSON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load raw records without touching them.
    pub fn load_raw(path: &Path) -> LoadResult<Vec<Value>> {
        let read = read_json_records(path).context("Failed to load character JSON")?;
        Ok(read.records)
    }

    /// Load and normalize every record in the file.
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterRecord>> {
        let records: Vec<CharacterRecord> = Self::load_raw(path)?
            .iter()
            .map(CharacterRecord::from_value)
            .collect();

        tracing::debug!(count = records.len(), path = %path.display(), "Loaded characters");
        Ok(records)
    }

    /// Load the first record in the file.
    pub fn load_one(path: &Path) -> LoadResult<CharacterRecord> {
        Self::load(path)?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No character records in {}", path.display()))
    }
}
