//! File-backed content for the Repugnant system.
//!
//! This crate reads and writes the data the rules core consumes:
//! - Content paths (data-driven via TOML)
//! - Character records (host JSON exports)
//! - Item compendium extracted from OCR'd rulebook text
//!
//! All loaders hand back `repugnant-core` types.

pub mod loaders;

pub use loaders::{
    ActorLoader, CompendiumWriter, ConfigLoader, ContentConfig, ExtractedItem, ItemExtractor,
    JsonRecords, LoadResult, read_json_records,
};
