//! Normalize character records exported by a host.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use repugnant_content::{JsonRecords, read_json_records};
use repugnant_core::prepare_derived_data;
use serde_json::Value;

use super::print_json;

/// Print records with canonical attributes
#[derive(Parser, Debug)]
pub struct Normalize {
    /// JSON file holding one record or an array of records
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl Normalize {
    pub fn execute(self) -> Result<()> {
        let read = read_json_records(&self.file).context("Failed to load character JSON")?;
        tracing::info!(count = read.records.len(), "Normalized records");
        print_json(&normalized(read))
    }
}

/// Normalize every record, keeping the file's object-or-array shape.
fn normalized(mut read: JsonRecords) -> Value {
    for record in &mut read.records {
        prepare_derived_data(record);
    }
    read.into_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_element_array_prints_as_array() {
        let read = JsonRecords {
            records: vec![json!({"name": "Gorb"})],
            was_array: true,
        };
        let value = normalized(read);

        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["attributes"]["muscles"]["magnitude"], json!(0));
    }

    #[test]
    fn single_object_prints_as_object() {
        let read = JsonRecords {
            records: vec![json!({"name": "Gorb"})],
            was_array: false,
        };
        let value = normalized(read);

        assert_eq!(value["name"], "Gorb");
        assert!(value["attributes"].is_object());
    }
}
