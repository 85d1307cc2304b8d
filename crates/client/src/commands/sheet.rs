//! Dump the data a sheet template would render.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use repugnant_content::{ActorLoader, read_json_records};
use repugnant_core::{ActorSheetData, ItemRecord, ItemSheetData, SheetOptions};
use serde::Serialize;

use super::print_json;

/// Print sheet options and view data as JSON
#[derive(Parser, Debug)]
pub struct Sheet {
    /// Record JSON (actor by default)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Treat the records as items instead of characters
    #[arg(long)]
    item: bool,
}

#[derive(Serialize)]
struct SheetView<T: Serialize> {
    options: SheetOptions,
    data: T,
}

impl Sheet {
    pub fn execute(self) -> Result<()> {
        if self.item {
            let views: Vec<_> = read_json_records(&self.file)
                .context("Failed to load item JSON")?
                .records
                .iter()
                .map(|raw| SheetView {
                    options: SheetOptions::item(),
                    data: ItemSheetData::assemble(&ItemRecord::from_value(raw)),
                })
                .collect();
            return print_json(&views);
        }

        let views: Vec<_> = ActorLoader::load(&self.file)?
            .iter()
            .map(|actor| SheetView {
                options: SheetOptions::actor(),
                data: ActorSheetData::assemble(actor),
            })
            .collect();
        print_json(&views)
    }
}
