//! Run the system wiring against a fresh registry.

use anyhow::Result;
use clap::Parser;
use console::style;
use repugnant_core::{Registry, init};

/// Register the Repugnant sheets and list the result
#[derive(Parser, Debug)]
pub struct Init {}

impl Init {
    pub fn execute(self) -> Result<()> {
        let mut registry = Registry::with_core_sheets();
        init(&mut registry)?;

        for entry in registry.registrations() {
            let marker = if entry.default {
                style("default").green().to_string()
            } else {
                String::new()
            };
            println!(
                "{:<6} {:<16} {:<10} {}",
                entry.document.as_ref(),
                entry.sheet.as_ref(),
                entry.scope,
                marker
            );
        }
        Ok(())
    }
}
