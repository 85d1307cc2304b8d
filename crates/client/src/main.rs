//! Command-line tools for the Repugnant system.
//!
//! Run with: `repugnant <command>`
//!
//! ```bash
//! # Resolve a throw for a saved character
//! repugnant throw --actor skuz.json --throw-type toss --points 7 --target 5
//!
//! # Rebuild the item compendium
//! repugnant extract-items --root ./system
//! ```

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{ExtractItems, Init, Normalize, Sheet, Throw};
use config::CliConfig;

/// Command-line tools for the Repugnant system
#[derive(Parser)]
#[command(name = "repugnant")]
#[command(about = "Character data and chit throws for Repugnant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Normalize character records
    Normalize(Normalize),

    /// Resolve a chit throw
    Throw(Throw),

    /// Print sheet view data
    Sheet(Sheet),

    /// Extract the item compendium from OCR text
    ExtractItems(ExtractItems),

    /// Register sheets and list the registry
    Init(Init),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(&config.logging)?;

    let cli = Cli::parse();

    match cli.command {
        Command::Normalize(cmd) => cmd.execute(),
        Command::Throw(cmd) => cmd.execute(),
        Command::Sheet(cmd) => cmd.execute(),
        Command::ExtractItems(cmd) => cmd.execute(&config),
        Command::Init(cmd) => cmd.execute(),
    }
}
