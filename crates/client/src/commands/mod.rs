//! Command implementations for the CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod extract_items;
mod init;
mod normalize;
mod sheet;
mod throw;

pub use extract_items::ExtractItems;
pub use init::Init;
pub use normalize::Normalize;
pub use sheet::Sheet;
pub use throw::Throw;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
