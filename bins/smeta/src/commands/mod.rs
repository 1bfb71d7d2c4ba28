//! Subcommand implementations.

pub mod building;
pub mod expenditure;
pub mod report;
pub mod section;

use serde::Serialize;
use smeta_shared::AppError;

/// Writes a value to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))?;
    println!("{out}");
    Ok(())
}
