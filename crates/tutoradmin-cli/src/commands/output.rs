use anyhow::{Context, Result};
use serde::Serialize;

/// Writes `value` to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Acknowledges an operation that returns no data.
pub fn print_ok() -> Result<()> {
    print_json(&serde_json::json!({ "ok": true }))
}
