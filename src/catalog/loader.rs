//! Catalog file loading
//!
//! Reads a local JSON array of equipment records and normalizes it. The
//! catalog is returned to the caller, who owns it for the session.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::item::EquipmentItem;
use super::normalizer::normalize;

/// Load and normalize a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<EquipmentItem>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

    let items = parse_catalog(&contents)
        .with_context(|| format!("Failed to parse catalog: {:?}", path))?;

    tracing::info!("Loaded catalog {:?}: {} items", path, items.len());
    Ok(items)
}

/// Parse and normalize catalog JSON text
pub fn parse_catalog(contents: &str) -> Result<Vec<EquipmentItem>> {
    let value: Value = serde_json::from_str(contents)
        .with_context(|| "Catalog is not valid JSON")?;

    match value {
        Value::Array(records) => Ok(normalize(&records)),
        other => bail!("Catalog must be a JSON array, found {}", short_kind(&other)),
    }
}

fn short_kind(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "an object",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
        Value::Array(_) => "an array",
    }
}
