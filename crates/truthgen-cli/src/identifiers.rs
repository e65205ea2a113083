//! Loading and validation of the identifiers input file.

use std::path::Path;

use anyhow::Context;
use serde_json::Value;

/// Loads identifiers from a JSON file: either a bare array of strings or an
/// object with an `identifiers` array.
///
/// Non-string entries are skipped with a warning; blank strings are dropped
/// silently.
///
/// # Errors
///
/// Fails when the file is missing or unreadable, the JSON has an
/// unsupported shape, or no valid identifiers remain.
pub fn load_identifiers(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read identifiers file {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse identifiers file {}", path.display()))?;

    let entries = extract_entries(&value).ok_or_else(|| {
        anyhow::anyhow!(
            "unsupported identifiers JSON in {}: use an array or {{\"identifiers\": [...]}}",
            path.display()
        )
    })?;

    let identifiers = collect_identifiers(entries);
    if identifiers.is_empty() {
        anyhow::bail!("no valid identifiers found in {}", path.display());
    }

    tracing::info!(count = identifiers.len(), path = %path.display(), "loaded identifiers");
    Ok(identifiers)
}

fn extract_entries(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("identifiers").and_then(Value::as_array),
        _ => None,
    }
}

fn collect_identifiers(entries: &[Value]) -> Vec<String> {
    let mut identifiers = Vec::new();
    for entry in entries {
        if let Some(text) = entry.as_str() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                identifiers.push(trimmed.to_string());
            }
        } else {
            tracing::warn!(entry = %entry, "skipping non-string identifier entry");
        }
    }
    identifiers
}
