use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;

use crate::models::Snippet;
use crate::models::snippet::collect_valid;

/// File name offered for exported libraries
pub const DEFAULT_EXPORT_FILE: &str = "snipvault-snippets.json";

/// JSON that parsed but does not describe a snippet library
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("Imported JSON must be an array")]
    NotAnArray,

    #[error("No valid snippets found in import")]
    NoValidSnippets,
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Format(#[from] FormatError),
}

/// Serializes the whole collection as a pretty-printed JSON array.
pub fn export_snippets(snippets: &[Snippet]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snippets)
}

/// Writes an export artifact to `path`.
pub fn export_to_file(snippets: &[Snippet], path: &Path) -> Result<()> {
    let json = export_snippets(snippets).context("Failed to serialize snippets to JSON")?;
    fs::write(path, json).context("Failed to write JSON export file")?;

    log::debug!("Exported {} snippets to {}", snippets.len(), path.display());
    Ok(())
}

/// Parses untrusted text into a snippet collection.
///
/// Invalid records are dropped silently and the result is capped at
/// [`crate::models::MAX_SNIPPETS`]. An empty array is accepted; a non-empty
/// array without a single valid record is not.
pub fn import_snippets(text: &str) -> Result<Vec<Snippet>, ImportError> {
    let value: Value = serde_json::from_str(text)?;
    let items = value.as_array().ok_or(FormatError::NotAnArray)?;

    let snippets = collect_valid(items);
    if !items.is_empty() && snippets.is_empty() {
        return Err(FormatError::NoValidSnippets.into());
    }

    if snippets.len() < items.len() {
        log::debug!(
            "Import kept {} of {} records",
            snippets.len(),
            items.len()
        );
    }

    Ok(snippets)
}
