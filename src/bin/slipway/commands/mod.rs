//! Subcommand implementations.

pub mod compile;
pub mod doc;
pub mod doctest;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Load and decode a JSON action description.
pub fn load_action<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read action description: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse action description: {}", path.display()))
}
