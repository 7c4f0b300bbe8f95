// SPDX-License-Identifier: MPL-2.0
//! Reads the map layer collection from a JSON file.

use crate::domain::layer::Layer;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Loads the layers stored as a JSON array at `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a layers error if it
/// is not a valid layer array.
pub fn load_layers(path: &Path) -> Result<Vec<Layer>> {
    let content = fs::read_to_string(path)?;
    let layers: Vec<Layer> = serde_json::from_str(&content)?;
    tracing::info!(path = %path.display(), count = layers.len(), "layers loaded");
    Ok(layers)
}
