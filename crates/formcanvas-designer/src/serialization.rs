//! Saving and loading canvas layouts.
//!
//! A layout is the plain element list as JSON. There is no file-level
//! versioning; unknown fields are ignored and missing optional fields take
//! their defaults.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{DesignerError, DesignerResult};
use crate::model::PlacedElement;

/// Serializes a layout to pretty-printed JSON.
pub fn layout_to_json(elements: &[PlacedElement]) -> DesignerResult<String> {
    Ok(serde_json::to_string_pretty(elements)?)
}

/// Parses a layout and normalises its geometry.
///
/// Duplicate ids are rejected. Negative positions and undersized elements
/// are clamped into range with a warning.
pub fn layout_from_json(json: &str) -> DesignerResult<Vec<PlacedElement>> {
    let elements: Vec<PlacedElement> = serde_json::from_str(json)?;
    normalize_layout(elements)
}

/// Checks id uniqueness and clamps geometry of an element list.
pub fn normalize_layout(mut elements: Vec<PlacedElement>) -> DesignerResult<Vec<PlacedElement>> {
    let mut seen = HashSet::with_capacity(elements.len());
    for el in &mut elements {
        if !seen.insert(el.id) {
            return Err(DesignerError::DuplicateId(el.id));
        }
        if !el.is_normalized() {
            tracing::warn!(
                "Element {} at {} size {} out of range, clamping",
                el.id,
                el.position,
                el.size
            );
            let (position, size) = (el.position, el.size);
            el.set_position(position);
            el.set_size(size);
        }
    }
    Ok(elements)
}

/// Writes a layout file.
pub fn save_layout(elements: &[PlacedElement], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = layout_to_json(elements).context("Failed to serialize layout")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write layout file {}", path.display()))?;
    tracing::info!("Saved {} element(s) to {}", elements.len(), path.display());
    Ok(())
}

/// Reads a layout file.
pub fn load_layout(path: impl AsRef<Path>) -> Result<Vec<PlacedElement>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    let elements = layout_from_json(&json)
        .with_context(|| format!("Failed to parse layout file {}", path.display()))?;
    tracing::info!("Loaded {} element(s) from {}", elements.len(), path.display());
    Ok(elements)
}
