//! Error types for the designer crate.
//!
//! Interaction operations never fail; these errors only come from loading
//! layouts and background images.

use thiserror::Error;

use crate::model::ElementId;

/// Errors that can occur while loading designer inputs.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// Two elements in a layout share an id.
    #[error("Duplicate element id {0}")]
    DuplicateId(ElementId),

    /// An operation referenced an element that is not on the canvas.
    #[error("Unknown element {0}")]
    UnknownElement(ElementId),

    /// A background image header could not be read.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A background image reported a zero dimension.
    #[error("Background image has no area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Layout JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for designer operations.
pub type DesignerResult<T> = std::result::Result<T, DesignerError>;
