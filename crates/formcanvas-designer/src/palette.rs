//! Palette drops: creating new elements on the canvas.

use formcanvas_core::{ElementKindTag, Point, Size};
use serde::{Deserialize, Serialize};

use crate::model::{ElementKind, PlacedElement};

/// An entry in the element palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteItem {
    pub kind: ElementKindTag,
    pub label: String,
}

impl PaletteItem {
    pub fn new(kind: ElementKindTag, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }

    /// The stock palette: one entry per element kind.
    pub fn defaults() -> Vec<PaletteItem> {
        ElementKindTag::ALL
            .iter()
            .map(|&kind| PaletteItem::new(kind, default_label(kind)))
            .collect()
    }

    /// Creates an element centred on `drop_point` (canvas-local), clamped to
    /// the non-negative quadrant.
    pub fn create_at(&self, drop_point: Point, size: Size) -> PlacedElement {
        let position = drop_point.offset(-size.width / 2.0, -size.height / 2.0);
        PlacedElement::new(
            ElementKind::from_tag(self.kind),
            self.label.clone(),
            position,
            size,
        )
    }
}

fn default_label(kind: ElementKindTag) -> &'static str {
    match kind {
        ElementKindTag::Text => "Text Field",
        ElementKindTag::MultilineText => "Text Area",
        ElementKindTag::Dropdown => "Dropdown",
        ElementKindTag::Checkbox => "Checkbox",
        ElementKindTag::RadioGroup => "Radio Group",
        ElementKindTag::Date => "Date",
        ElementKindTag::Number => "Number",
        ElementKindTag::Email => "Email",
        ElementKindTag::File => "File Upload",
        ElementKindTag::Table => "Table",
        ElementKindTag::Chart => "Chart",
    }
}
