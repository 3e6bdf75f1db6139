//! Element model for the designer canvas.
//!
//! A [`PlacedElement`] is a form control positioned on the canvas. The
//! spatial core only ever reads the `{id, position, size, kind}` projection;
//! labels, placeholders, validation and the per-kind payload are carried
//! through untouched.

use formcanvas_core::constants::{MIN_ELEMENT_HEIGHT, MIN_ELEMENT_WIDTH};
use formcanvas_core::{ElementKindTag, Point, Rect, Size};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, stable element identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Chart style for chart elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

/// Column of a table element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub key: String,
    pub title: String,
}

/// Element kind with the fields only that kind uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementKind {
    Text,
    MultilineText {
        #[serde(default = "default_rows")]
        rows: u32,
    },
    Dropdown {
        #[serde(default)]
        options: Vec<String>,
    },
    Checkbox,
    RadioGroup {
        #[serde(default)]
        options: Vec<String>,
    },
    Date,
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    Email,
    File {
        #[serde(default)]
        accept: Vec<String>,
        #[serde(default)]
        multiple: bool,
    },
    Table {
        #[serde(default)]
        columns: Vec<TableColumn>,
    },
    Chart {
        #[serde(default)]
        chart_type: ChartType,
    },
}

fn default_rows() -> u32 {
    3
}

impl ElementKind {
    /// Default payload for a kind, as created by a palette drop.
    pub fn from_tag(tag: ElementKindTag) -> Self {
        match tag {
            ElementKindTag::Text => Self::Text,
            ElementKindTag::MultilineText => Self::MultilineText {
                rows: default_rows(),
            },
            ElementKindTag::Dropdown => Self::Dropdown {
                options: Vec::new(),
            },
            ElementKindTag::Checkbox => Self::Checkbox,
            ElementKindTag::RadioGroup => Self::RadioGroup {
                options: Vec::new(),
            },
            ElementKindTag::Date => Self::Date,
            ElementKindTag::Number => Self::Number {
                min: None,
                max: None,
                step: None,
            },
            ElementKindTag::Email => Self::Email,
            ElementKindTag::File => Self::File {
                accept: Vec::new(),
                multiple: false,
            },
            ElementKindTag::Table => Self::Table {
                columns: Vec::new(),
            },
            ElementKindTag::Chart => Self::Chart {
                chart_type: ChartType::default(),
            },
        }
    }

    pub fn tag(&self) -> ElementKindTag {
        match self {
            Self::Text => ElementKindTag::Text,
            Self::MultilineText { .. } => ElementKindTag::MultilineText,
            Self::Dropdown { .. } => ElementKindTag::Dropdown,
            Self::Checkbox => ElementKindTag::Checkbox,
            Self::RadioGroup { .. } => ElementKindTag::RadioGroup,
            Self::Date => ElementKindTag::Date,
            Self::Number { .. } => ElementKindTag::Number,
            Self::Email => ElementKindTag::Email,
            Self::File { .. } => ElementKindTag::File,
            Self::Table { .. } => ElementKindTag::Table,
            Self::Chart { .. } => ElementKindTag::Chart,
        }
    }
}

/// Field validation rules, interpreted by the form runtime only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Validation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An element placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    pub position: Point,
    pub size: Size,
}

impl PlacedElement {
    /// Creates an element with a fresh id. Position and size are clamped to
    /// the canvas invariants.
    pub fn new(kind: ElementKind, label: impl Into<String>, position: Point, size: Size) -> Self {
        let mut element = Self {
            id: ElementId::new(),
            kind,
            label: label.into(),
            placeholder: None,
            required: false,
            validation: None,
            position: Point::ORIGIN,
            size: Size::new(MIN_ELEMENT_WIDTH, MIN_ELEMENT_HEIGHT),
        };
        element.set_position(position);
        element.set_size(size);
        element
    }

    pub fn tag(&self) -> ElementKindTag {
        self.kind.tag()
    }

    /// Bounding rectangle in canvas-local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Sets the top-left corner, clamping both axes to `>= 0`.
    pub fn set_position(&mut self, position: Point) {
        self.position = position.clamp_non_negative();
    }

    /// Sets the size, raising it to the minimum element size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size.at_least(MIN_ELEMENT_WIDTH, MIN_ELEMENT_HEIGHT);
    }

    /// Copy of this element under a fresh id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ElementId::new(),
            ..self.clone()
        }
    }

    /// True when position and size satisfy the canvas invariants.
    pub fn is_normalized(&self) -> bool {
        self.position.x >= 0.0
            && self.position.y >= 0.0
            && self.size.width >= MIN_ELEMENT_WIDTH
            && self.size.height >= MIN_ELEMENT_HEIGHT
    }
}

/// Partial update pushed by the properties panel; `None` fields are left as is.
///
/// `placeholder` and `validation` are optional on the element itself, so the
/// patch carries them as `Some(None)` to clear and `Some(Some(_))` to set. In
/// JSON an explicit `null` clears and an absent key leaves the value alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub kind: Option<ElementKind>,
    pub label: Option<String>,
    #[serde(
        deserialize_with = "clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder: Option<Option<String>>,
    pub required: Option<bool>,
    #[serde(
        deserialize_with = "clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub validation: Option<Option<Validation>>,
    pub position: Option<Point>,
    pub size: Option<Size>,
}

impl ElementPatch {
    /// Shallow-merges the patch into `element`. The id is never touched.
    pub fn apply_to(&self, element: &mut PlacedElement) {
        if let Some(kind) = &self.kind {
            element.kind = kind.clone();
        }
        if let Some(label) = &self.label {
            element.label = label.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            element.placeholder = placeholder.clone();
        }
        if let Some(required) = self.required {
            element.required = required;
        }
        if let Some(validation) = &self.validation {
            element.validation = validation.clone();
        }
        if let Some(position) = self.position {
            element.set_position(position);
        }
        if let Some(size) = self.size {
            element.set_size(size);
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Present keys (including `null`) become `Some`, so `null` reads as "clear".
fn clearable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
