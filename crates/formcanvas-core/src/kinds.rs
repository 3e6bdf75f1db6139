//! Element kind tags.
//!
//! The designer models each kind as a variant carrying its own fields; this
//! fieldless projection is what configuration (for example the set of
//! resizable kinds) refers to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a placed form element, without its per-kind payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKindTag {
    Text,
    MultilineText,
    Dropdown,
    Checkbox,
    RadioGroup,
    Date,
    Number,
    Email,
    File,
    Table,
    Chart,
}

impl ElementKindTag {
    /// Every kind, in palette order.
    pub const ALL: [ElementKindTag; 11] = [
        Self::Text,
        Self::MultilineText,
        Self::Dropdown,
        Self::Checkbox,
        Self::RadioGroup,
        Self::Date,
        Self::Number,
        Self::Email,
        Self::File,
        Self::Table,
        Self::Chart,
    ];

    /// Identifier used in configuration files and layouts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::MultilineText => "multiline-text",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::RadioGroup => "radio-group",
            Self::Date => "date",
            Self::Number => "number",
            Self::Email => "email",
            Self::File => "file",
            Self::Table => "table",
            Self::Chart => "chart",
        }
    }
}

impl fmt::Display for ElementKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKindTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| format!("Unknown element kind: {}", s))
    }
}
