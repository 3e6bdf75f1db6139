//! Keyboard commands, clipboard and property edits.
//!
//! These act on the element collection directly, outside the pointer
//! pipeline. Commands that change how many elements are selected, removed
//! or pasted queue a notification with the count; no-ops stay silent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{element_count, CanvasSession};
use crate::clipboard::PasteBounds;
use crate::error::{DesignerError, DesignerResult};
use crate::model::{ElementId, ElementPatch};

/// Keyboard-triggered canvas command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyCommand {
    SelectAll,
    Escape,
    Delete,
    Copy,
    Paste,
    ZoomIn,
    ZoomOut,
    ResetView,
}

impl KeyCommand {
    /// Maps a key name plus the Ctrl/Cmd state to a command.
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        match (key, ctrl) {
            ("a" | "A", true) => Some(Self::SelectAll),
            ("c" | "C", true) => Some(Self::Copy),
            ("v" | "V", true) => Some(Self::Paste),
            ("Escape", _) => Some(Self::Escape),
            ("Delete" | "Backspace", _) => Some(Self::Delete),
            ("+" | "=", _) => Some(Self::ZoomIn),
            ("-", _) => Some(Self::ZoomOut),
            ("0", true) => Some(Self::ResetView),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectAll => "select-all",
            Self::Escape => "escape",
            Self::Delete => "delete",
            Self::Copy => "copy",
            Self::Paste => "paste",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::ResetView => "reset-view",
        }
    }
}

impl fmt::Display for KeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        [
            Self::SelectAll,
            Self::Escape,
            Self::Delete,
            Self::Copy,
            Self::Paste,
            Self::ZoomIn,
            Self::ZoomOut,
            Self::ResetView,
        ]
        .into_iter()
        .find(|cmd| cmd.as_str() == normalized)
        .ok_or_else(|| format!("Unknown key command: {}", s))
    }
}

impl CanvasSession {
    /// Runs a keyboard command. Returns `true` if anything changed.
    pub fn handle_key(&mut self, command: KeyCommand) -> bool {
        tracing::debug!("key command: {}", command);
        match command {
            KeyCommand::SelectAll => self.select_all() > 0,
            KeyCommand::Escape => self.clear_selection(),
            KeyCommand::Delete => self.delete_selected() > 0,
            KeyCommand::Copy => self.copy_selected() > 0,
            KeyCommand::Paste => !self.paste().is_empty(),
            KeyCommand::ZoomIn => self.view.zoom_in(),
            KeyCommand::ZoomOut => self.view.zoom_out(),
            KeyCommand::ResetView => {
                self.view.reset();
                true
            }
        }
    }

    /// Selects every element.
    pub fn select_all(&mut self) -> usize {
        let count = self.selection.select_all(&self.elements);
        if count > 0 {
            self.notifications
                .info(format!("Selected all {}", element_count(count)));
        }
        count
    }

    /// Clears the selection. In-flight gestures are not affected.
    pub fn clear_selection(&mut self) -> bool {
        let cleared = self.selection.clear();
        if cleared {
            self.notifications.info("Selection cleared");
        }
        cleared
    }

    /// Removes the secondary selection, or the primary alone when the
    /// secondary set is empty. Returns the number of removed elements.
    pub fn delete_selected(&mut self) -> usize {
        let targets = self.selection.targets(&self.elements);
        if targets.is_empty() {
            return 0;
        }

        if let Some(active) = self.gestures.active_element() {
            if targets.contains(&active) {
                self.gestures.end();
            }
        }

        self.elements.retain(|el| !targets.contains(&el.id));
        self.selection.retain_existing(&self.elements);
        self.notifications
            .success(format!("Deleted {}", element_count(targets.len())));
        tracing::info!("Deleted {} element(s)", targets.len());
        targets.len()
    }

    /// Copies the selected elements to the clipboard.
    pub fn copy_selected(&mut self) -> usize {
        let targets = self.selection.targets(&self.elements);
        let copied = self
            .clipboard
            .copy(self.elements.iter().filter(|el| targets.contains(&el.id)));
        if !copied {
            return 0;
        }
        let count = self.clipboard.len();
        self.notifications
            .success(format!("Copied {}", element_count(count)));
        count
    }

    /// Pastes the clipboard. The pasted elements become the selection.
    pub fn paste(&mut self) -> Vec<ElementId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let bounds = PasteBounds::from(&self.config.paste);
        let pasted = self.clipboard.paste(&self.elements, bounds);
        let ids: Vec<ElementId> = pasted.iter().map(|el| el.id).collect();

        self.elements.extend(pasted);
        self.selection.select_ids(&ids);
        self.notifications
            .success(format!("Pasted {}", element_count(ids.len())));
        ids
    }

    /// Applies a properties-panel edit to element `id`.
    pub fn apply_patch(&mut self, id: ElementId, patch: &ElementPatch) -> DesignerResult<()> {
        let element = self
            .element_mut(id)
            .ok_or(DesignerError::UnknownElement(id))?;
        patch.apply_to(element);
        Ok(())
    }
}
