use formcanvas_core::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::model::{ElementId, PlacedElement};
use crate::spatial;

/// Keyboard modifiers held during a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Ctrl on Linux/Windows, Cmd on macOS
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
    };

    /// Interaction mode selected by these modifiers. Ctrl wins over Shift.
    pub fn click_mode(&self) -> ClickMode {
        if self.ctrl {
            ClickMode::Toggle
        } else if self.shift {
            ClickMode::Range
        } else {
            ClickMode::Single
        }
    }
}

/// How a click on an element changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMode {
    Single,
    Toggle,
    Range,
}

/// Rectangle being dragged out for marquee selection, in canvas-local
/// coordinates. Exists only while the marquee gesture is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBox {
    pub start: Point,
    pub end: Point,
}

impl SelectionBox {
    /// A zero-sized box anchored at `anchor`.
    pub fn new(anchor: Point) -> Self {
        Self {
            start: anchor,
            end: anchor,
        }
    }

    /// Normalized min/max rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

/// Primary and secondary selection.
///
/// The properties panel observes `primary` only; bulk operations act on
/// `secondary`. Single-select leaves `secondary` empty, multi-select keeps
/// both populated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub primary: Option<ElementId>,
    pub secondary: HashSet<ElementId>,
}

/// Manages element selection state and selection operations.
///
/// `SelectionManager` is responsible for:
/// - Single-select on plain click
/// - Toggling membership on Ctrl/Cmd-click
/// - List-order range selection on Shift-click
/// - Marquee selection by full containment
/// - Select-all and clearing
///
/// The element collection is passed in by the caller; the manager only owns
/// ids. "Range" and "first" always mean collection order, never on-screen
/// position.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    state: SelectionState,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcanvas_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.primary(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The element shown in the properties panel.
    pub fn primary(&self) -> Option<ElementId> {
        self.state.primary
    }

    pub fn secondary(&self) -> &HashSet<ElementId> {
        &self.state.secondary
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.state.primary == Some(id) || self.state.secondary.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.state.primary.is_none() && self.state.secondary.is_empty()
    }

    /// Number of elements a bulk operation would act on.
    pub fn count(&self) -> usize {
        if self.state.secondary.is_empty() {
            usize::from(self.state.primary.is_some())
        } else {
            self.state.secondary.len()
        }
    }

    /// Ids a bulk operation acts on, in collection order: the secondary set
    /// when non-empty, otherwise the primary alone.
    pub fn targets(&self, elements: &[PlacedElement]) -> Vec<ElementId> {
        if self.state.secondary.is_empty() {
            return self
                .state
                .primary
                .filter(|id| elements.iter().any(|el| el.id == *id))
                .into_iter()
                .collect();
        }
        elements
            .iter()
            .filter(|el| self.state.secondary.contains(&el.id))
            .map(|el| el.id)
            .collect()
    }

    /// Dispatches a click on `id` according to `modifiers`. Returns the mode
    /// that was applied.
    pub fn click(
        &mut self,
        elements: &[PlacedElement],
        id: ElementId,
        modifiers: Modifiers,
    ) -> ClickMode {
        match modifiers.click_mode() {
            ClickMode::Single => {
                self.select_single(id);
                ClickMode::Single
            }
            ClickMode::Toggle => {
                self.toggle(id);
                ClickMode::Toggle
            }
            ClickMode::Range => {
                if self.select_range(elements, id) {
                    ClickMode::Range
                } else {
                    self.select_single(id);
                    ClickMode::Single
                }
            }
        }
    }

    /// Replaces the selection with `id` alone.
    pub fn select_single(&mut self, id: ElementId) {
        self.state.primary = Some(id);
        self.state.secondary.clear();
    }

    /// Toggles `id` in the secondary set.
    ///
    /// Going from single- to multi-select seeds the secondary set with the
    /// current primary. Removing the primary clears it; adding an element
    /// while nothing is primary makes it primary.
    pub fn toggle(&mut self, id: ElementId) {
        if self.state.secondary.is_empty() {
            if let Some(primary) = self.state.primary {
                self.state.secondary.insert(primary);
            }
        }

        if self.state.secondary.remove(&id) {
            if self.state.primary == Some(id) {
                self.state.primary = None;
            }
        } else {
            self.state.secondary.insert(id);
            if self.state.primary.is_none() {
                self.state.primary = Some(id);
            }
        }
    }

    /// Sets the secondary set to the contiguous list-order range between the
    /// primary and `id`, inclusive. Returns `false` (and changes nothing) when
    /// there is no primary or either end is not in the collection.
    pub fn select_range(&mut self, elements: &[PlacedElement], id: ElementId) -> bool {
        let Some(primary) = self.state.primary else {
            return false;
        };
        let from = elements.iter().position(|el| el.id == primary);
        let to = elements.iter().position(|el| el.id == id);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };

        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        self.state.secondary = elements[lo..=hi].iter().map(|el| el.id).collect();
        true
    }

    /// Selects every element fully contained in `selection_box`. The first
    /// match in collection order becomes primary; no match clears the
    /// selection. Returns the number of selected elements.
    pub fn select_in_box(&mut self, elements: &[PlacedElement], selection_box: &SelectionBox) -> usize {
        let region = selection_box.rect();
        let hits: Vec<ElementId> = spatial::contained_in(elements, &region)
            .map(|el| el.id)
            .collect();
        self.state.primary = hits.first().copied();
        self.state.secondary = hits.iter().copied().collect();
        hits.len()
    }

    /// Selects every element; the first becomes primary.
    pub fn select_all(&mut self, elements: &[PlacedElement]) -> usize {
        self.state.primary = elements.first().map(|el| el.id);
        self.state.secondary = elements.iter().map(|el| el.id).collect();
        elements.len()
    }

    /// Makes `ids` the selection: the first is primary, all are secondary.
    pub fn select_ids(&mut self, ids: &[ElementId]) {
        self.state.primary = ids.first().copied();
        self.state.secondary = ids.iter().copied().collect();
    }

    /// Clears the selection. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_selection = !self.is_empty();
        self.state.primary = None;
        self.state.secondary.clear();
        had_selection
    }

    /// Drops ids that are no longer in the collection.
    pub fn retain_existing(&mut self, elements: &[PlacedElement]) {
        let present: HashSet<ElementId> = elements.iter().map(|el| el.id).collect();
        if let Some(primary) = self.state.primary {
            if !present.contains(&primary) {
                self.state.primary = None;
            }
        }
        self.state.secondary.retain(|id| present.contains(id));
    }
}
