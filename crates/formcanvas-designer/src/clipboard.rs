//! Copy/paste of placed elements.
//!
//! Pasting is a placement heuristic, not a packing: each copy is staggered
//! diagonally from its source, pushed inside the paste area and then nudged
//! along a diagonal until no element sits within [`PASTE_PROXIMITY`] of it.
//! The search gives up after [`PASTE_SEARCH_BUDGET`] units and keeps the last
//! candidate, so pasted elements can still overlap.

use formcanvas_core::constants::{
    DEFAULT_PASTE_MAX_X, DEFAULT_PASTE_MAX_Y, PASTE_OFFSET, PASTE_PROXIMITY, PASTE_SEARCH_BUDGET,
    PASTE_SEARCH_STEP, PASTE_STAGGER,
};
use formcanvas_core::Point;
use formcanvas_settings::PasteSettings;

use crate::model::PlacedElement;
use crate::spatial;

/// Right and bottom edges of the area pasted elements are kept inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasteBounds {
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for PasteBounds {
    fn default() -> Self {
        Self {
            max_x: DEFAULT_PASTE_MAX_X,
            max_y: DEFAULT_PASTE_MAX_Y,
        }
    }
}

impl From<&PasteSettings> for PasteBounds {
    fn from(settings: &PasteSettings) -> Self {
        Self {
            max_x: settings.max_x,
            max_y: settings.max_y,
        }
    }
}

/// In-memory clipboard holding snapshots of copied elements.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    items: Vec<PlacedElement>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the clipboard contents. Copying nothing leaves the previous
    /// contents in place and returns `false`.
    pub fn copy<'a, I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'a PlacedElement>,
    {
        let items: Vec<PlacedElement> = elements.into_iter().cloned().collect();
        if items.is_empty() {
            return false;
        }
        tracing::debug!("Copied {} element(s) to clipboard", items.len());
        self.items = items;
        true
    }

    pub fn items(&self) -> &[PlacedElement] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places a copy of every clipboard item next to `existing`.
    pub fn paste(&self, existing: &[PlacedElement], bounds: PasteBounds) -> Vec<PlacedElement> {
        place_pasted(&self.items, existing, bounds)
    }
}

/// Computes positions for pasted copies of `copied`.
///
/// Every returned element has a fresh id. Placement is checked against both
/// `existing` and the copies already placed by this call.
pub fn place_pasted(
    copied: &[PlacedElement],
    existing: &[PlacedElement],
    bounds: PasteBounds,
) -> Vec<PlacedElement> {
    let mut occupied: Vec<Point> = existing.iter().map(|el| el.position).collect();
    let mut placed = Vec::with_capacity(copied.len());

    for (i, source) in copied.iter().enumerate() {
        let stagger = PASTE_OFFSET + PASTE_STAGGER * i as f64;
        let candidate = source.position.offset(stagger, stagger);
        let position = find_free_position(candidate, source, i, bounds, &occupied);

        let mut copy = source.duplicate();
        copy.set_position(position);
        occupied.push(copy.position);
        placed.push(copy);
    }

    tracing::debug!("Placed {} pasted element(s)", placed.len());
    placed
}

fn find_free_position(
    candidate: Point,
    source: &PlacedElement,
    index: usize,
    bounds: PasteBounds,
    occupied: &[Point],
) -> Point {
    let limit_x = bounds.max_x - source.size.width;
    let limit_y = bounds.max_y - source.size.height;

    // Push inward; never negative even if the element is larger than the area
    let mut x = candidate.x.min(limit_x).max(0.0);
    let mut y = candidate.y.min(limit_y).max(0.0);

    let mut spent = 0.0;
    while spent < PASTE_SEARCH_BUDGET
        && spatial::is_occupied(occupied.iter().copied(), Point::new(x, y), PASTE_PROXIMITY)
    {
        spent += PASTE_SEARCH_STEP;
        let next_x = x + PASTE_SEARCH_STEP;
        if next_x > limit_x {
            x = PASTE_OFFSET + PASTE_STAGGER * index as f64;
        } else {
            x = next_x;
        }
        y += PASTE_SEARCH_STEP;
    }

    if spent >= PASTE_SEARCH_BUDGET {
        tracing::debug!(
            "Paste search budget exhausted for element {}, accepting ({:.1}, {:.1})",
            index,
            x,
            y
        );
    }

    Point::new(x, y)
}
