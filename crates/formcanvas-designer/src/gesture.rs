//! Drag / resize gesture controller.
//!
//! A gesture is one continuous pointer-down → move → up interaction. The
//! controller is an explicit state machine; entering a non-idle state
//! captures the pointer (the equivalent of attaching window-level move/up
//! listeners) and [`GestureController::end`] releases it unconditionally, so
//! a gesture can never outlive its pointer-up even when the pointer left the
//! canvas.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Dragging    (pointer down on an element body)
//! Idle -> Resizing    (pointer down on a resize handle)
//! Idle -> Marquee     (pointer down on background, marquee mode)
//! Idle -> Panning     (pointer down on background, pan mode)
//! Any  -> Idle        (pointer up)
//! ```
//!
//! Every pointer move produces a [`GestureUpdate`] that the session writes
//! straight into the element collection; there is no snapping and no
//! commit/rollback.

use formcanvas_core::constants::{MIN_ELEMENT_HEIGHT, MIN_ELEMENT_WIDTH};
use formcanvas_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::ElementId;
use crate::selection_manager::SelectionBox;

/// One of the eight resize handles around an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// Corners first so they win hit tests where they overlap edge handles.
    pub const ALL: [ResizeHandle; 8] = [
        Self::NW,
        Self::NE,
        Self::SW,
        Self::SE,
        Self::N,
        Self::S,
        Self::E,
        Self::W,
    ];

    /// The handle drags the left edge.
    pub fn moves_left(&self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// The handle drags the right edge.
    pub fn moves_right(&self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// The handle drags the top edge.
    pub fn moves_top(&self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    /// The handle drags the bottom edge.
    pub fn moves_bottom(&self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    /// Where the handle sits on `rect`.
    pub fn location(&self, rect: &Rect) -> Point {
        let x = if self.moves_left() {
            rect.min_x()
        } else if self.moves_right() {
            rect.max_x()
        } else {
            rect.center().x
        };
        let y = if self.moves_top() {
            rect.min_y()
        } else if self.moves_bottom() {
            rect.max_y()
        } else {
            rect.center().y
        };
        Point::new(x, y)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|h| h.as_str() == lower)
            .ok_or_else(|| format!("Unknown resize handle: {}", s))
    }
}

/// Computes the geometry for resizing from `handle` by `(dx, dy)` canvas
/// units relative to the gesture start.
///
/// Trailing handles (`e`, `s`, `se`) change size only. Leading edges move the
/// position by the amount the size changed so the opposite edge stays put.
/// The minimum size is applied before that position delta, so the anchored
/// edge does not drift once the minimum is reached. A leading edge also stops
/// at the canvas origin instead of producing a negative position.
pub fn apply_resize(
    handle: ResizeHandle,
    start_position: Point,
    start_size: Size,
    dx: f64,
    dy: f64,
) -> (Point, Size) {
    let mut x = start_position.x;
    let mut y = start_position.y;
    let mut width = start_size.width;
    let mut height = start_size.height;

    if handle.moves_right() {
        width = (start_size.width + dx).max(MIN_ELEMENT_WIDTH);
    } else if handle.moves_left() {
        let max_width = (start_position.x + start_size.width).max(MIN_ELEMENT_WIDTH);
        width = (start_size.width - dx).max(MIN_ELEMENT_WIDTH).min(max_width);
        x = start_position.x + (start_size.width - width);
    }

    if handle.moves_bottom() {
        height = (start_size.height + dy).max(MIN_ELEMENT_HEIGHT);
    } else if handle.moves_top() {
        let max_height = (start_position.y + start_size.height).max(MIN_ELEMENT_HEIGHT);
        height = (start_size.height - dy).max(MIN_ELEMENT_HEIGHT).min(max_height);
        y = start_position.y + (start_size.height - height);
    }

    (
        Point::new(x, y).clamp_non_negative(),
        Size::new(width, height),
    )
}

/// Pointer position in both coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Viewport (screen) coordinates
    pub screen: Point,
    /// Canvas-local coordinates, not clamped
    pub canvas: Point,
}

impl PointerSample {
    pub fn new(screen: Point, canvas: Point) -> Self {
        Self { screen, canvas }
    }
}

/// The active gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        id: ElementId,
        /// Pointer offset inside the element, in canvas units
        grab_offset: Point,
    },
    Resizing {
        id: ElementId,
        handle: ResizeHandle,
        start_pointer: Point,
        start_position: Point,
        start_size: Size,
        zoom: f64,
    },
    Marquee(SelectionBox),
    Panning {
        last_pointer: Point,
    },
}

impl Gesture {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Resizing { .. } => "resizing",
            Self::Marquee(_) => "marquee",
            Self::Panning { .. } => "panning",
        }
    }
}

/// Geometry change produced by one pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    Moved {
        id: ElementId,
        position: Point,
    },
    Resized {
        id: ElementId,
        position: Point,
        size: Size,
    },
    Marquee(SelectionBox),
    Panned {
        dx: f64,
        dy: f64,
    },
}

/// Owns the single active gesture.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    gesture: Gesture,
    pointer_captured: bool,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    /// True while a gesture holds the pointer.
    pub fn has_pointer_capture(&self) -> bool {
        self.pointer_captured
    }

    /// Element being dragged or resized, if any.
    pub fn active_element(&self) -> Option<ElementId> {
        match self.gesture {
            Gesture::Dragging { id, .. } | Gesture::Resizing { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Starts moving element `id` currently at `position`.
    pub fn begin_drag(&mut self, id: ElementId, pointer: PointerSample, position: Point) -> bool {
        self.enter(Gesture::Dragging {
            id,
            grab_offset: pointer.canvas - position,
        })
    }

    /// Starts resizing element `id` from `handle`.
    pub fn begin_resize(
        &mut self,
        id: ElementId,
        handle: ResizeHandle,
        pointer: PointerSample,
        bounds: Rect,
        zoom: f64,
    ) -> bool {
        self.enter(Gesture::Resizing {
            id,
            handle,
            start_pointer: pointer.screen,
            start_position: bounds.origin(),
            start_size: bounds.size(),
            zoom,
        })
    }

    /// Opens a selection box anchored at the pointer.
    pub fn begin_marquee(&mut self, pointer: PointerSample) -> bool {
        let anchor = pointer.canvas.clamp_non_negative();
        self.enter(Gesture::Marquee(SelectionBox::new(anchor)))
    }

    /// Starts panning the view.
    pub fn begin_pan(&mut self, pointer: PointerSample) -> bool {
        self.enter(Gesture::Panning {
            last_pointer: pointer.screen,
        })
    }

    /// Advances the active gesture to `pointer`.
    pub fn update(&mut self, pointer: PointerSample) -> Option<GestureUpdate> {
        match &mut self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { id, grab_offset } => Some(GestureUpdate::Moved {
                id: *id,
                position: (pointer.canvas - *grab_offset).clamp_non_negative(),
            }),
            Gesture::Resizing {
                id,
                handle,
                start_pointer,
                start_position,
                start_size,
                zoom,
            } => {
                let zoom = if *zoom > 0.0 { *zoom } else { 1.0 };
                let dx = (pointer.screen.x - start_pointer.x) / zoom;
                let dy = (pointer.screen.y - start_pointer.y) / zoom;
                let (position, size) = apply_resize(*handle, *start_position, *start_size, dx, dy);
                Some(GestureUpdate::Resized {
                    id: *id,
                    position,
                    size,
                })
            }
            Gesture::Marquee(selection_box) => {
                selection_box.end = pointer.canvas.clamp_non_negative();
                Some(GestureUpdate::Marquee(*selection_box))
            }
            Gesture::Panning { last_pointer } => {
                let dx = pointer.screen.x - last_pointer.x;
                let dy = pointer.screen.y - last_pointer.y;
                *last_pointer = pointer.screen;
                Some(GestureUpdate::Panned { dx, dy })
            }
        }
    }

    /// Ends whatever gesture is active, releases the pointer and returns the
    /// finished gesture.
    pub fn end(&mut self) -> Gesture {
        let finished = std::mem::take(&mut self.gesture);
        if self.pointer_captured {
            tracing::debug!("gesture end: {}", finished.name());
        }
        self.pointer_captured = false;
        finished
    }

    fn enter(&mut self, gesture: Gesture) -> bool {
        if self.is_active() {
            tracing::debug!(
                "ignoring {} start while {} is active",
                gesture.name(),
                self.gesture.name()
            );
            return false;
        }
        tracing::debug!("gesture start: {}", gesture.name());
        self.gesture = gesture;
        self.pointer_captured = true;
        true
    }
}
