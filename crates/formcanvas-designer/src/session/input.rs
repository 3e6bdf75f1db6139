//! Pointer pipeline: hit testing, gesture start/update/end, wheel and
//! palette drops.

use formcanvas_core::{Point, Rect, Size};
use formcanvas_settings::BackgroundDrag;

use super::{element_count, CanvasSession};
use crate::coords;
use crate::gesture::{Gesture, GestureUpdate, PointerSample, ResizeHandle};
use crate::model::ElementId;
use crate::palette::PaletteItem;
use crate::selection_manager::{ClickMode, Modifiers};
use crate::spatial;

/// What lies under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A resize handle of the primary element.
    ResizeHandle { id: ElementId, handle: ResizeHandle },
    /// The body of an element.
    Element(ElementId),
    /// Empty canvas.
    Background,
}

impl CanvasSession {
    fn sample(&self, screen: Point) -> PointerSample {
        let canvas = coords::relative_to_canvas(screen, &self.layer_bounds(), self.layout_size);
        PointerSample::new(screen, canvas)
    }

    /// Finds the target at a canvas-local point. On a plain press, resize
    /// handles of the primary element win over element bodies; Ctrl/Shift
    /// presses only see bodies. Among overlapping elements the topmost wins.
    pub fn hit_test(&self, canvas: Point, modifiers: Modifiers) -> PointerTarget {
        let offer_handles = modifiers.click_mode() == ClickMode::Single;
        if let Some(primary) = self.primary_element().filter(|_| offer_handles) {
            if self.config.canvas.is_resizable(primary.tag()) {
                let bounds = primary.bounds();
                let side = self.config.canvas.handle_hit_size;
                for handle in ResizeHandle::ALL {
                    let centre = handle.location(&bounds);
                    let hit_area = Rect::new(centre.x - side / 2.0, centre.y - side / 2.0, side, side);
                    if hit_area.contains_point(canvas) {
                        return PointerTarget::ResizeHandle {
                            id: primary.id,
                            handle,
                        };
                    }
                }
            }
        }

        match spatial::topmost_at(&self.elements, canvas) {
            Some(el) => PointerTarget::Element(el.id),
            None => PointerTarget::Background,
        }
    }

    /// Pointer pressed at viewport position `screen`.
    ///
    /// Handles start a resize, element bodies update the selection and (on a
    /// plain click) start a drag, the background starts a marquee or a pan
    /// depending on configuration.
    pub fn pointer_down(&mut self, screen: Point, modifiers: Modifiers) -> PointerTarget {
        let sample = self.sample(screen);
        let target = self.hit_test(sample.canvas, modifiers);
        tracing::trace!("pointer down at {} -> {:?}", sample.canvas, target);

        if self.gestures.is_active() {
            tracing::debug!(
                "pointer down during {}, ignored",
                self.gestures.current().name()
            );
            return target;
        }

        match target {
            PointerTarget::ResizeHandle { id, handle } => {
                if let Some(bounds) = self.element(id).map(|el| el.bounds()) {
                    let zoom = self.view.zoom();
                    self.gestures.begin_resize(id, handle, sample, bounds, zoom);
                }
            }
            PointerTarget::Element(id) => {
                let mode = self.click_element(id, modifiers);
                if mode == ClickMode::Single {
                    if let Some(position) = self.element(id).map(|el| el.position) {
                        self.gestures.begin_drag(id, sample, position);
                    }
                }
            }
            PointerTarget::Background => match self.config.canvas.background_drag {
                BackgroundDrag::Marquee => {
                    self.gestures.begin_marquee(sample);
                }
                BackgroundDrag::Pan => {
                    self.gestures.begin_pan(sample);
                }
            },
        }
        target
    }

    /// Pointer moved to `screen`. Commits the resulting geometry change
    /// immediately and returns it.
    pub fn pointer_move(&mut self, screen: Point) -> Option<GestureUpdate> {
        if !self.gestures.is_active() {
            return None;
        }
        let sample = self.sample(screen);
        let update = self.gestures.update(sample)?;

        match update {
            GestureUpdate::Moved { id, position } => {
                if let Some(el) = self.element_mut(id) {
                    el.set_position(position);
                }
            }
            GestureUpdate::Resized { id, position, size } => {
                if let Some(el) = self.element_mut(id) {
                    el.set_size(size);
                    el.set_position(position);
                }
            }
            GestureUpdate::Panned { dx, dy } => self.view.pan_by(dx, dy),
            GestureUpdate::Marquee(_) => {}
        }
        Some(update)
    }

    /// Pointer released at `screen`. The gesture always ends here, whatever
    /// its state; a marquee is converted into a selection.
    pub fn pointer_up(&mut self, screen: Point) -> Gesture {
        self.pointer_move(screen);
        let finished = self.gestures.end();

        if let Gesture::Marquee(selection_box) = &finished {
            let had_selection = !self.selection.is_empty();
            let count = self.selection.select_in_box(&self.elements, selection_box);
            if count > 0 {
                self.notifications
                    .info(format!("Selected {}", element_count(count)));
            } else if had_selection {
                self.notifications.info("Selection cleared");
            }
        }
        finished
    }

    /// Applies a click on element `id`. Returns the interaction mode used.
    pub fn click_element(&mut self, id: ElementId, modifiers: Modifiers) -> ClickMode {
        if self.element(id).is_none() {
            tracing::warn!("Click on unknown element {}", id);
            return ClickMode::Single;
        }
        let mode = self.selection.click(&self.elements, id, modifiers);
        if mode != ClickMode::Single {
            let count = self.selection.count();
            self.notifications
                .info(format!("{} selected", element_count(count)));
        }
        mode
    }

    /// Wheel event over the canvas. Returns `false` when wheel zoom is off
    /// and the event should scroll instead.
    pub fn on_wheel(&mut self, delta_y: f64, screen: Point) -> bool {
        let anchor = screen - self.container_origin;
        self.view.on_wheel(delta_y, Some(anchor))
    }

    /// Creates an element from a palette item dropped at `screen` and makes
    /// it the single selection.
    pub fn drop_from_palette(&mut self, item: &PaletteItem, screen: Point) -> ElementId {
        let drop_point = self.to_canvas(screen);
        let size = Size::new(
            self.config.canvas.default_element_width,
            self.config.canvas.default_element_height,
        );
        let element = item.create_at(drop_point, size);
        let id = element.id;
        tracing::info!(
            "Dropped {} '{}' at {}",
            element.tag(),
            element.label,
            element.position
        );
        self.elements.push(element);
        self.selection.select_single(id);
        id
    }
}
