//! Canvas editing session.
//!
//! A [`CanvasSession`] owns everything one canvas needs: the element
//! collection, selection, view transform, active gesture, clipboard,
//! configuration and pending notifications. There is no shared or global
//! state; embedding UIs forward events to the session and re-render from its
//! accessors.
//!
//! Event handling is split by source:
//! - [`input`]: pointer, wheel and palette-drop events
//! - [`commands`]: keyboard commands, clipboard and property edits

pub mod commands;
pub mod input;

pub use commands::KeyCommand;
pub use input::PointerTarget;

use formcanvas_core::{Notification, NotificationQueue, Point, Rect, Size};
use formcanvas_settings::Config;

use crate::background::BackgroundImage;
use crate::clipboard::Clipboard;
use crate::coords;
use crate::error::DesignerResult;
use crate::gesture::{Gesture, GestureController};
use crate::model::{ElementId, PlacedElement};
use crate::selection_manager::{SelectionBox, SelectionManager};
use crate::serialization::normalize_layout;
use crate::spatial;
use crate::viewport::ViewTransform;

/// State of one canvas being edited.
#[derive(Debug)]
pub struct CanvasSession {
    elements: Vec<PlacedElement>,
    selection: SelectionManager,
    view: ViewTransform,
    gestures: GestureController,
    clipboard: Clipboard,
    config: Config,
    notifications: NotificationQueue,
    /// Top-left of the canvas container in viewport coordinates.
    container_origin: Point,
    /// Untransformed size of the element layer.
    layout_size: Size,
    background: Option<BackgroundImage>,
}

impl CanvasSession {
    /// Creates an empty session. The element layer starts out the size of
    /// the paste area.
    pub fn new(config: Config) -> Self {
        let view = ViewTransform::new(&config.zoom);
        let notifications =
            NotificationQueue::new(config.notifications.duration(), config.notifications.enabled);
        let layout_size = Size::new(config.paste.max_x, config.paste.max_y);
        Self {
            elements: Vec::new(),
            selection: SelectionManager::new(),
            view,
            gestures: GestureController::new(),
            clipboard: Clipboard::new(),
            config,
            notifications,
            container_origin: Point::ORIGIN,
            layout_size,
            background: None,
        }
    }

    /// Creates a session holding `elements`.
    pub fn with_elements(config: Config, elements: Vec<PlacedElement>) -> DesignerResult<Self> {
        let mut session = Self::new(config);
        session.load_elements(elements)?;
        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub(crate) fn element_mut(&mut self, id: ElementId) -> Option<&mut PlacedElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Replaces the element collection, e.g. after loading a saved layout.
    /// The in-flight gesture is dropped; selected ids that are still present
    /// stay selected.
    pub fn load_elements(&mut self, elements: Vec<PlacedElement>) -> DesignerResult<()> {
        self.elements = normalize_layout(elements)?;
        self.selection.retain_existing(&self.elements);
        self.gestures.end();
        tracing::info!("Session loaded {} element(s)", self.elements.len());
        Ok(())
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// The element the properties panel shows.
    pub fn primary_element(&self) -> Option<&PlacedElement> {
        self.selection.primary().and_then(|id| self.element(id))
    }

    /// Elements a bulk operation would act on, in collection order.
    pub fn selected_elements(&self) -> Vec<&PlacedElement> {
        let targets = self.selection.targets(&self.elements);
        self.elements
            .iter()
            .filter(|el| targets.contains(&el.id))
            .collect()
    }

    /// Bounding rectangle of the selection, for the selection overlay.
    pub fn selection_bounds(&self) -> Option<Rect> {
        spatial::union_bounds(self.selected_elements())
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Sets the zoom directly (zoom slider), clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        self.view.set_zoom(zoom)
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.view.set_pan(pan);
    }

    pub fn gesture(&self) -> &Gesture {
        self.gestures.current()
    }

    /// Marquee rectangle to draw, while one is being dragged out.
    pub fn selection_box(&self) -> Option<SelectionBox> {
        match self.gestures.current() {
            Gesture::Marquee(selection_box) => Some(*selection_box),
            _ => None,
        }
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn background_image(&self) -> Option<BackgroundImage> {
        self.background
    }

    pub fn layout_size(&self) -> Size {
        self.layout_size
    }

    /// Places the canvas container in the viewport and records its width for
    /// the fit-container zoom policy.
    pub fn set_container(&mut self, origin: Point, width: f64) {
        self.container_origin = origin;
        self.view.set_container_width(width);
    }

    pub fn set_layout_size(&mut self, size: Size) {
        self.layout_size = size;
    }

    /// Sets or clears the background image. The element layer takes the
    /// image's natural size and the view zooms to fit the container.
    pub fn set_background_image(&mut self, image: Option<BackgroundImage>) {
        self.background = image;
        match image {
            Some(bg) => {
                self.layout_size = Size::new(bg.natural_width as f64, bg.natural_height as f64);
                self.view.set_background_width(bg.natural_width as f64);
            }
            None => self.view.clear_background(),
        }
    }

    /// Rendered rectangle of the element layer in viewport coordinates.
    pub fn layer_bounds(&self) -> Rect {
        let origin = self.container_origin + self.view.pan();
        let zoom = self.view.zoom();
        Rect::new(
            origin.x,
            origin.y,
            self.layout_size.width * zoom,
            self.layout_size.height * zoom,
        )
    }

    /// Maps a viewport point to canvas-local coordinates (clamped `>= 0`).
    pub fn to_canvas(&self, screen: Point) -> Point {
        coords::to_canvas_space(screen, &self.layer_bounds(), self.layout_size)
    }

    /// Maps a canvas-local point back to viewport coordinates.
    pub fn to_viewport(&self, canvas: Point) -> Point {
        coords::canvas_to_viewport(canvas, &self.layer_bounds(), self.layout_size)
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Removes and returns pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}

impl Default for CanvasSession {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// "1 element" / "3 elements"
pub(crate) fn element_count(n: usize) -> String {
    if n == 1 {
        "1 element".to_string()
    } else {
        format!("{} elements", n)
    }
}
