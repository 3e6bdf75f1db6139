//! # FormCanvas Designer
//!
//! Spatial interaction core of the form/workflow canvas: mapping pointer
//! input into canvas space, dragging and resizing elements, selection,
//! paste placement and the pan/zoom view transform.
//!
//! ## Core Components
//!
//! - **Coordinates**: viewport to canvas-local mapping, independent of zoom
//! - **Gestures**: explicit Idle/Dragging/Resizing/Marquee/Panning state machine
//! - **Selection**: primary + secondary selection, click modes, marquee
//! - **Clipboard**: copy and bounded-search paste placement
//! - **Viewport**: multiplicative zoom with configurable minimum, free pan
//! - **Session**: owns all of the above for one canvas
//!
//! ## Architecture
//!
//! ```text
//! pointer event
//!   └── coords (viewport -> canvas space)
//!         ├── gesture (drag / resize / pan)  -> element geometry
//!         └── selection_manager (click / marquee)
//!
//! key command
//!   ├── selection_manager (select-all / escape)
//!   ├── clipboard (copy / paste)
//!   └── delete
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use formcanvas_core::Point;
//! use formcanvas_designer::{CanvasSession, KeyCommand, Modifiers, PaletteItem};
//! use formcanvas_core::ElementKindTag;
//! use formcanvas_settings::Config;
//!
//! let mut session = CanvasSession::new(Config::form_canvas());
//! let item = PaletteItem::new(ElementKindTag::Text, "Name");
//! let id = session.drop_from_palette(&item, Point::new(300.0, 200.0));
//!
//! session.pointer_down(Point::new(300.0, 200.0), Modifiers::NONE);
//! session.pointer_move(Point::new(340.0, 220.0));
//! session.pointer_up(Point::new(340.0, 220.0));
//! assert_eq!(session.element(id).unwrap().position, Point::new(240.0, 200.0));
//!
//! session.handle_key(KeyCommand::Delete);
//! assert!(session.elements().is_empty());
//! ```

pub mod background;
pub mod clipboard;
pub mod coords;
pub mod error;
pub mod gesture;
pub mod model;
pub mod palette;
pub mod selection_manager;
pub mod serialization;
pub mod session;
pub mod spatial;
pub mod viewport;

pub use background::BackgroundImage;
pub use clipboard::{place_pasted, Clipboard, PasteBounds};
pub use coords::{canvas_to_viewport, relative_to_canvas, to_canvas_space};
pub use error::{DesignerError, DesignerResult};
pub use gesture::{apply_resize, Gesture, GestureController, GestureUpdate, PointerSample, ResizeHandle};
pub use model::{ChartType, ElementId, ElementKind, ElementPatch, PlacedElement, TableColumn, Validation};
pub use palette::PaletteItem;
pub use selection_manager::{ClickMode, Modifiers, SelectionBox, SelectionManager, SelectionState};
pub use serialization::{layout_from_json, layout_to_json, load_layout, save_layout};
pub use session::{CanvasSession, KeyCommand, PointerTarget};
pub use viewport::{Affine2, ViewTransform};
