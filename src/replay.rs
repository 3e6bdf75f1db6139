//! Scripted replay of canvas input.
//!
//! A replay script is a JSON array of [`ReplayEvent`]s, each tagged by its
//! `event` field. Events are fed to a [`CanvasSession`] in order, exactly as
//! an embedding UI would forward them, which makes interaction bugs easy to
//! reproduce from the command line:
//!
//! ```json
//! [
//!   { "event": "drop", "kind": "email", "label": "Email", "x": 300, "y": 200 },
//!   { "event": "pointer-down", "x": 300, "y": 200 },
//!   { "event": "pointer-up", "x": 360, "y": 240 },
//!   { "event": "key", "command": "copy" },
//!   { "event": "key", "command": "paste" }
//! ]
//! ```

use anyhow::{Context, Result};
use formcanvas_core::{ElementKindTag, Point, Rect, Size};
use formcanvas_designer::{
    BackgroundImage, CanvasSession, ElementPatch, KeyCommand, Modifiers, PaletteItem,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One recorded input event. Coordinates are viewport pixels unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ReplayEvent {
    /// Positions the canvas container.
    Container { x: f64, y: f64, width: f64 },
    /// Sets the untransformed element layer size.
    LayoutSize { width: f64, height: f64 },
    /// Loads a background image from disk.
    Background { path: PathBuf },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// Clicks the element at `index` in collection order.
    Click {
        index: usize,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Key { command: KeyCommand },
    Wheel { x: f64, y: f64, delta_y: f64 },
    /// Drops a palette item at a viewport position.
    Drop {
        kind: ElementKindTag,
        label: String,
        x: f64,
        y: f64,
    },
    /// Applies a properties-panel edit to the element at `index`.
    Patch { index: usize, patch: ElementPatch },
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default)]
pub struct ReplaySummary {
    pub events: usize,
    pub notifications: Vec<String>,
    /// Bounds of the selection left at the end of the script.
    pub selection_bounds: Option<Rect>,
}

/// Reads a replay script file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<ReplayEvent>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse replay script {}", path.display()))
}

/// Applies a single event to `session`.
pub fn apply_event(session: &mut CanvasSession, event: &ReplayEvent) -> Result<()> {
    match event {
        ReplayEvent::Container { x, y, width } => {
            session.set_container(Point::new(*x, *y), *width);
        }
        ReplayEvent::LayoutSize { width, height } => {
            session.set_layout_size(Size::new(*width, *height));
        }
        ReplayEvent::Background { path } => {
            let image = BackgroundImage::from_path(path)
                .with_context(|| format!("Failed to load background {}", path.display()))?;
            session.set_background_image(Some(image));
        }
        ReplayEvent::PointerDown { x, y, modifiers } => {
            session.pointer_down(Point::new(*x, *y), *modifiers);
        }
        ReplayEvent::PointerMove { x, y } => {
            session.pointer_move(Point::new(*x, *y));
        }
        ReplayEvent::PointerUp { x, y } => {
            session.pointer_up(Point::new(*x, *y));
        }
        ReplayEvent::Click { index, modifiers } => {
            let id = element_at(session, *index)?;
            session.click_element(id, *modifiers);
        }
        ReplayEvent::Key { command } => {
            session.handle_key(*command);
        }
        ReplayEvent::Wheel { x, y, delta_y } => {
            session.on_wheel(*delta_y, Point::new(*x, *y));
        }
        ReplayEvent::Drop { kind, label, x, y } => {
            let item = PaletteItem::new(*kind, label.clone());
            session.drop_from_palette(&item, Point::new(*x, *y));
        }
        ReplayEvent::Patch { index, patch } => {
            let id = element_at(session, *index)?;
            session.apply_patch(id, patch)?;
        }
    }
    Ok(())
}

fn element_at(session: &CanvasSession, index: usize) -> Result<formcanvas_designer::ElementId> {
    session
        .elements()
        .get(index)
        .map(|el| el.id)
        .with_context(|| {
            format!(
                "No element at index {} ({} on canvas)",
                index,
                session.elements().len()
            )
        })
}

/// Applies every event in order, collecting the notifications raised.
pub fn run(session: &mut CanvasSession, events: &[ReplayEvent]) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for (n, event) in events.iter().enumerate() {
        tracing::debug!("replay event {}: {:?}", n, event);
        apply_event(session, event).with_context(|| format!("Replay failed at event {}", n))?;
        summary.events += 1;
        summary
            .notifications
            .extend(session.take_notifications().iter().map(|note| note.to_string()));
    }
    summary.selection_bounds = session.selection_bounds();
    tracing::info!(
        "Replayed {} event(s), {} element(s) on canvas",
        summary.events,
        session.elements().len()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcanvas_settings::Config;

    #[test]
    fn test_parse_script() {
        let json = r#"[
            {"event": "drop", "kind": "multiline-text", "label": "Notes", "x": 300, "y": 200},
            {"event": "pointer-down", "x": 300, "y": 200, "modifiers": {"shift": true}},
            {"event": "key", "command": "select-all"},
            {"event": "patch", "index": 0, "patch": {"required": true}}
        ]"#;
        let events: Vec<ReplayEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[1],
            ReplayEvent::PointerDown {
                x: 300.0,
                y: 200.0,
                modifiers: Modifiers::SHIFT
            }
        );
        assert_eq!(
            events[2],
            ReplayEvent::Key {
                command: KeyCommand::SelectAll
            }
        );
    }

    #[test]
    fn test_run_drop_drag_copy_paste() {
        let events = vec![
            ReplayEvent::Drop {
                kind: ElementKindTag::Email,
                label: "Email".to_string(),
                x: 300.0,
                y: 200.0,
            },
            ReplayEvent::PointerDown {
                x: 300.0,
                y: 200.0,
                modifiers: Modifiers::NONE,
            },
            ReplayEvent::PointerMove { x: 320.0, y: 210.0 },
            ReplayEvent::PointerUp { x: 320.0, y: 210.0 },
            ReplayEvent::Key {
                command: KeyCommand::Copy,
            },
            ReplayEvent::Key {
                command: KeyCommand::Paste,
            },
        ];
        let mut session = CanvasSession::new(Config::form_canvas());
        let summary = run(&mut session, &events).unwrap();

        assert_eq!(summary.events, 6);
        assert_eq!(session.elements().len(), 2);
        assert_eq!(session.elements()[0].position, Point::new(220.0, 190.0));
        assert_eq!(session.elements()[1].position, Point::new(240.0, 210.0));
        assert_eq!(
            summary.notifications,
            vec!["[SUCCESS] Copied 1 element", "[SUCCESS] Pasted 1 element"]
        );
        assert_eq!(
            summary.selection_bounds,
            Some(Rect::new(240.0, 210.0, 200.0, 40.0))
        );
    }

    #[test]
    fn test_bad_index_reports_event_number() {
        let events = vec![ReplayEvent::Click {
            index: 3,
            modifiers: Modifiers::NONE,
        }];
        let mut session = CanvasSession::new(Config::form_canvas());
        let err = run(&mut session, &events).unwrap_err();
        assert!(err.to_string().contains("event 0"));
    }
}
