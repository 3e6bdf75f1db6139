//! # FormCanvas
//!
//! Canvas coordinate and spatial-interaction core for visual form and
//! workflow builders.
//!
//! ## Architecture
//!
//! FormCanvas is organized as a workspace with multiple crates:
//!
//! 1. **formcanvas-core** - Geometry primitives, kind tags, constants, errors, notifications
//! 2. **formcanvas-settings** - Canvas configuration and its persistence
//! 3. **formcanvas-designer** - Coordinate mapping, gestures, selection, paste, view transform
//! 4. **formcanvas** - Logging setup, scripted replay and the command-line tool

pub mod replay;

pub use formcanvas_designer as designer;
pub use formcanvas_settings as settings;

pub use formcanvas_core::{ElementKindTag, Error, Point, Rect, Result, Size};
pub use formcanvas_designer::{
    CanvasSession, ElementId, ElementKind, ElementPatch, KeyCommand, Modifiers, PaletteItem,
    PlacedElement, ViewTransform,
};
pub use formcanvas_settings::Config;
pub use replay::{ReplayEvent, ReplaySummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so stdout stays free for command output
/// - RUST_LOG environment variable support
/// - `json` switches to one JSON object per line
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
