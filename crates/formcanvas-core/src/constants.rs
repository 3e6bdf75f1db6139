//! Layout and interaction constants shared across the workspace.

/// Minimum element width enforced by resize and property edits.
pub const MIN_ELEMENT_WIDTH: f64 = 100.0;

/// Minimum element height enforced by resize and property edits.
pub const MIN_ELEMENT_HEIGHT: f64 = 40.0;

/// Width given to elements dropped from the palette.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 200.0;

/// Height given to elements dropped from the palette.
pub const DEFAULT_ELEMENT_HEIGHT: f64 = 40.0;

/// Offset applied to every pasted element relative to its source.
pub const PASTE_OFFSET: f64 = 20.0;

/// Extra diagonal offset per element index within one paste.
pub const PASTE_STAGGER: f64 = 10.0;

/// Two elements closer than this on both axes count as occupying the same spot.
pub const PASTE_PROXIMITY: f64 = 10.0;

/// Diagonal step taken while searching for a free paste position.
pub const PASTE_SEARCH_STEP: f64 = 20.0;

/// Total offset the paste search may spend before accepting an overlap.
pub const PASTE_SEARCH_BUDGET: f64 = 200.0;

/// Default right edge of the paste area.
pub const DEFAULT_PASTE_MAX_X: f64 = 800.0;

/// Default bottom edge of the paste area.
pub const DEFAULT_PASTE_MAX_Y: f64 = 600.0;

/// Fixed minimum zoom used by the workflow canvas.
pub const DEFAULT_ZOOM_MIN: f64 = 0.3;

/// Maximum zoom for both canvases.
pub const DEFAULT_ZOOM_MAX: f64 = 3.0;

/// Zoom multiplier for a zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 1.2;

/// Zoom multiplier for a zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Side length, in canvas units, of the square hit area around a resize handle.
pub const HANDLE_HIT_SIZE: f64 = 8.0;

/// How long a notification stays visible.
pub const NOTIFICATION_DURATION_MS: u64 = 3000;
