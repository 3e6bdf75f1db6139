//! Configuration for FormCanvas canvases
//!
//! Provides configuration file handling, settings management, and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Canvas behaviour (background drag, resizable kinds, default sizes)
//! - Zoom policy (minimum policy, maximum, step factors, wheel zoom)
//! - Paste area bounds
//! - Notifications

use formcanvas_core::constants::{
    DEFAULT_ELEMENT_HEIGHT, DEFAULT_ELEMENT_WIDTH, DEFAULT_PASTE_MAX_X, DEFAULT_PASTE_MAX_Y,
    DEFAULT_ZOOM_MAX, DEFAULT_ZOOM_MIN, HANDLE_HIT_SIZE, MIN_ELEMENT_HEIGHT, MIN_ELEMENT_WIDTH,
    NOTIFICATION_DURATION_MS, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use formcanvas_core::{ElementKindTag, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, SettingsResult};

/// What a pointer drag on empty canvas background does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundDrag {
    /// Rectangle (marquee) selection, as on the form canvas
    Marquee,
    /// Pan the view, as on the workflow canvas
    Pan,
}

impl Default for BackgroundDrag {
    fn default() -> Self {
        Self::Marquee
    }
}

impl fmt::Display for BackgroundDrag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marquee => write!(f, "marquee"),
            Self::Pan => write!(f, "pan"),
        }
    }
}

/// How the lower zoom bound is determined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum ZoomMinPolicy {
    /// A constant minimum
    Fixed { value: f64 },
    /// `min(container_width / natural_width, 1)` once a background image is
    /// known; `floor` applies until then
    FitContainer { floor: f64 },
}

impl ZoomMinPolicy {
    /// Resolves the minimum zoom for the given container and content widths.
    pub fn resolve(&self, container_width: Option<f64>, natural_width: Option<f64>) -> f64 {
        match *self {
            Self::Fixed { value } => value,
            Self::FitContainer { floor } => match (container_width, natural_width) {
                (Some(container), Some(natural)) if container > 0.0 && natural > 0.0 => {
                    (container / natural).min(1.0)
                }
                _ => floor,
            },
        }
    }
}

impl Default for ZoomMinPolicy {
    fn default() -> Self {
        Self::Fixed {
            value: DEFAULT_ZOOM_MIN,
        }
    }
}

/// Canvas interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Behaviour of a drag on empty background
    pub background_drag: BackgroundDrag,
    /// Kinds that get resize handles; everything else is drag-only
    pub resizable_kinds: BTreeSet<ElementKindTag>,
    /// Width of elements created from the palette
    pub default_element_width: f64,
    /// Height of elements created from the palette
    pub default_element_height: f64,
    /// Hit area of a resize handle, in canvas units
    pub handle_hit_size: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background_drag: BackgroundDrag::Marquee,
            resizable_kinds: ElementKindTag::ALL
                .iter()
                .copied()
                .filter(|k| !matches!(k, ElementKindTag::Checkbox | ElementKindTag::RadioGroup))
                .collect(),
            default_element_width: DEFAULT_ELEMENT_WIDTH,
            default_element_height: DEFAULT_ELEMENT_HEIGHT,
            handle_hit_size: HANDLE_HIT_SIZE,
        }
    }
}

impl CanvasSettings {
    pub fn is_resizable(&self, kind: ElementKindTag) -> bool {
        self.resizable_kinds.contains(&kind)
    }
}

/// Zoom policy settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Upper zoom bound
    pub max: f64,
    /// Multiplier applied by one zoom-in step
    pub zoom_in_factor: f64,
    /// Multiplier applied by one zoom-out step
    pub zoom_out_factor: f64,
    /// Whether the mouse wheel zooms (otherwise it is left to native scroll)
    pub wheel_zoom: bool,
    /// Lower zoom bound policy
    pub min: ZoomMinPolicy,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            max: DEFAULT_ZOOM_MAX,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            wheel_zoom: true,
            min: ZoomMinPolicy::default(),
        }
    }
}

/// Paste area settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteSettings {
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            max_x: DEFAULT_PASTE_MAX_X,
            max_y: DEFAULT_PASTE_MAX_Y,
        }
    }
}

/// Notification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub enabled: bool,
    /// Display time in milliseconds
    pub duration_ms: u64,
}

impl NotificationSettings {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }
}

/// Complete canvas configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasSettings,
    pub zoom: ZoomSettings,
    pub paste: PasteSettings,
    pub notifications: NotificationSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset matching the image-backed form canvas: marquee selection on
    /// background drag, image-derived minimum zoom, wheel left to scrolling.
    pub fn form_canvas() -> Self {
        Self {
            canvas: CanvasSettings {
                background_drag: BackgroundDrag::Marquee,
                ..CanvasSettings::default()
            },
            zoom: ZoomSettings {
                wheel_zoom: false,
                min: ZoomMinPolicy::FitContainer {
                    floor: DEFAULT_ZOOM_MIN,
                },
                ..ZoomSettings::default()
            },
            ..Self::default()
        }
    }

    /// Preset matching the workflow canvas: background drag pans, fixed
    /// minimum zoom, wheel zoom enabled.
    pub fn workflow_canvas() -> Self {
        Self {
            canvas: CanvasSettings {
                background_drag: BackgroundDrag::Pan,
                ..CanvasSettings::default()
            },
            zoom: ZoomSettings {
                wheel_zoom: true,
                min: ZoomMinPolicy::Fixed {
                    value: DEFAULT_ZOOM_MIN,
                },
                ..ZoomSettings::default()
            },
            ..Self::default()
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => self.to_toml_string()?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Serialize as pretty TOML
    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let canvas = &self.canvas;
        if canvas.default_element_width < MIN_ELEMENT_WIDTH {
            return Err(Error::invalid_value(
                "canvas.default_element_width",
                format!("must be >= {}", MIN_ELEMENT_WIDTH),
            ));
        }
        if canvas.default_element_height < MIN_ELEMENT_HEIGHT {
            return Err(Error::invalid_value(
                "canvas.default_element_height",
                format!("must be >= {}", MIN_ELEMENT_HEIGHT),
            ));
        }
        if canvas.handle_hit_size <= 0.0 {
            return Err(Error::invalid_value("canvas.handle_hit_size", "must be > 0"));
        }

        let zoom = &self.zoom;
        if !(zoom.max > 0.0) {
            return Err(Error::invalid_value("zoom.max", "must be > 0"));
        }
        if !(zoom.zoom_in_factor > 1.0) {
            return Err(Error::invalid_value("zoom.zoom_in_factor", "must be > 1"));
        }
        if !(zoom.zoom_out_factor > 0.0 && zoom.zoom_out_factor < 1.0) {
            return Err(Error::invalid_value(
                "zoom.zoom_out_factor",
                "must be between 0 and 1",
            ));
        }
        let min = match zoom.min {
            ZoomMinPolicy::Fixed { value } => ("zoom.min.value", value),
            ZoomMinPolicy::FitContainer { floor } => ("zoom.min.floor", floor),
        };
        if !(min.1 > 0.0 && min.1 <= zoom.max) {
            return Err(Error::invalid_value(
                min.0,
                format!("must be in (0, {}]", zoom.max),
            ));
        }

        if !(self.paste.max_x > 0.0 && self.paste.max_y > 0.0) {
            return Err(Error::invalid_value("paste", "paste area must be > 0"));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}
