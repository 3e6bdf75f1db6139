//! FormCanvas Settings Crate
//!
//! Handles canvas configuration (zoom policy, paste area, background drag
//! behaviour, resizable kinds) and its persistence as JSON or TOML.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    BackgroundDrag, CanvasSettings, Config, NotificationSettings, PasteSettings, ZoomMinPolicy,
    ZoomSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
pub use persistence::{default_config_path, load_or_default, save};
