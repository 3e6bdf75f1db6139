//! # FormCanvas Core
//!
//! Core types shared by the FormCanvas crates: canvas geometry primitives,
//! element kind tags, layout constants, the common error type and the
//! transient user notification queue.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod kinds;
pub mod notification;

pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use kinds::ElementKindTag;
pub use notification::{Notification, NotificationLevel, NotificationQueue};
