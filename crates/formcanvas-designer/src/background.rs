//! Background raster image metadata.
//!
//! Only the natural pixel size matters to the canvas: the form canvas derives
//! its minimum zoom from the image width. Pixels are never decoded.

use std::path::Path;

use crate::error::{DesignerError, DesignerResult};

/// Natural dimensions of a background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundImage {
    pub natural_width: u32,
    pub natural_height: u32,
}

impl BackgroundImage {
    pub fn new(natural_width: u32, natural_height: u32) -> DesignerResult<Self> {
        if natural_width == 0 || natural_height == 0 {
            return Err(DesignerError::EmptyImage {
                width: natural_width,
                height: natural_height,
            });
        }
        Ok(Self {
            natural_width,
            natural_height,
        })
    }

    /// Reads the image header at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> DesignerResult<Self> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        tracing::debug!(
            "Background image {} is {}x{}",
            path.display(),
            width,
            height
        );
        Self::new(width, height)
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.natural_width as f64 / self.natural_height as f64
    }
}
