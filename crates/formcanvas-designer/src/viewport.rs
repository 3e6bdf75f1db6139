//! View transform for the element layer.
//!
//! Pan and zoom are applied as one composed transform to the whole element
//! layer; element positions are never pre-multiplied by zoom. Layer space is
//! canvas-local space, screen space is relative to the canvas container's
//! top-left corner.
//!
//! ```text
//! screen = pan + layer * zoom
//! layer  = (screen - pan) / zoom
//! ```

use std::fmt;

use formcanvas_core::constants::{DEFAULT_ZOOM_MAX, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use formcanvas_core::Point;
use formcanvas_settings::{ZoomMinPolicy, ZoomSettings};

const ZOOM_EPSILON: f64 = 1e-9;

/// A 2D affine transform `[a c tx; b d ty]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Affine2 {
    pub const IDENTITY: Affine2 = Affine2 {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(s: f64) -> Self {
        Self {
            a: s,
            d: s,
            ..Self::IDENTITY
        }
    }

    /// `self * other`: applies `other` first, then `self`.
    pub fn then(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Inverse transform, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Affine2> {
        let det = self.a * self.d - self.b * self.c;
        if det.abs() < f64::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Affine2 {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            tx: (self.c * self.ty - self.d * self.tx) * inv,
            ty: (self.b * self.tx - self.a * self.ty) * inv,
        })
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pan and zoom state of a canvas.
#[derive(Debug, Clone)]
pub struct ViewTransform {
    zoom: f64,
    pan: Point,
    zoom_max: f64,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
    wheel_zoom: bool,
    min_policy: ZoomMinPolicy,
    container_width: Option<f64>,
    natural_width: Option<f64>,
}

impl ViewTransform {
    /// Creates a view at zoom 1 (or the nearest allowed value) and no pan.
    ///
    /// Out-of-range settings fall back to the defaults, so the zoom range is
    /// always positive and non-empty.
    pub fn new(settings: &ZoomSettings) -> Self {
        let zoom_max = if settings.max.is_finite() && settings.max > 0.0 {
            settings.max
        } else {
            tracing::warn!("zoom.max {} out of range, using {}", settings.max, DEFAULT_ZOOM_MAX);
            DEFAULT_ZOOM_MAX
        };
        let zoom_in_factor = if settings.zoom_in_factor.is_finite() && settings.zoom_in_factor > 1.0 {
            settings.zoom_in_factor
        } else {
            tracing::warn!(
                "zoom.zoom_in_factor {} out of range, using {}",
                settings.zoom_in_factor,
                ZOOM_IN_FACTOR
            );
            ZOOM_IN_FACTOR
        };
        let zoom_out_factor = if settings.zoom_out_factor > 0.0 && settings.zoom_out_factor < 1.0 {
            settings.zoom_out_factor
        } else {
            tracing::warn!(
                "zoom.zoom_out_factor {} out of range, using {}",
                settings.zoom_out_factor,
                ZOOM_OUT_FACTOR
            );
            ZOOM_OUT_FACTOR
        };
        let min_bound = match settings.min {
            ZoomMinPolicy::Fixed { value } => value,
            ZoomMinPolicy::FitContainer { floor } => floor,
        };
        let min_policy = if min_bound.is_finite() && min_bound > 0.0 {
            settings.min
        } else {
            tracing::warn!("zoom.min {:?} out of range, using default", settings.min);
            ZoomMinPolicy::default()
        };

        let mut view = Self {
            zoom: 1.0,
            pan: Point::ORIGIN,
            zoom_max,
            zoom_in_factor,
            zoom_out_factor,
            wheel_zoom: settings.wheel_zoom,
            min_policy,
            container_width: None,
            natural_width: None,
        };
        view.zoom = view.clamp_zoom(1.0);
        view
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Current lower zoom bound, resolved from the minimum policy.
    pub fn zoom_min(&self) -> f64 {
        self.min_policy
            .resolve(self.container_width, self.natural_width)
            .min(self.zoom_max)
    }

    pub fn zoom_max(&self) -> f64 {
        self.zoom_max
    }

    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.zoom_min(), self.zoom_max)
    }

    /// Sets the zoom level, clamped to `[zoom_min, zoom_max]`. Non-finite or
    /// non-positive values are ignored. Returns `true` if the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !zoom.is_finite() || zoom <= 0.0 {
            return false;
        }
        let clamped = self.clamp_zoom(zoom);
        if (clamped - self.zoom).abs() < ZOOM_EPSILON {
            return false;
        }
        self.zoom = clamped;
        tracing::trace!("View zoom set to {:.3}", self.zoom);
        true
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.zoom_max - ZOOM_EPSILON
    }

    /// Zoom-out control state; disabled at the minimum.
    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.zoom_min() + ZOOM_EPSILON
    }

    /// Multiplies the zoom by the zoom-in factor.
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom * self.zoom_in_factor)
    }

    /// Multiplies the zoom by the zoom-out factor. A no-op at the minimum.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        self.set_zoom(self.zoom * self.zoom_out_factor)
    }

    /// Zooms while keeping `screen_point` over the same layer point.
    pub fn zoom_at(&mut self, screen_point: Point, new_zoom: f64) -> bool {
        let anchor = self.screen_to_layer(screen_point);
        if !self.set_zoom(new_zoom) {
            return false;
        }
        self.pan = screen_point - anchor.scale(self.zoom);
        true
    }

    /// Handles a wheel event. Returns `false` when wheel zoom is disabled so
    /// the caller can leave the event to native scrolling.
    pub fn on_wheel(&mut self, delta_y: f64, screen_point: Option<Point>) -> bool {
        if !self.wheel_zoom {
            return false;
        }
        let factor = if delta_y < 0.0 {
            self.zoom_in_factor
        } else if delta_y > 0.0 {
            if !self.can_zoom_out() {
                return true;
            }
            self.zoom_out_factor
        } else {
            return true;
        };
        let target = self.zoom * factor;
        match screen_point {
            Some(p) => self.zoom_at(p, target),
            None => self.set_zoom(target),
        };
        true
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Pans by a delta amount. Pan is never clamped.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = self.pan.offset(dx, dy);
    }

    /// Resets zoom to 1.0 (clamped) and pan to origin.
    pub fn reset(&mut self) {
        self.zoom = self.clamp_zoom(1.0);
        self.pan = Point::ORIGIN;
    }

    /// Updates the container width used by the fit-container policy. Pulls
    /// the zoom up if the new minimum exceeds it.
    pub fn set_container_width(&mut self, width: f64) {
        self.container_width = (width > 0.0).then_some(width);
        self.reclamp();
    }

    /// Records a background image's natural width and scales the layer to
    /// the fit zoom.
    pub fn set_background_width(&mut self, natural_width: f64) {
        self.natural_width = (natural_width > 0.0).then_some(natural_width);
        self.zoom = self.zoom_min();
        tracing::debug!(
            "Background width {:.0}, zoom fitted to {:.3}",
            natural_width,
            self.zoom
        );
    }

    pub fn clear_background(&mut self) {
        self.natural_width = None;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        self.zoom = self.clamp_zoom(self.zoom);
    }

    /// `translate(pan) * scale(zoom)`, origin at top-left.
    pub fn transform(&self) -> Affine2 {
        Affine2::translate(self.pan.x, self.pan.y).then(&Affine2::scale(self.zoom))
    }

    pub fn layer_to_screen(&self, p: Point) -> Point {
        self.pan + p.scale(self.zoom)
    }

    pub fn screen_to_layer(&self, p: Point) -> Point {
        (p - self.pan).scale(1.0 / self.zoom)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(&ZoomSettings {
            max: DEFAULT_ZOOM_MAX,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            wheel_zoom: false,
            min: ZoomMinPolicy::default(),
        })
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan.x, self.pan.y
        )
    }
}
