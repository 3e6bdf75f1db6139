//! Pointer to canvas coordinate mapping.
//!
//! Element positions are stored in un-zoomed canvas-local coordinates so that
//! saved layouts do not depend on the zoom they were edited at. Pointer events
//! arrive in viewport space; the element layer's on-screen box (after the view
//! transform) can differ in size from its layout box, so the mapping scales
//! each axis by `layout / rendered`.
//!
//! ```text
//! rel    = pointer - bounds.origin
//! canvas = rel * layout_size / bounds.size     (when both sizes are known)
//! canvas = rel                                 (otherwise)
//! ```

use formcanvas_core::{Point, Rect, Size};

/// Maps a viewport pointer position into canvas-local coordinates, clamped to
/// `>= 0` on both axes.
///
/// `bounds` is the element layer's rendered rectangle in viewport space and
/// `layout_size` its untransformed size. A zero or missing layout size (for
/// example before the layer is mounted) falls back to the unscaled offset.
pub fn to_canvas_space(pointer: Point, bounds: &Rect, layout_size: Size) -> Point {
    relative_to_canvas(pointer, bounds, layout_size).clamp_non_negative()
}

/// Same mapping as [`to_canvas_space`] without the clamp. Drag math needs
/// the signed value so that the grab offset is preserved near the edges.
pub fn relative_to_canvas(pointer: Point, bounds: &Rect, layout_size: Size) -> Point {
    let rel = pointer - bounds.origin();
    let (sx, sy) = axis_scale(bounds, layout_size);
    Point::new(rel.x * sx, rel.y * sy)
}

/// Inverse mapping: canvas-local point to viewport coordinates.
pub fn canvas_to_viewport(point: Point, bounds: &Rect, layout_size: Size) -> Point {
    let (sx, sy) = axis_scale(bounds, layout_size);
    Point::new(bounds.x + point.x / sx, bounds.y + point.y / sy)
}

fn axis_scale(bounds: &Rect, layout_size: Size) -> (f64, f64) {
    if layout_size.is_degenerate() || bounds.size().is_degenerate() {
        return (1.0, 1.0);
    }
    (
        layout_size.width / bounds.width,
        layout_size.height / bounds.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_when_sizes_match() {
        let bounds = Rect::new(100.0, 50.0, 800.0, 600.0);
        let p = to_canvas_space(Point::new(150.0, 80.0), &bounds, Size::new(800.0, 600.0));
        assert_eq!(p, Point::new(50.0, 30.0));
    }

    #[test]
    fn test_scales_each_axis_independently() {
        // Rendered at 2x horizontally, 0.5x vertically
        let bounds = Rect::new(0.0, 0.0, 1600.0, 300.0);
        let p = to_canvas_space(Point::new(400.0, 150.0), &bounds, Size::new(800.0, 600.0));
        assert_eq!(p, Point::new(200.0, 300.0));
    }

    #[test]
    fn test_missing_layout_size_falls_back_to_relative_offset() {
        let bounds = Rect::new(10.0, 10.0, 1600.0, 1200.0);
        let p = to_canvas_space(Point::new(30.0, 40.0), &bounds, Size::default());
        assert_eq!(p, Point::new(20.0, 30.0));
    }

    #[test]
    fn test_zero_bounds_falls_back_to_relative_offset() {
        let bounds = Rect::new(10.0, 10.0, 0.0, 0.0);
        let p = to_canvas_space(Point::new(30.0, 40.0), &bounds, Size::new(800.0, 600.0));
        assert_eq!(p, Point::new(20.0, 30.0));
    }

    #[test]
    fn test_clamps_outside_pointer() {
        let bounds = Rect::new(100.0, 100.0, 800.0, 600.0);
        let p = to_canvas_space(Point::new(90.0, 50.0), &bounds, Size::new(800.0, 600.0));
        assert_eq!(p, Point::ORIGIN);

        let raw = relative_to_canvas(Point::new(90.0, 50.0), &bounds, Size::new(800.0, 600.0));
        assert_eq!(raw, Point::new(-10.0, -50.0));
    }

    #[test]
    fn test_canvas_to_viewport_inverts_mapping() {
        let bounds = Rect::new(20.0, 40.0, 400.0, 300.0);
        let layout = Size::new(800.0, 600.0);
        let canvas = Point::new(120.0, 90.0);
        let screen = canvas_to_viewport(canvas, &bounds, layout);
        assert_eq!(to_canvas_space(screen, &bounds, layout), canvas);
    }
}
