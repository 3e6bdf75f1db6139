//! Property tests for the geometry invariants of drag, resize and mapping.

use formcanvas_core::{Point, Rect, Size};
use formcanvas_designer::gesture::{apply_resize, ResizeHandle};
use formcanvas_designer::{to_canvas_space, CanvasSession, ElementKind, Modifiers, PlacedElement};
use formcanvas_settings::Config;
use proptest::prelude::*;

fn handle_strategy() -> impl Strategy<Value = ResizeHandle> {
    prop::sample::select(ResizeHandle::ALL.to_vec())
}

proptest! {
    #[test]
    fn resize_never_breaks_minimum_or_origin(
        handle in handle_strategy(),
        x in 0.0f64..1000.0,
        y in 0.0f64..1000.0,
        w in 100.0f64..600.0,
        h in 40.0f64..400.0,
        dx in -2000.0f64..2000.0,
        dy in -2000.0f64..2000.0,
    ) {
        let (pos, size) = apply_resize(handle, Point::new(x, y), Size::new(w, h), dx, dy);
        prop_assert!(pos.x >= 0.0 && pos.y >= 0.0);
        prop_assert!(size.width >= 100.0 && size.height >= 40.0);
    }

    #[test]
    fn resize_keeps_opposite_edges_when_unclamped(
        handle in handle_strategy(),
        x in 500.0f64..1000.0,
        y in 500.0f64..1000.0,
        w in 300.0f64..600.0,
        h in 200.0f64..400.0,
        dx in -150.0f64..150.0,
        dy in -100.0f64..100.0,
    ) {
        let before = Rect::new(x, y, w, h);
        let (pos, size) = apply_resize(handle, before.origin(), before.size(), dx, dy);
        let after = Rect::from_origin_size(pos, size);

        if handle.moves_left() {
            prop_assert!((after.max_x() - before.max_x()).abs() < 1e-9);
            prop_assert!((after.min_x() - (x + dx)).abs() < 1e-9);
        } else {
            prop_assert_eq!(after.min_x(), before.min_x());
        }
        if handle.moves_top() {
            prop_assert!((after.max_y() - before.max_y()).abs() < 1e-9);
            prop_assert!((after.min_y() - (y + dy)).abs() < 1e-9);
        } else {
            prop_assert_eq!(after.min_y(), before.min_y());
        }
    }

    #[test]
    fn mapped_points_are_never_negative(
        px in -500.0f64..2000.0,
        py in -500.0f64..2000.0,
        bx in -200.0f64..200.0,
        by in -200.0f64..200.0,
        zoom in 0.3f64..3.0,
    ) {
        let bounds = Rect::new(bx, by, 800.0 * zoom, 600.0 * zoom);
        let p = to_canvas_space(Point::new(px, py), &bounds, Size::new(800.0, 600.0));
        prop_assert!(p.x >= 0.0 && p.y >= 0.0);
    }

    #[test]
    fn drag_sequences_keep_positions_non_negative(
        moves in prop::collection::vec((-400.0f64..1200.0, -400.0f64..1200.0), 1..20),
    ) {
        let el = PlacedElement::new(
            ElementKind::Text,
            "Field",
            Point::new(100.0, 100.0),
            Size::new(200.0, 40.0),
        );
        let id = el.id;
        let mut session = CanvasSession::with_elements(Config::form_canvas(), vec![el]).unwrap();
        session.set_layout_size(Size::new(800.0, 600.0));

        session.pointer_down(Point::new(150.0, 110.0), Modifiers::NONE);
        for (mx, my) in moves {
            session.pointer_move(Point::new(mx, my));
            let el = session.element(id).unwrap();
            prop_assert!(el.is_normalized());
        }
        session.pointer_up(Point::new(0.0, 0.0));
        prop_assert!(session.element(id).unwrap().is_normalized());
    }
}
