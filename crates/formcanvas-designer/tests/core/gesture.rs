use formcanvas_core::{Point, Rect, Size};
use formcanvas_designer::gesture::{apply_resize, GestureController, PointerSample, ResizeHandle};

#[test]
fn test_corner_resize_preserves_opposite_corner() {
    let start = Point::new(100.0, 100.0);
    let size = Size::new(300.0, 200.0);
    let (dx, dy) = (30.0, -20.0);

    let cases = [
        (ResizeHandle::NW, Point::new(130.0, 80.0), Size::new(270.0, 220.0)),
        (ResizeHandle::NE, Point::new(100.0, 80.0), Size::new(330.0, 220.0)),
        (ResizeHandle::SW, Point::new(130.0, 100.0), Size::new(270.0, 180.0)),
        (ResizeHandle::SE, Point::new(100.0, 100.0), Size::new(330.0, 180.0)),
    ];

    for (handle, expected_pos, expected_size) in cases {
        let (pos, new_size) = apply_resize(handle, start, size, dx, dy);
        assert_eq!(pos, expected_pos, "{}", handle);
        assert_eq!(new_size, expected_size, "{}", handle);

        let before = Rect::from_origin_size(start, size);
        let after = Rect::from_origin_size(pos, new_size);
        // The corner diagonally opposite the handle stays put
        if handle.moves_left() {
            assert_eq!(after.max_x(), before.max_x());
        } else {
            assert_eq!(after.min_x(), before.min_x());
        }
        if handle.moves_top() {
            assert_eq!(after.max_y(), before.max_y());
        } else {
            assert_eq!(after.min_y(), before.min_y());
        }
    }
}

#[test]
fn test_nw_moves_position_by_delta() {
    let (pos, size) = apply_resize(
        ResizeHandle::NW,
        Point::new(200.0, 150.0),
        Size::new(250.0, 120.0),
        -15.0,
        25.0,
    );
    assert_eq!(pos, Point::new(185.0, 175.0));
    assert_eq!(pos + Point::new(size.width, size.height), Point::new(450.0, 270.0));
}

#[test]
fn test_edge_handles_change_one_axis() {
    let start = Point::new(50.0, 50.0);
    let size = Size::new(200.0, 100.0);

    let (pos, s) = apply_resize(ResizeHandle::E, start, size, 40.0, 999.0);
    assert_eq!((pos, s), (start, Size::new(240.0, 100.0)));

    let (pos, s) = apply_resize(ResizeHandle::S, start, size, 999.0, 40.0);
    assert_eq!((pos, s), (start, Size::new(200.0, 140.0)));

    let (pos, s) = apply_resize(ResizeHandle::W, start, size, 40.0, 0.0);
    assert_eq!((pos, s), (Point::new(90.0, 50.0), Size::new(160.0, 100.0)));

    let (pos, s) = apply_resize(ResizeHandle::N, start, size, 0.0, 40.0);
    assert_eq!((pos, s), (Point::new(50.0, 90.0), Size::new(200.0, 60.0)));
}

#[test]
fn test_minimum_clamp_keeps_anchor_fixed() {
    let start = Point::new(100.0, 100.0);
    let size = Size::new(150.0, 60.0);
    let (pos, s) = apply_resize(ResizeHandle::NW, start, size, 400.0, 400.0);
    assert_eq!(s, Size::new(100.0, 40.0));
    assert_eq!(pos, Point::new(150.0, 120.0));
    assert_eq!(pos.x + s.width, 250.0);
    assert_eq!(pos.y + s.height, 160.0);
}

#[test]
fn test_end_always_releases_capture() {
    let mut ctl = GestureController::new();
    let p = PointerSample::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
    assert!(ctl.begin_pan(p));
    assert!(ctl.has_pointer_capture());
    assert!(!ctl.begin_marquee(p));
    ctl.end();
    assert!(!ctl.has_pointer_capture());
    assert!(!ctl.is_active());
    assert!(ctl.update(p).is_none());
    // Ending twice is harmless
    ctl.end();
    assert!(ctl.begin_marquee(p));
}
