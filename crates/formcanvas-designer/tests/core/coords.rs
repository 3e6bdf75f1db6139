use formcanvas_core::{Point, Rect, Size};
use formcanvas_designer::{to_canvas_space, CanvasSession};
use formcanvas_settings::Config;

const CONTAINER: Point = Point { x: 40.0, y: 25.0 };

fn assert_close(a: Point, b: Point, context: &str) {
    assert!(
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
        "{}: {} != {}",
        context,
        a,
        b
    );
}

#[test]
fn test_round_trip_for_zoom_and_pan_grid() {
    let known = [
        Point::new(0.0, 0.0),
        Point::new(120.0, 75.5),
        Point::new(799.0, 599.0),
    ];

    for zoom in [0.5, 1.0, 2.0] {
        for pan in [Point::new(0.0, 0.0), Point::new(50.0, -30.0)] {
            let mut session = CanvasSession::new(Config::workflow_canvas());
            session.set_container(CONTAINER, 1024.0);
            session.set_layout_size(Size::new(800.0, 600.0));
            session.set_zoom(zoom);
            session.set_pan(pan);
            assert_eq!(session.view().zoom(), zoom);

            for p in known {
                let context = format!("zoom {} pan {}", zoom, pan);
                // Where the renderer draws p: container + pan + p * zoom
                let screen = CONTAINER + pan + p.scale(zoom);
                assert_close(session.to_viewport(p), screen, &context);
                assert_close(session.to_canvas(screen), p, &context);

                let bounds = Rect::new(
                    CONTAINER.x + pan.x,
                    CONTAINER.y + pan.y,
                    800.0 * zoom,
                    600.0 * zoom,
                );
                assert_close(
                    to_canvas_space(screen, &bounds, Size::new(800.0, 600.0)),
                    p,
                    &context,
                );
            }
        }
    }
}

#[test]
fn test_pointer_left_of_layer_clamps_to_origin() {
    let mut session = CanvasSession::new(Config::form_canvas());
    session.set_container(CONTAINER, 800.0);
    session.set_layout_size(Size::new(800.0, 600.0));
    assert_eq!(session.to_canvas(Point::new(0.0, 0.0)), Point::ORIGIN);
}

#[test]
fn test_unmounted_layer_uses_relative_offset() {
    let mut session = CanvasSession::new(Config::form_canvas());
    session.set_container(CONTAINER, 800.0);
    session.set_layout_size(Size::default());
    assert_eq!(
        session.to_canvas(Point::new(140.0, 125.0)),
        Point::new(100.0, 100.0)
    );
}
