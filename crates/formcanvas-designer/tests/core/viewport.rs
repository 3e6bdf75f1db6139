use formcanvas_core::Point;
use formcanvas_designer::ViewTransform;
use formcanvas_settings::{Config, ZoomMinPolicy};

#[test]
fn test_zoom_never_exceeds_configured_max() {
    let mut config = Config::workflow_canvas();
    config.zoom.max = 2.5;
    let mut view = ViewTransform::new(&config.zoom);
    for _ in 0..50 {
        view.zoom_in();
        assert!(view.zoom() <= 2.5);
    }
    assert_eq!(view.zoom(), 2.5);
}

#[test]
fn test_zoom_never_below_fixed_min() {
    let mut view = ViewTransform::new(&Config::workflow_canvas().zoom);
    for _ in 0..50 {
        view.zoom_out();
        assert!(view.zoom() >= 0.3);
    }
    assert_eq!(view.zoom(), 0.3);
}

#[test]
fn test_zoom_never_below_image_derived_min() {
    let mut view = ViewTransform::new(&Config::form_canvas().zoom);
    view.set_container_width(900.0);
    view.set_background_width(2400.0);
    let min = 900.0 / 2400.0;
    assert_eq!(view.zoom_min(), min);

    for _ in 0..10 {
        view.zoom_in();
    }
    for _ in 0..50 {
        view.zoom_out();
        assert!(view.zoom() >= min);
    }
    assert_eq!(view.zoom(), min);
    assert!(!view.can_zoom_out());
}

#[test]
fn test_fit_container_floor_before_image_loads() {
    let mut config = Config::form_canvas();
    config.zoom.min = ZoomMinPolicy::FitContainer { floor: 0.5 };
    let mut view = ViewTransform::new(&config.zoom);
    view.set_container_width(1000.0);
    assert_eq!(view.zoom_min(), 0.5);
}

#[test]
fn test_pan_is_unclamped() {
    let mut view = ViewTransform::default();
    view.pan_by(-5000.0, 12000.0);
    assert_eq!(view.pan(), Point::new(-5000.0, 12000.0));
    assert_eq!(view.layer_to_screen(Point::ORIGIN), Point::new(-5000.0, 12000.0));
}
