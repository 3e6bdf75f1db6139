use formcanvas_core::{Point, Size};
use formcanvas_designer::{place_pasted, ElementKind, PasteBounds, PlacedElement};
use std::collections::HashSet;

fn element(x: f64, y: f64) -> PlacedElement {
    PlacedElement::new(ElementKind::Text, "Field", Point::new(x, y), Size::new(100.0, 40.0))
}

#[test]
fn test_paste_staggers_diagonally() {
    let copied = vec![element(10.0, 10.0), element(10.0, 10.0), element(10.0, 10.0)];
    let existing = copied.clone();

    let pasted = place_pasted(&copied, &existing, PasteBounds::default());
    let positions: Vec<Point> = pasted.iter().map(|e| e.position).collect();
    assert_eq!(
        positions,
        vec![Point::new(30.0, 30.0), Point::new(40.0, 40.0), Point::new(50.0, 50.0)]
    );

    for pair in positions.windows(2) {
        assert!(pair[1].x > pair[0].x && pair[1].y > pair[0].y);
    }

    let old_ids: HashSet<_> = existing.iter().map(|e| e.id).collect();
    let new_ids: HashSet<_> = pasted.iter().map(|e| e.id).collect();
    assert_eq!(new_ids.len(), 3);
    assert!(old_ids.is_disjoint(&new_ids));
}

#[test]
fn test_paste_respects_custom_bounds() {
    let copied = vec![element(350.0, 250.0)];
    let bounds = PasteBounds {
        max_x: 400.0,
        max_y: 300.0,
    };
    let pasted = place_pasted(&copied, &[], bounds);
    assert_eq!(pasted[0].position, Point::new(300.0, 260.0));
    assert!(pasted[0].bounds().max_x() <= 400.0);
    assert!(pasted[0].bounds().max_y() <= 300.0);
}

#[test]
fn test_repeated_paste_does_not_stack() {
    let source = element(100.0, 100.0);
    let mut all = vec![source.clone()];
    for _ in 0..3 {
        let pasted = place_pasted(&[source.clone()], &all, PasteBounds::default());
        all.extend(pasted);
    }
    let positions: Vec<Point> = all.iter().map(|e| e.position).collect();
    assert_eq!(
        positions,
        vec![
            Point::new(100.0, 100.0),
            Point::new(120.0, 120.0),
            Point::new(140.0, 140.0),
            Point::new(160.0, 160.0),
        ]
    );
}
