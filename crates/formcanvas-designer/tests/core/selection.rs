use formcanvas_core::{Point, Size};
use formcanvas_designer::{ElementId, ElementKind, Modifiers, PlacedElement, SelectionBox, SelectionManager};
use std::collections::HashSet;

/// Builds an element without going through the constructor's size clamp.
fn raw_element(x: f64, y: f64, w: f64, h: f64) -> PlacedElement {
    PlacedElement {
        id: ElementId::new(),
        kind: ElementKind::Text,
        label: String::new(),
        placeholder: None,
        required: false,
        validation: None,
        position: Point::new(x, y),
        size: Size::new(w, h),
    }
}

#[test]
fn test_marquee_requires_full_containment() {
    let elements = vec![
        raw_element(0.0, 0.0, 50.0, 50.0),
        raw_element(100.0, 100.0, 50.0, 50.0),
    ];
    let mut sm = SelectionManager::new();
    let mut selection_box = SelectionBox::new(Point::new(0.0, 0.0));
    selection_box.end = Point::new(60.0, 60.0);

    assert_eq!(sm.select_in_box(&elements, &selection_box), 1);
    assert_eq!(sm.primary(), Some(elements[0].id));
    assert!(!sm.is_selected(elements[1].id));
}

#[test]
fn test_marquee_partial_overlap_excluded() {
    let elements = vec![raw_element(40.0, 40.0, 50.0, 50.0)];
    let mut sm = SelectionManager::new();
    let mut selection_box = SelectionBox::new(Point::new(0.0, 0.0));
    selection_box.end = Point::new(60.0, 60.0);
    assert_eq!(sm.select_in_box(&elements, &selection_box), 0);
    assert_eq!(sm.primary(), None);
}

#[test]
fn test_range_select_uses_list_order() {
    // On-screen order deliberately differs from list order
    let elements = vec![
        raw_element(400.0, 0.0, 100.0, 40.0),
        raw_element(0.0, 300.0, 100.0, 40.0),
        raw_element(600.0, 600.0, 100.0, 40.0),
        raw_element(0.0, 0.0, 100.0, 40.0),
        raw_element(200.0, 100.0, 100.0, 40.0),
    ];
    let ids: Vec<ElementId> = elements.iter().map(|e| e.id).collect();
    let (b, c, d) = (ids[1], ids[2], ids[3]);

    let mut sm = SelectionManager::new();
    sm.click(&elements, b, Modifiers::NONE);
    sm.click(&elements, d, Modifiers::SHIFT);

    let expected: HashSet<ElementId> = [b, c, d].into_iter().collect();
    assert_eq!(sm.secondary(), &expected);
    assert_eq!(sm.primary(), Some(b));
}

#[test]
fn test_select_all_sets_first_as_primary() {
    let elements: Vec<PlacedElement> = (0..4)
        .map(|i| raw_element(0.0, i as f64 * 50.0, 100.0, 40.0))
        .collect();
    let mut sm = SelectionManager::new();
    assert_eq!(sm.select_all(&elements), 4);
    assert_eq!(sm.secondary().len(), 4);
    assert_eq!(sm.primary(), Some(elements[0].id));
}
