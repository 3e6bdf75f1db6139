use formcanvas_core::{ElementKindTag, Point, Size};
use formcanvas_designer::{CanvasSession, ElementKind, KeyCommand, Modifiers, PaletteItem, PlacedElement};
use formcanvas_settings::Config;

fn four_elements() -> Vec<PlacedElement> {
    (0..4)
        .map(|i| {
            PlacedElement::new(
                ElementKind::Text,
                format!("Field {}", i),
                Point::new(20.0, 20.0 + 60.0 * i as f64),
                Size::new(200.0, 40.0),
            )
        })
        .collect()
}

#[test]
fn test_select_all_then_delete_empties_canvas() {
    let mut session = CanvasSession::with_elements(Config::form_canvas(), four_elements()).unwrap();

    assert!(session.handle_key(KeyCommand::SelectAll));
    assert_eq!(session.selection().secondary().len(), 4);

    assert!(session.handle_key(KeyCommand::Delete));
    assert!(session.elements().is_empty());
    assert_eq!(session.selection().primary(), None);
    assert!(session.selection().secondary().is_empty());

    let messages: Vec<String> = session
        .take_notifications()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(messages, vec!["Selected all 4 elements", "Deleted 4 elements"]);
}

#[test]
fn test_drag_and_resize_keep_invariants() {
    let mut session = CanvasSession::new(Config::form_canvas());
    session.set_layout_size(Size::new(800.0, 600.0));
    let item = PaletteItem::new(ElementKindTag::MultilineText, "Comments");
    let id = session.drop_from_palette(&item, Point::new(200.0, 100.0));

    // Drag far past the top-left corner
    session.pointer_down(Point::new(150.0, 90.0), Modifiers::NONE);
    session.pointer_move(Point::new(-300.0, -300.0));
    session.pointer_up(Point::new(-300.0, -300.0));
    let el = session.element(id).unwrap();
    assert_eq!(el.position, Point::ORIGIN);

    // Shrink from the south-east corner well below the minimum
    let corner = Point::new(el.bounds().max_x(), el.bounds().max_y());
    session.pointer_down(corner, Modifiers::NONE);
    session.pointer_move(Point::new(-50.0, -50.0));
    session.pointer_up(Point::new(-50.0, -50.0));
    let el = session.element(id).unwrap();
    assert!(el.is_normalized());
    assert_eq!(el.size, Size::new(100.0, 40.0));
}

#[test]
fn test_escape_notifies_only_when_selection_existed() {
    let elements = four_elements();
    let first = elements[0].id;
    let mut session = CanvasSession::with_elements(Config::form_canvas(), elements).unwrap();

    assert!(!session.handle_key(KeyCommand::Escape));
    assert!(session.take_notifications().is_empty());

    session.click_element(first, Modifiers::NONE);
    assert!(session.take_notifications().is_empty());
    assert!(session.handle_key(KeyCommand::Escape));
    assert_eq!(session.take_notifications()[0].message, "Selection cleared");
}

#[test]
fn test_disabled_notifications_stay_silent() {
    let mut config = Config::form_canvas();
    config.notifications.enabled = false;
    let mut session = CanvasSession::with_elements(config, four_elements()).unwrap();
    session.handle_key(KeyCommand::SelectAll);
    session.handle_key(KeyCommand::Copy);
    session.handle_key(KeyCommand::Paste);
    assert_eq!(session.elements().len(), 8);
    assert!(session.take_notifications().is_empty());
}

#[test]
fn test_properties_panel_follows_primary() {
    let elements = four_elements();
    let (a, c) = (elements[0].id, elements[2].id);
    let mut session = CanvasSession::with_elements(Config::form_canvas(), elements).unwrap();

    session.click_element(a, Modifiers::NONE);
    session.click_element(c, Modifiers::SHIFT);
    assert_eq!(session.primary_element().map(|e| e.id), Some(a));
    assert_eq!(session.selected_elements().len(), 3);

    session.click_element(a, Modifiers::CTRL);
    assert!(session.primary_element().is_none());
    assert_eq!(session.selected_elements().len(), 2);
}
