//! Region queries over the element collection.
//!
//! Canvases hold tens of elements, so every query is a linear scan in
//! collection order rather than a tree lookup. Results preserve that order,
//! which selection relies on ("first match" becomes the primary).

use formcanvas_core::{Point, Rect};

use crate::model::PlacedElement;

/// Elements whose entire bounding rectangle lies inside `region`.
pub fn contained_in<'a>(
    elements: &'a [PlacedElement],
    region: &'a Rect,
) -> impl Iterator<Item = &'a PlacedElement> + 'a {
    elements
        .iter()
        .filter(move |el| region.contains_rect(&el.bounds()))
}

/// The element drawn on top at `point`: later elements render above earlier
/// ones, so the scan runs from the end.
pub fn topmost_at(elements: &[PlacedElement], point: Point) -> Option<&PlacedElement> {
    elements
        .iter()
        .rev()
        .find(|el| el.bounds().contains_point(point))
}

/// True when any of `positions` lies within `threshold` of `at` on both axes.
pub fn is_occupied<I>(positions: I, at: Point, threshold: f64) -> bool
where
    I: IntoIterator<Item = Point>,
{
    positions
        .into_iter()
        .any(|p| (p.x - at.x).abs() < threshold && (p.y - at.y).abs() < threshold)
}

/// Smallest rectangle enclosing every given element, or `None` when empty.
pub fn union_bounds<'a, I>(elements: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a PlacedElement>,
{
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut any = false;

    for el in elements {
        let b = el.bounds();
        min_x = min_x.min(b.min_x());
        min_y = min_y.min(b.min_y());
        max_x = max_x.max(b.max_x());
        max_y = max_y.max(b.max_y());
        any = true;
    }

    any.then(|| Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;
    use formcanvas_core::Size;

    fn element(x: f64, y: f64, w: f64, h: f64) -> PlacedElement {
        PlacedElement::new(ElementKind::Text, "", Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_contained_requires_full_containment() {
        let elements = vec![element(0.0, 0.0, 100.0, 40.0), element(80.0, 0.0, 100.0, 40.0)];
        let region = Rect::new(0.0, 0.0, 120.0, 60.0);
        let hits: Vec<_> = contained_in(&elements, &region).map(|e| e.id).collect();
        assert_eq!(hits, vec![elements[0].id]);
    }

    #[test]
    fn test_topmost_prefers_later_elements() {
        let elements = vec![element(0.0, 0.0, 200.0, 100.0), element(50.0, 50.0, 200.0, 100.0)];
        let hit = topmost_at(&elements, Point::new(60.0, 60.0)).unwrap();
        assert_eq!(hit.id, elements[1].id);
        let hit = topmost_at(&elements, Point::new(10.0, 10.0)).unwrap();
        assert_eq!(hit.id, elements[0].id);
        assert!(topmost_at(&elements, Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_is_occupied_uses_strict_proximity() {
        let spots = [Point::new(30.0, 30.0)];
        assert!(is_occupied(spots, Point::new(35.0, 39.9), 10.0));
        assert!(!is_occupied(spots, Point::new(40.0, 30.0), 10.0));
    }

    #[test]
    fn test_union_bounds() {
        let elements = vec![element(10.0, 20.0, 100.0, 40.0), element(200.0, 0.0, 100.0, 50.0)];
        assert_eq!(
            union_bounds(&elements),
            Some(Rect::new(10.0, 0.0, 290.0, 60.0))
        );
        assert_eq!(union_bounds(std::iter::empty::<&PlacedElement>()), None);
    }
}
