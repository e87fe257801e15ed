use super::*;

#[test]
fn delta_from_is_component_wise() {
    let a = Point::new(30.0, 10.0);
    let b = Point::new(5.0, 25.0);
    assert_eq!(a.delta_from(b), Point::new(25.0, -15.0));
}

#[test]
fn offset_undoes_delta() {
    let start = Point::new(12.5, -4.0);
    let end = Point::new(100.0, 60.0);
    assert_eq!(start.offset(end.delta_from(start)), end);
}

#[test]
fn rect_origin_is_top_left() {
    let r = Rect::new(40.0, 80.0, 200.0, 240.0);
    assert_eq!(r.origin(), Point::new(40.0, 80.0));
}
