//! Pointer hit testing and geometry for card drags.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use booth::drag::{EXCLUDED_SELECTORS, Region};
#[cfg(feature = "hydrate")]
use booth::geom::{Point, Rect};

/// Classify a hit given a `closest(selector)` probe.
pub fn region_from_probe(hits: impl Fn(&str) -> bool) -> Region {
    EXCLUDED_SELECTORS
        .iter()
        .find(|(selector, _)| hits(selector))
        .map_or(Region::Body, |(_, region)| *region)
}

/// Which part of a card the pointer landed on.
#[cfg(feature = "hydrate")]
pub fn pointer_region(ev: &leptos::ev::PointerEvent) -> Region {
    use wasm_bindgen::JsCast;

    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return Region::Body;
    };
    region_from_probe(|selector| target.closest(selector).ok().flatten().is_some())
}

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Only the primary pointer drives a drag; extra touches are ignored.
#[cfg(feature = "hydrate")]
pub fn is_primary(ev: &leptos::ev::PointerEvent) -> bool {
    ev.is_primary() && (ev.pointer_type() != "mouse" || ev.button() == 0)
}

/// Bounding box of an element in viewport coordinates.
#[cfg(feature = "hydrate")]
pub fn element_rect(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}
