//! Pointer and container geometry read from the DOM.

#[cfg(feature = "hydrate")]
use canvas::bounds::ContainerBounds;
#[cfg(feature = "hydrate")]
use canvas::geom::Point;

/// Pointer position in viewport (client) coordinates.
#[cfg(feature = "hydrate")]
pub fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Live bounds of the container element, queried at call time.
#[cfg(feature = "hydrate")]
pub fn container_bounds(element: &web_sys::Element) -> ContainerBounds {
    let rect = element.get_bounding_client_rect();
    ContainerBounds::new(rect.x(), rect.y(), rect.width(), rect.height())
}
