//! Placement math for the handle overlay drawn around the selected tile.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use canvas::consts::HANDLE_RADIUS_PX;
use canvas::geom::Rect;
use canvas::hit::ResizeAnchor;

/// Square box for one handle, centered on its anchor point.
pub fn handle_box(anchor: ResizeAnchor, rect: &Rect, zoom: f64) -> Rect {
    let side = HANDLE_RADIUS_PX * zoom;
    let center = anchor.handle_point(rect);
    Rect::new(center.x - side * 0.5, center.y - side * 0.5, side, side)
}

/// Box for the transform-origin marker at the tile center.
pub fn origin_box(rect: &Rect, zoom: f64) -> Rect {
    let side = HANDLE_RADIUS_PX * zoom;
    Rect::new(
        rect.left + (rect.width - side) * 0.5,
        rect.top + (rect.height - side) * 0.5,
        side,
        side,
    )
}
