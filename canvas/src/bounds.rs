//! Container bounds and the clamps applied to tile geometry.
//!
//! The resize clamp is deliberately asymmetric: it only pulls back growth that
//! would cross the container's bottom or right edge, never touches `top` or
//! `left`, and does not floor the result. A large negative origin can
//! therefore yield a negative size. Callers receive the clamp as a
//! [`ResizeClamp`] so another policy can be dropped in without changing them.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use crate::geom::{Edges, Point, Size};

/// Clamp policy applied to a proposed resize.
///
/// Arguments are the tile's current `top`, `left`, the proposed size and the
/// container size.
pub type ResizeClamp = fn(f64, f64, Size, Size) -> Size;

/// Live layout of the tile container, as reported by the browser.
///
/// `x`/`y` are the container's viewport origin. Width and height may be
/// negative for a flipped rect, in which case the edges are normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x.min(self.x + self.width)
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y.min(self.y + self.height)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x.max(self.x + self.width)
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y.max(self.y + self.height)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Bounds for the manipulation engine, relative to the container's own
    /// origin.
    #[must_use]
    pub fn edges(&self) -> Edges {
        Edges {
            left: self.left() - self.x,
            top: self.top() - self.y,
            right: self.right() - self.x,
            bottom: self.bottom() - self.y,
        }
    }

    /// Convert a viewport (client) point to container space.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.x, client.y - self.y)
    }
}

/// Pull back a proposed size that would overflow the container's bottom or
/// right edge.
///
/// Only the overflowing dimension changes. `top`/`left` are read, never
/// adjusted, and no minimum size is applied.
#[must_use]
pub fn clamp_resize_to_container(top: f64, left: f64, proposed: Size, container: Size) -> Size {
    let mut out = proposed;
    if top + proposed.height > container.height {
        out.height = container.height - top;
    }
    if left + proposed.width > container.width {
        out.width = container.width - left;
    }
    out
}

/// Floor a translated origin at zero on both axes. No upper bound.
///
/// Returns `(top, left)`.
#[must_use]
pub fn clamp_drag_origin(top: f64, left: f64) -> (f64, f64) {
    (top.max(0.0), left.max(0.0))
}
