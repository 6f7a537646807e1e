#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HANDLE_RADIUS_PX;
use crate::geom::{Padding, Point, Rect};

/// Which part of the manipulation target was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Every handle, in render order.
    pub const ALL: [Self; 8] = [Self::Nw, Self::N, Self::Ne, Self::W, Self::E, Self::Sw, Self::S, Self::Se];

    /// Short direction name (`"nw"`, `"s"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// Horizontal direction of the handle: `-1` west, `0` none, `1` east.
    #[must_use]
    pub fn x_sign(self) -> f64 {
        match self {
            Self::Ne | Self::E | Self::Se => 1.0,
            Self::Nw | Self::W | Self::Sw => -1.0,
            Self::N | Self::S => 0.0,
        }
    }

    /// Vertical direction of the handle: `-1` north, `0` none, `1` south.
    #[must_use]
    pub fn y_sign(self) -> f64 {
        match self {
            Self::Se | Self::S | Self::Sw => 1.0,
            Self::Ne | Self::N | Self::Nw => -1.0,
            Self::E | Self::W => 0.0,
        }
    }

    /// Whether this handle sits on a side rather than a corner.
    #[must_use]
    pub fn is_side(self) -> bool {
        matches!(self, Self::N | Self::E | Self::S | Self::W)
    }

    /// Position of this handle on `rect`.
    #[must_use]
    pub fn handle_point(self, rect: &Rect) -> Point {
        let cx = rect.left + rect.width * 0.5;
        let cy = rect.top + rect.height * 0.5;
        Point::new(
            cx + self.x_sign() * rect.width * 0.5,
            cy + self.y_sign() * rect.height * 0.5,
        )
    }

    /// CSS cursor shown while hovering or dragging this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}

/// Target-independent settings that shape a hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitQuery<'a> {
    /// Handles that are rendered and may be grabbed.
    pub directions: &'a [ResizeAnchor],
    /// Extra hit area around the body.
    pub padding: Padding,
    /// Scale applied to handle hit radius.
    pub zoom: f64,
    /// Treat whole sides as resize lines instead of only their midpoints.
    pub edge: bool,
}

/// Test which part of `rect` (if any) is under `pt`, handles first.
#[must_use]
pub fn hit_test(pt: Point, rect: &Rect, query: &HitQuery<'_>) -> Option<HitPart> {
    let radius = HANDLE_RADIUS_PX * query.zoom;

    for anchor in query.directions {
        let hp = anchor.handle_point(rect);
        if (pt.x - hp.x).hypot(pt.y - hp.y) <= radius {
            return Some(HitPart::ResizeHandle(*anchor));
        }
    }

    if query.edge {
        for anchor in query.directions.iter().filter(|a| a.is_side()) {
            if near_side(pt, rect, *anchor, radius) {
                return Some(HitPart::ResizeHandle(*anchor));
            }
        }
    }

    if rect.inflate(query.padding).contains(pt) {
        return Some(HitPart::Body);
    }
    None
}

fn near_side(pt: Point, rect: &Rect, anchor: ResizeAnchor, radius: f64) -> bool {
    let within_x = pt.x >= rect.left - radius && pt.x <= rect.right() + radius;
    let within_y = pt.y >= rect.top - radius && pt.y <= rect.bottom() + radius;
    match anchor {
        ResizeAnchor::N => within_x && (pt.y - rect.top).abs() <= radius,
        ResizeAnchor::S => within_x && (pt.y - rect.bottom()).abs() <= radius,
        ResizeAnchor::W => within_y && (pt.x - rect.left).abs() <= radius,
        ResizeAnchor::E => within_y && (pt.x - rect.right()).abs() <= radius,
        _ => false,
    }
}
