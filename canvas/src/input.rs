//! Input model: pointer buttons and the gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up. Each active variant carries the target's geometry at gesture
//! start so every intermediate frame is computed from the same origin rather
//! than accumulated deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, Rect};
use crate::hit::ResizeAnchor;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button, pen contact, or single-finger touch.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `PointerEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Which kind of gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The target is being moved.
    Dragging {
        /// Container-space pointer position at pointer-down.
        start: Point,
        /// Target box at pointer-down.
        orig: Rect,
    },
    /// The target is being resized by one of its handles.
    Resizing {
        /// Which handle is held.
        anchor: ResizeAnchor,
        /// Container-space pointer position at pointer-down.
        start: Point,
        /// Target box at pointer-down.
        orig: Rect,
    },
}

impl InputState {
    /// The gesture kind, or `None` when idle.
    #[must_use]
    pub fn gesture(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Dragging { .. } => Some(GestureKind::Drag),
            Self::Resizing { .. } => Some(GestureKind::Resize),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
