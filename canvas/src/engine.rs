//! Interactive manipulation engine: turns pointer input on one target into
//! drag and resize events.
//!
//! The host attaches the engine to the selected tile only, feeds it pointer
//! events in container space, and receives [`Action`]s back. Every pointer
//! move during a gesture produces an event; the host must not assume the
//! gesture has ended until it sees `DragEnd` or `ResizeEnd`.
//!
//! [`MoveableCore`] holds all of the math and is testable without a browser.
//! [`Moveable`] wraps it together with the target element and writes the
//! immediate visual feedback for resize frames.

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::consts::MIN_RESIZE_THROTTLE;
use crate::geom::{Edges, Padding, Point, Rect};
use crate::hit::{HitPart, HitQuery, ResizeAnchor, hit_test};
use crate::input::{Button, GestureKind, InputState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Fixed behavior switches for one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveableConfig {
    /// Apply the supplied bounds: drags stop at the top-left edges, resizes
    /// stay inside all four.
    pub snappable: bool,
    pub draggable: bool,
    pub resizable: bool,
    /// Preserve the target's aspect ratio while resizing.
    pub keep_ratio: bool,
    /// Resize step in pixels; `0` reports raw sizes.
    pub throttle_resize: f64,
    /// Handles that are rendered and can be grabbed.
    pub render_directions: Vec<ResizeAnchor>,
    /// Treat whole sides as resize lines.
    pub edge: bool,
    /// Scale for handle size and hit radius.
    pub zoom: f64,
    /// Show the transform-origin marker.
    pub origin: bool,
    /// Extra grab area around the target body.
    pub padding: Padding,
    /// Accepted for host parity. Warping needs multi-touch, which this engine
    /// does not track.
    pub warpable: bool,
}

impl MoveableConfig {
    /// Settings used for tiles on the editor canvas.
    #[must_use]
    pub fn tile_editor() -> Self {
        Self {
            snappable: true,
            draggable: true,
            resizable: true,
            keep_ratio: false,
            throttle_resize: MIN_RESIZE_THROTTLE,
            render_directions: ResizeAnchor::ALL.to_vec(),
            edge: false,
            zoom: 1.0,
            origin: false,
            padding: Padding::ZERO,
            warpable: true,
        }
    }

    fn hit_query(&self) -> HitQuery<'_> {
        HitQuery {
            directions: if self.resizable { &self.render_directions } else { &[] },
            padding: self.padding,
            zoom: self.zoom,
            edge: self.edge,
        }
    }
}

impl Default for MoveableConfig {
    fn default() -> Self {
        Self::tile_editor()
    }
}

/// One drag frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    /// New left offset of the target.
    pub left: f64,
    /// New top offset of the target.
    pub top: f64,
    /// Offset of the target's origin from where the gesture started, `[x, y]`.
    pub before_translate: [f64; 2],
}

/// One resize frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub width: f64,
    pub height: f64,
    /// Handle being dragged.
    pub direction: ResizeAnchor,
    /// Origin movement implied by the resize (non-zero for north/west handles).
    pub drag: DragEvent,
}

/// Events returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DragStart,
    Drag(DragEvent),
    DragEnd { moved: bool },
    ResizeStart(ResizeAnchor),
    Resize(ResizeEvent),
    ResizeEnd { moved: bool },
    SetCursor(&'static str),
}

/// Core engine state: everything that doesn't touch the DOM.
#[derive(Debug, Clone, Default)]
pub struct MoveableCore {
    pub config: MoveableConfig,
    pub input: InputState,
    target: Option<Rect>,
    bounds: Option<Edges>,
    moved: bool,
    /// Translation currently painted on the target by resize feedback.
    feedback: [f64; 2],
}

impl MoveableCore {
    #[must_use]
    pub fn new(config: MoveableConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Set or clear the target box. Cleared targets ignore all input and
    /// cancel any gesture in flight.
    pub fn set_target(&mut self, rect: Option<Rect>) {
        if rect.is_none() {
            self.input = InputState::Idle;
            self.moved = false;
            self.feedback = [0.0, 0.0];
        }
        self.target = rect;
    }

    #[must_use]
    pub fn target(&self) -> Option<Rect> {
        self.target
    }

    /// Set or clear the confining bounds, in container space.
    pub fn set_bounds(&mut self, bounds: Option<Edges>) {
        self.bounds = bounds;
    }

    /// Offset between the target box and where the element is drawn.
    /// Non-zero only while a resize from an n or w handle is in flight.
    #[must_use]
    pub fn feedback_offset(&self) -> [f64; 2] {
        self.feedback
    }

    /// The gesture in flight, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<GestureKind> {
        self.input.gesture()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(orig) = self.target else {
            return Vec::new();
        };
        self.moved = false;
        match hit_test(pt, &orig, &self.config.hit_query()) {
            Some(HitPart::ResizeHandle(anchor)) if self.config.resizable => {
                self.input = InputState::Resizing { anchor, start: pt, orig };
                vec![Action::ResizeStart(anchor), Action::SetCursor(anchor.cursor())]
            }
            Some(HitPart::Body) if self.config.draggable => {
                self.input = InputState::Dragging { start: pt, orig };
                vec![Action::DragStart, Action::SetCursor("move")]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => vec![Action::SetCursor(self.hover_cursor(pt))],
            InputState::Dragging { start, orig } => {
                self.moved = true;
                vec![Action::Drag(self.drag_frame(start, orig, pt))]
            }
            InputState::Resizing { anchor, start, orig } => {
                self.moved = true;
                let ev = self.resize_frame(anchor, start, orig, pt);
                self.feedback = ev.drag.before_translate;
                vec![Action::Resize(ev)]
            }
        }
    }

    pub fn on_pointer_up(&mut self, _pt: Point) -> Vec<Action> {
        let moved = self.moved;
        let state = std::mem::take(&mut self.input);
        self.moved = false;
        self.feedback = [0.0, 0.0];
        match state {
            InputState::Idle => Vec::new(),
            InputState::Dragging { .. } => vec![Action::DragEnd { moved }, Action::SetCursor("default")],
            InputState::Resizing { .. } => vec![Action::ResizeEnd { moved }, Action::SetCursor("default")],
        }
    }

    // --- Frame math ---

    fn hover_cursor(&self, pt: Point) -> &'static str {
        let Some(rect) = self.target else {
            return "default";
        };
        match hit_test(pt, &rect, &self.config.hit_query()) {
            Some(HitPart::ResizeHandle(anchor)) => anchor.cursor(),
            Some(HitPart::Body) if self.config.draggable => "move",
            _ => "default",
        }
    }

    fn drag_frame(&self, start: Point, orig: Rect, pt: Point) -> DragEvent {
        let mut left = orig.left + (pt.x - start.x);
        let mut top = orig.top + (pt.y - start.y);
        if let Some(b) = self.confining_bounds() {
            left = left.max(b.left);
            top = top.max(b.top);
        }
        DragEvent { left, top, before_translate: [left - orig.left, top - orig.top] }
    }

    fn resize_frame(&self, anchor: ResizeAnchor, start: Point, orig: Rect, pt: Point) -> ResizeEvent {
        let xs = anchor.x_sign();
        let ys = anchor.y_sign();
        let mut width = orig.width + xs * (pt.x - start.x);
        let mut height = orig.height + ys * (pt.y - start.y);

        if self.config.keep_ratio && orig.height.abs() > f64::EPSILON {
            let ratio = orig.width / orig.height;
            if xs == 0.0 {
                width = height * ratio;
            } else {
                height = width / ratio;
            }
        }

        width = throttle(width, self.config.throttle_resize).max(0.0);
        height = throttle(height, self.config.throttle_resize).max(0.0);

        if let Some(b) = self.confining_bounds() {
            if xs > 0.0 {
                width = width.min(b.right - orig.left);
            } else if xs < 0.0 {
                width = width.min(orig.right() - b.left);
            }
            if ys > 0.0 {
                height = height.min(b.bottom - orig.top);
            } else if ys < 0.0 {
                height = height.min(orig.bottom() - b.top);
            }
        }

        let left = if xs < 0.0 { orig.right() - width } else { orig.left };
        let top = if ys < 0.0 { orig.bottom() - height } else { orig.top };
        ResizeEvent {
            width,
            height,
            direction: anchor,
            drag: DragEvent { left, top, before_translate: [left - orig.left, top - orig.top] },
        }
    }

    fn confining_bounds(&self) -> Option<Edges> {
        if self.config.snappable { self.bounds } else { None }
    }
}

fn throttle(value: f64, step: f64) -> f64 {
    if step > 0.0 { (value / step).round() * step } else { value }
}

/// The full engine: wraps `MoveableCore` and owns the target element.
pub struct Moveable {
    target: Option<HtmlElement>,
    pub core: MoveableCore,
}

impl Moveable {
    #[must_use]
    pub fn new(config: MoveableConfig) -> Self {
        Self { target: None, core: MoveableCore::new(config) }
    }

    /// Bind the engine to `element`, whose box is currently `rect`.
    pub fn attach(&mut self, element: HtmlElement, rect: Rect) {
        self.target = Some(element);
        self.core.set_target(Some(rect));
    }

    /// Release the target element and cancel any gesture.
    pub fn detach(&mut self) {
        self.target = None;
        self.core.set_target(None);
    }

    /// Refresh the target box between gestures. Ignored mid-gesture so frame
    /// math keeps its starting geometry.
    pub fn sync_target_rect(&mut self, rect: Rect) {
        if self.target.is_some() && self.core.input.is_idle() {
            self.core.set_target(Some(rect));
        }
    }

    pub fn set_bounds(&mut self, bounds: Option<Edges>) {
        self.core.set_bounds(bounds);
    }

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    /// Advance the gesture and paint resize feedback onto the target.
    ///
    /// # Errors
    ///
    /// Returns `Err` if writing the target's inline style fails.
    pub fn on_pointer_move(&mut self, pt: Point) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_move(pt);
        if let Some(el) = self.target.as_ref() {
            for action in &actions {
                if let Action::Resize(ev) = action {
                    render::apply_resize_feedback(el, ev)?;
                }
            }
        }
        Ok(actions)
    }

    /// End the gesture. A finished resize drops its transform so the
    /// element is drawn at the target box again.
    ///
    /// # Errors
    ///
    /// Returns `Err` if clearing the target's inline transform fails.
    pub fn on_pointer_up(&mut self, pt: Point) -> Result<Vec<Action>, JsValue> {
        let actions = self.core.on_pointer_up(pt);
        if let Some(el) = self.target.as_ref() {
            if actions.iter().any(|a| matches!(a, Action::ResizeEnd { .. })) {
                render::clear_resize_feedback(el)?;
            }
        }
        Ok(actions)
    }
}
