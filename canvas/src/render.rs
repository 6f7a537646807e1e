//! Immediate visual feedback written straight onto the target element.
//!
//! This module is the only place that touches [`web_sys::HtmlElement`]
//! styles. During a resize the engine paints the raw frame size and the
//! origin translation here, ahead of the host re-rendering from the store.
//! The transform is removed when the gesture ends, since the store keeps
//! the tile's origin.
//!
//! All fallible style writes propagate errors via `Result<(), JsValue>`.

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use crate::engine::ResizeEvent;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Write a resize frame's size and translation onto `el`.
///
/// # Errors
///
/// Returns `Err` if the browser rejects a style property.
pub fn apply_resize_feedback(el: &HtmlElement, ev: &ResizeEvent) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("width", &px(ev.width))?;
    style.set_property("height", &px(ev.height))?;
    style.set_property("transform", &translate(ev.drag.before_translate))?;
    Ok(())
}

/// Remove the translation written by [`apply_resize_feedback`].
///
/// # Errors
///
/// Returns `Err` if the browser rejects the style removal.
pub fn clear_resize_feedback(el: &HtmlElement) -> Result<(), JsValue> {
    el.style().remove_property("transform")?;
    Ok(())
}

/// Format a pixel length for CSS.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Format a CSS `translate()` from `[x, y]` pixel offsets.
#[must_use]
pub fn translate(offset: [f64; 2]) -> String {
    format!("translate({}px, {}px)", offset[0], offset[1])
}
