//! Interaction binder: translates engine events into tile store updates.
//!
//! Every callback takes the tile's current record by value-snapshot, so
//! dimensions carried through a drag are always the live ones rather than
//! whatever was current when the tile last rendered.
//!
//! The resize clamp is injected as a [`ResizeClamp`]; the default reproduces
//! the editor's bottom/right-only, unfloored behavior.

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

use crate::bounds::{ContainerBounds, ResizeClamp, clamp_drag_origin, clamp_resize_to_container};
use crate::doc::{TileId, TilePatch, TileRecord, TileStore};
use crate::engine::{DragEvent, ResizeEvent};
use crate::geom::Size;

/// A store write produced by the binder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileUpdate {
    pub id: TileId,
    pub patch: TilePatch,
    pub update_end: bool,
}

impl TileUpdate {
    /// Apply to `store`. Returns `false` if the tile no longer exists.
    pub fn apply(&self, store: &mut TileStore) -> bool {
        store.update(self.id, self.patch, self.update_end)
    }
}

/// Local, non-authoritative position used for resize feedback.
///
/// Tracks the engine's origin translation and the translated origin floored
/// at zero. It never feeds back into the store.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReferenceNode {
    pub top: f64,
    pub left: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ReferenceNode {
    /// Untranslated reference at the record's origin.
    #[must_use]
    pub fn from_record(record: &TileRecord) -> Self {
        Self { top: record.top, left: record.left, translate_x: 0.0, translate_y: 0.0 }
    }
}

/// Maps engine callbacks for one tile onto store updates.
#[derive(Debug, Clone, Copy)]
pub struct TileBinder {
    clamp: ResizeClamp,
}

impl TileBinder {
    /// Binder using [`clamp_resize_to_container`].
    #[must_use]
    pub fn new() -> Self {
        Self { clamp: clamp_resize_to_container }
    }

    /// Binder using a custom resize clamp.
    #[must_use]
    pub fn with_clamp(clamp: ResizeClamp) -> Self {
        Self { clamp }
    }

    /// Move the tile to the frame's origin floored at zero, keeping its live
    /// size and color.
    #[must_use]
    pub fn on_drag(&self, record: &TileRecord, ev: &DragEvent) -> TileUpdate {
        let (top, left) = clamp_drag_origin(ev.top, ev.left);
        TileUpdate {
            id: record.id,
            patch: TilePatch {
                top,
                left,
                width: record.width,
                height: record.height,
                color: record.color,
            },
            update_end: false,
        }
    }

    /// Resize the tile in place, clamped to `container` when it is known.
    ///
    /// The store update keeps the record's origin; the returned reference
    /// node carries the frame's translation for visual feedback.
    #[must_use]
    pub fn on_resize(
        &self,
        record: &TileRecord,
        ev: &ResizeEvent,
        container: Option<&ContainerBounds>,
    ) -> (TileUpdate, ReferenceNode) {
        let proposed = Size::new(ev.width, ev.height);
        let size = match container {
            Some(bounds) => (self.clamp)(record.top, record.left, proposed, bounds.size()),
            None => proposed,
        };
        let update = TileUpdate {
            id: record.id,
            patch: TilePatch {
                top: record.top,
                left: record.left,
                width: size.width,
                height: size.height,
                color: record.color,
            },
            update_end: false,
        };

        let [translate_x, translate_y] = ev.drag.before_translate;
        let (top, left) = clamp_drag_origin(record.top + translate_y, record.left + translate_x);
        (update, ReferenceNode { top, left, translate_x, translate_y })
    }

    /// Re-issue the record as a final write at gesture end.
    #[must_use]
    pub fn on_gesture_end(&self, record: &TileRecord) -> TileUpdate {
        TileUpdate { id: record.id, patch: TilePatch::from_record(record), update_end: true }
    }
}

impl Default for TileBinder {
    fn default() -> Self {
        Self::new()
    }
}
