//! Editor state: the tile store, the single selection, the photo listing,
//! and the last resize feedback node.
//!
//! DESIGN
//! ======
//! Every mutation goes through `RwSignal<EditorState>::update`, so each add,
//! remove, or gesture frame re-renders the tile list. The manipulation
//! engine itself is not stored here; it lives in the `TileCanvas` component
//! because it holds a DOM element.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use canvas::binder::{ReferenceNode, TileUpdate};
use canvas::doc::{ImageRef, TileColor, TileId, TileRecord, TileStore};
use canvas::geom::Rect;
use canvas::selection::Selection;

use super::images::ImageListing;

#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub tiles: TileStore,
    pub selection: Selection,
    pub images: ImageListing,
    /// Reference node from the most recent resize frame.
    pub feedback: Option<(TileId, ReferenceNode)>,
}

impl EditorState {
    /// Append a default tile, taking the listing entry at its position.
    pub fn add_tile(&mut self, color: TileColor) -> TileId {
        self.tiles.add(color, self.images.entries())
    }

    pub fn remove_last_tile(&mut self) -> Option<TileRecord> {
        let removed = self.tiles.remove_last()?;
        if self.feedback.is_some_and(|(id, _)| id == removed.id) {
            self.feedback = None;
        }
        Some(removed)
    }

    pub fn select(&mut self, id: TileId) {
        self.selection.select(id);
    }

    /// Snapshot of the selected tile, if it still exists.
    pub fn selected_record(&self) -> Option<TileRecord> {
        self.selection
            .selected()
            .and_then(|id| self.tiles.get(id))
            .cloned()
    }

    pub fn apply(&mut self, update: &TileUpdate) -> bool {
        update.apply(&mut self.tiles)
    }

    pub fn set_feedback(&mut self, id: TileId, node: ReferenceNode) {
        self.feedback = Some((id, node));
    }

    /// Resize finished: the element is drawn at its stored origin again, so
    /// the reference node drops its translation.
    pub fn settle_feedback(&mut self) {
        if let Some((id, _)) = self.feedback {
            self.feedback = self.tiles.get(id).map(|r| (id, ReferenceNode::from_record(r)));
        }
    }

    /// Where tile `id` is drawn: its stored box shifted by any in-flight
    /// resize translation.
    pub fn visible_rect(&self, id: TileId) -> Option<Rect> {
        let rect = self.tiles.get(id)?.rect();
        Some(match self.feedback {
            Some((fid, node)) if fid == id => Rect::new(
                rect.left + node.translate_x,
                rect.top + node.translate_y,
                rect.width,
                rect.height,
            ),
            _ => rect,
        })
    }

    /// Store the resolved listing and backfill tiles added before it arrived.
    pub fn load_images(&mut self, images: Vec<ImageRef>) -> usize {
        self.images = ImageListing::Ready(images);
        self.tiles.attach_images(self.images.entries())
    }

    pub fn fail_images(&mut self, message: String) {
        self.images = ImageListing::Failed(message);
    }
}
