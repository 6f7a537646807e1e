#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::TileId;

/// Which tile, if any, owns the manipulation handles.
///
/// Selection only ever moves from one tile to another; there is no way back
/// to "nothing selected" once a tile has been picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<TileId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the active tile, replacing any previous one.
    pub fn select(&mut self, id: TileId) {
        self.active = Some(id);
    }

    /// The active tile id.
    #[must_use]
    pub fn selected(&self) -> Option<TileId> {
        self.active
    }

    #[must_use]
    pub fn is_selected(&self, id: TileId) -> bool {
        self.active == Some(id)
    }
}
