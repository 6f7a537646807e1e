//! Document model: tile records, their patch type, and the in-memory store.
//!
//! This module defines what is on the canvas (`TileRecord`), the whole-record
//! replacement applied by gestures (`TilePatch`), and the ordered store that
//! owns every live tile (`TileStore`).
//!
//! Tiles enter the store through [`TileStore::add`], are replaced by id on
//! every drag/resize frame, and leave only through [`TileStore::remove_last`].
//! Ids come from a counter owned by the store and are never reused.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TILE_SIZE, PALETTE};
use crate::geom::Rect;

/// Unique identifier for a tile within one store.
pub type TileId = u64;

/// Fill color of a tile, drawn from a fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
}

impl TileColor {
    /// CSS color keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }

    /// Map a uniform sample in `[0, 1)` onto the palette.
    ///
    /// Out-of-range samples are pinned to the first or last entry.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn from_sample(sample: f64) -> Self {
        let scaled = (sample * PALETTE.len() as f64).floor();
        let idx = if scaled.is_nan() || scaled < 0.0 {
            0
        } else {
            (scaled as usize).min(PALETTE.len() - 1)
        };
        PALETTE[idx]
    }
}

/// CSS `object-fit` policy applied to a tile's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Fill,
    Cover,
    Contain,
    None,
    ScaleDown,
}

impl ObjectFit {
    /// Policies handed out by insertion position; later positions get none.
    pub const BY_POSITION: [Self; 5] = [Self::Fill, Self::Cover, Self::Contain, Self::None, Self::ScaleDown];

    /// Policy for the tile at `position` in the store, if one is defined.
    #[must_use]
    pub fn for_position(position: usize) -> Option<Self> {
        Self::BY_POSITION.get(position).copied()
    }

    /// CSS value for the `object-fit` property.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::None => "none",
            Self::ScaleDown => "scale-down",
        }
    }
}

/// An image resolved from the photo listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Absolute image URL.
    pub url: String,
    /// Human-readable title, used as alt text.
    pub title: String,
}

/// One placed tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Store-assigned identifier.
    pub id: TileId,
    /// Offset from the container's top edge.
    pub top: f64,
    /// Offset from the container's left edge.
    pub left: f64,
    /// Width in pixels. Not floored; see [`crate::bounds`].
    pub width: f64,
    /// Height in pixels. Not floored; see [`crate::bounds`].
    pub height: f64,
    /// Palette color chosen at creation.
    pub color: TileColor,
    /// Opaque flag: `true` for records written at creation or gesture end,
    /// `false` for live gesture frames.
    pub update_end: bool,
    /// Image assigned at creation (or backfilled once the listing arrives).
    pub image: Option<ImageRef>,
    /// Fit policy assigned from the tile's insertion position.
    pub fit: Option<ObjectFit>,
}

impl TileRecord {
    /// The tile's box in container space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// Replacement values for a tile's mutable fields.
///
/// Applied as a whole-record overwrite: every field here replaces the stored
/// one, nothing is merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePatch {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub color: TileColor,
}

impl TilePatch {
    /// Snapshot of a record's mutable fields.
    #[must_use]
    pub fn from_record(record: &TileRecord) -> Self {
        Self {
            top: record.top,
            left: record.left,
            width: record.width,
            height: record.height,
            color: record.color,
        }
    }
}

/// Ordered, in-memory store of tiles.
#[derive(Debug, Clone)]
pub struct TileStore {
    tiles: Vec<TileRecord>,
    next_id: TileId,
}

impl TileStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { tiles: Vec::new(), next_id: 1 }
    }

    /// Append a default-sized tile at the container origin.
    ///
    /// The image is the `listing` entry at the new tile's position, if the
    /// listing is long enough. Returns the new tile's id.
    pub fn add(&mut self, color: TileColor, listing: &[ImageRef]) -> TileId {
        let id = self.next_id;
        self.next_id += 1;
        let position = self.tiles.len();
        self.tiles.push(TileRecord {
            id,
            top: 0.0,
            left: 0.0,
            width: DEFAULT_TILE_SIZE,
            height: DEFAULT_TILE_SIZE,
            color,
            update_end: true,
            image: listing.get(position).cloned(),
            fit: ObjectFit::for_position(position),
        });
        id
    }

    /// Remove the tail tile. Does nothing on an empty store.
    pub fn remove_last(&mut self) -> Option<TileRecord> {
        self.tiles.pop()
    }

    /// Overwrite the tile matching `id` with `patch` and `update_end`.
    ///
    /// The image and fit assigned at creation are kept. Returns `false`, and
    /// leaves the store untouched, when no tile matches.
    pub fn update(&mut self, id: TileId, patch: TilePatch, update_end: bool) -> bool {
        let Some(slot) = self.tiles.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        *slot = TileRecord {
            id,
            top: patch.top,
            left: patch.left,
            width: patch.width,
            height: patch.height,
            color: patch.color,
            update_end,
            image: slot.image.take(),
            fit: slot.fit,
        };
        true
    }

    /// Give every tile without an image the listing entry at its position.
    ///
    /// Returns how many tiles received an image.
    pub fn attach_images(&mut self, listing: &[ImageRef]) -> usize {
        let mut attached = 0;
        for (position, tile) in self.tiles.iter_mut().enumerate() {
            if tile.image.is_some() {
                continue;
            }
            if let Some(image) = listing.get(position) {
                tile.image = Some(image.clone());
                attached += 1;
            }
        }
        attached
    }

    /// Return a tile by id.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&TileRecord> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// All tiles in insertion order.
    #[must_use]
    pub fn tiles(&self) -> &[TileRecord] {
        &self.tiles
    }

    /// The tail tile, if any.
    #[must_use]
    pub fn last(&self) -> Option<&TileRecord> {
        self.tiles.last()
    }

    /// Number of tiles currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the store holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl Default for TileStore {
    fn default() -> Self {
        Self::new()
    }
}
