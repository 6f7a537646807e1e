//! Shared constants for the canvas crate.

use crate::doc::TileColor;

// ── Tiles ───────────────────────────────────────────────────────

/// Width and height of a freshly added tile.
pub const DEFAULT_TILE_SIZE: f64 = 100.0;

/// Colors a new tile may be given, in palette order.
pub const PALETTE: [TileColor; 5] =
    [TileColor::Red, TileColor::Blue, TileColor::Yellow, TileColor::Green, TileColor::Purple];

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles and edge lines.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

// ── Engine ──────────────────────────────────────────────────────

/// Finest resize step the engine will report, in pixels.
pub const MIN_RESIZE_THROTTLE: f64 = 1.0;
