//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome and the tile surface while reading
//! and writing the shared `RwSignal<EditorState>` from context.

pub mod handles;
pub mod status_bar;
pub mod tile_canvas;
pub mod tile_view;
pub mod toolbar;
