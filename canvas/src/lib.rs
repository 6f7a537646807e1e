//! Tile store, bounds clamp, and manipulation engine for the tile editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editor's state model and the drag/resize gesture math: the host UI layer
//! wires DOM pointer events into [`engine::Moveable`], passes the resulting
//! [`engine::Action`]s through [`binder::TileBinder`], and applies the
//! resulting updates to a [`doc::TileStore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Tile records and the ordered in-memory store |
//! | [`selection`] | Single active tile |
//! | [`bounds`] | Container bounds and the resize/drag clamps |
//! | [`engine`] | Drag/resize engine and testable [`engine::MoveableCore`] |
//! | [`binder`] | Engine events to store updates |
//! | [`input`] | Pointer buttons and the gesture state machine |
//! | [`hit`] | Resize handles and hit-testing |
//! | [`render`] | Inline style feedback on the target element |
//! | [`geom`] | Points, sizes, and rectangles |
//! | [`consts`] | Shared numeric constants (default size, handle radius, palette) |

pub mod binder;
pub mod bounds;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod selection;
