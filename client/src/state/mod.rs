//! Reactive editor state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<EditorState>`; the toolbar, tile canvas and
//! status bar all read and write it.

pub mod editor;
pub mod images;
