//! Bottom status bar showing the selected tile and listing status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Surfaces the live geometry of the selected tile and the resize reference
//! node so the effect of each gesture frame is visible as text.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use canvas::binder::ReferenceNode;
use canvas::doc::{TileId, TileRecord};

use crate::state::editor::EditorState;

/// Status bar at the bottom of the editor page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let selected = move || editor.with(EditorState::selected_record);
    let reference = move || {
        editor.with(|s| {
            s.feedback
                .filter(|(id, _)| s.selection.is_selected(*id))
                .map(|(_, node)| node)
        })
    };
    let listing = move || editor.with(|s| s.images.status_label());

    view! {
        <div class="status-bar">
            <div class="status-bar__section">
                <span class="status-bar__item">{move || format_selection(editor.with(|s| s.selection.selected()))}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{move || format_geometry(selected().as_ref())}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{move || format_reference(reference())}</span>
            </div>
            <div class="status-bar__section">
                <span class="status-bar__item">{listing}</span>
            </div>
        </div>
    }
}

fn format_selection(id: Option<TileId>) -> String {
    id.map_or_else(|| "no selection".to_owned(), |id| format!("tile #{id}"))
}

fn format_geometry(record: Option<&TileRecord>) -> String {
    record.map_or_else(
        || "-".to_owned(),
        |r| {
            format!(
                "{}, {}  {} x {}",
                round_coord(r.left),
                round_coord(r.top),
                round_coord(r.width),
                round_coord(r.height)
            )
        },
    )
}

fn format_reference(node: Option<ReferenceNode>) -> String {
    node.map_or_else(
        || "ref -".to_owned(),
        |n| {
            format!(
                "ref {}, {}  translate {}, {}",
                round_coord(n.left),
                round_coord(n.top),
                round_coord(n.translate_x),
                round_coord(n.translate_y)
            )
        },
    )
}

#[allow(clippy::cast_possible_truncation)]
fn round_coord(value: f64) -> i64 {
    value.round() as i64
}
