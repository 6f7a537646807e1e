//! Top bar with the add and remove tile buttons.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::util::palette::random_color;

/// Editor toolbar.
#[component]
pub fn Toolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_add = move |_| {
        editor.update(|state| {
            state.add_tile(random_color());
        });
    };

    let on_remove = move |_| {
        editor.update(|state| {
            state.remove_last_tile();
        });
    };

    view! {
        <div class="toolbar">
            <button class="toolbar__btn" on:click=on_add>"Add Moveable"</button>
            <button class="toolbar__btn" on:click=on_remove>"Remove Moveable"</button>
            <span class="toolbar__divider"></span>
            <span class="toolbar__count">{move || format!("{} tiles", editor.with(|s| s.tiles.len()))}</span>
        </div>
    }
}
