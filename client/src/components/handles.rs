//! Resize handles (and the optional origin marker) drawn over the selected
//! tile. Purely visual: grabbing is decided by the engine's hit test.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use canvas::engine::MoveableConfig;
use canvas::render::px;

use crate::state::editor::EditorState;
use crate::util::overlay::{handle_box, origin_box};

#[component]
pub fn HandleOverlay(config: MoveableConfig) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let selected = Memo::new(move |_| editor.with(|s| s.selection.selected().and_then(|id| s.visible_rect(id))));

    move || {
        let Some(rect) = selected.get() else {
            return ().into_any();
        };
        let zoom = config.zoom;
        let handles = if config.resizable { config.render_directions.clone() } else { Vec::new() };
        let origin = config.origin.then(|| origin_box(&rect, zoom));

        view! {
            <div class="handles">
                {handles
                    .into_iter()
                    .map(|anchor| {
                        let b = handle_box(anchor, &rect, zoom);
                        view! {
                            <div
                                class=format!("handles__handle handles__handle--{}", anchor.as_str())
                                style:left=px(b.left)
                                style:top=px(b.top)
                                style:width=px(b.width)
                                style:height=px(b.height)
                                style:cursor=anchor.cursor()
                            ></div>
                        }
                    })
                    .collect_view()}
                {origin.map(|b| view! {
                    <div
                        class="handles__origin"
                        style:left=px(b.left)
                        style:top=px(b.top)
                        style:width=px(b.width)
                        style:height=px(b.height)
                    ></div>
                })}
            </div>
        }
            .into_any()
    }
}
