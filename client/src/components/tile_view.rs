//! One tile: an absolutely positioned box holding its image.
//!
//! The view is a pure function of the tile record, its selection status and
//! its image entry. Tiles whose image has not arrived (or never will) render
//! a colored placeholder instead.

#[cfg(test)]
#[path = "tile_view_test.rs"]
mod tile_view_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use canvas::doc::{TileId, TileRecord};
use canvas::render::px;

use crate::state::editor::EditorState;

#[component]
pub fn TileView(id: TileId, tile_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let record = Memo::new(move |_| editor.with(|s| s.tiles.get(id).cloned()));
    let selected = move || editor.with(|s| s.selection.is_selected(id));

    let on_click = move |_| {
        editor.update(|s| s.select(id));
    };

    view! {
        <div
            node_ref=tile_ref
            class=move || tile_class(selected())
            style:top=move || record.with(|r| style_px(r.as_ref(), |r| r.top))
            style:left=move || record.with(|r| style_px(r.as_ref(), |r| r.left))
            style:width=move || record.with(|r| style_px(r.as_ref(), |r| r.width))
            style:height=move || record.with(|r| style_px(r.as_ref(), |r| r.height))
            style:background-color=move || record.with(|r| r.as_ref().map_or("", |r| r.color.as_css()))
            on:click=on_click
        >
            {move || {
                let Some(r) = record.get() else {
                    return ().into_any();
                };
                match r.image {
                    Some(image) => {
                        let fit = r.fit.map_or("", |f| f.as_css());
                        view! {
                            <img
                                class="tile__img"
                                src=image.url
                                alt=image.title
                                draggable="false"
                                style:object-fit=fit
                            />
                        }
                            .into_any()
                    }
                    None => view! { <div class="tile__placeholder"></div> }.into_any(),
                }
            }}
        </div>
    }
}

fn tile_class(selected: bool) -> &'static str {
    if selected { "tile tile--selected" } else { "tile" }
}

fn style_px(record: Option<&TileRecord>, field: fn(&TileRecord) -> f64) -> String {
    record.map_or_else(String::new, |r| px(field(r)))
}
