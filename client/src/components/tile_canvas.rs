//! Bridge component between Leptos state and the imperative
//! `canvas::engine::Moveable`.
//!
//! ARCHITECTURE
//! ============
//! The container `NodeRef` is owned here and is the only source of bounds.
//! Each tile registers its element under its id; an effect keeps the engine
//! attached to the selected tile's element. Container pointer events are
//! translated to container-local points, fed to the engine, and the
//! resulting actions are routed through `TileBinder` into the store.
//!
//! ERROR HANDLING
//! ==============
//! Style writes that fail during resize feedback are logged; the store update
//! for that frame is skipped, and the next frame tries again.

use std::collections::HashMap;

use leptos::prelude::*;

use canvas::doc::TileId;
use canvas::engine::MoveableConfig;

use crate::components::handles::HandleOverlay;
use crate::components::tile_view::TileView;
use crate::state::editor::EditorState;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::binder::TileBinder;
#[cfg(feature = "hydrate")]
use canvas::bounds::ContainerBounds;
#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Moveable};
#[cfg(feature = "hydrate")]
use canvas::input::Button;
#[cfg(feature = "hydrate")]
use leptos::logging::{log, warn};

#[cfg(feature = "hydrate")]
use crate::util::pointer::{client_point, container_bounds};

type TileRefs = HashMap<TileId, NodeRef<leptos::html::Div>>;

#[cfg(feature = "hydrate")]
fn process_actions(
    actions: Vec<Action>,
    binder: TileBinder,
    container: Option<ContainerBounds>,
    container_el: Option<&web_sys::HtmlDivElement>,
    editor: RwSignal<EditorState>,
) {
    for action in actions {
        match action {
            Action::Drag(ev) => {
                if let Some(record) = editor.with_untracked(EditorState::selected_record) {
                    let update = binder.on_drag(&record, &ev);
                    editor.update(|s| {
                        s.apply(&update);
                    });
                }
            }
            Action::Resize(ev) => {
                if let Some(record) = editor.with_untracked(EditorState::selected_record) {
                    let (update, node) = binder.on_resize(&record, &ev, container.as_ref());
                    editor.update(|s| {
                        if s.apply(&update) {
                            s.set_feedback(update.id, node);
                        }
                    });
                }
            }
            Action::DragEnd { moved } => finish_gesture(moved, binder, editor),
            Action::ResizeEnd { moved } => {
                editor.update(EditorState::settle_feedback);
                finish_gesture(moved, binder, editor);
            }
            Action::SetCursor(cursor) => {
                if let Some(el) = container_el {
                    if let Err(e) = el.style().set_property("cursor", cursor) {
                        warn!("failed to set cursor: {e:?}");
                    }
                }
            }
            Action::DragStart | Action::ResizeStart(_) => {}
        }
    }
}

#[cfg(feature = "hydrate")]
fn finish_gesture(moved: bool, binder: TileBinder, editor: RwSignal<EditorState>) {
    if !moved {
        return;
    }
    if let Some(record) = editor.with_untracked(EditorState::selected_record) {
        let update = binder.on_gesture_end(&record);
        editor.update(|s| {
            s.apply(&update);
        });
        log!("tile {} settled at {}, {}", update.id, update.patch.left, update.patch.top);
    }
}

/// The editor surface: a positioned container holding every tile and the
/// handle overlay for the selected one.
#[component]
pub fn TileCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let tile_refs = StoredValue::new(TileRefs::new());
    let config = MoveableConfig::tile_editor();

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(Moveable::new(config.clone())));
    #[cfg(feature = "hydrate")]
    let binder = TileBinder::new();

    // Keep the engine attached to the selected tile only.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let attached: Rc<Cell<Option<TileId>>> = Rc::new(Cell::new(None));
        Effect::new(move || {
            let selected = editor.with(EditorState::selected_record);
            let element = selected
                .as_ref()
                .and_then(|r| tile_refs.with_value(|refs| refs.get(&r.id).copied()))
                .and_then(|node_ref| node_ref.get());
            let mut engine = engine.borrow_mut();
            match (selected, element) {
                (Some(record), Some(el)) => {
                    if attached.get() == Some(record.id) {
                        engine.sync_target_rect(record.rect());
                    } else {
                        engine.attach(el.into(), record.rect());
                        attached.set(Some(record.id));
                    }
                }
                _ => {
                    engine.detach();
                    attached.set(None);
                }
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let Some(container_el) = container_ref.get_untracked() else {
                    return;
                };
                let container = container_bounds(&container_el);
                let point = container.to_local(client_point(&ev));
                let actions = {
                    let mut engine = engine.borrow_mut();
                    engine.set_bounds(Some(container.edges()));
                    engine.on_pointer_down(point, Button::from_dom(ev.button()))
                };
                if !actions.is_empty() {
                    ev.prevent_default();
                    let _ = container_el.set_pointer_capture(ev.pointer_id());
                }
                process_actions(actions, binder, Some(container), Some(&container_el), editor);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let Some(container_el) = container_ref.get_untracked() else {
                    return;
                };
                let container = container_bounds(&container_el);
                let point = container.to_local(client_point(&ev));
                let result = {
                    let mut engine = engine.borrow_mut();
                    engine.set_bounds(Some(container.edges()));
                    engine.on_pointer_move(point)
                };
                match result {
                    Ok(actions) => process_actions(actions, binder, Some(container), Some(&container_el), editor),
                    Err(e) => warn!("resize feedback failed: {e:?}"),
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let container_el = container_ref.get_untracked();
                let container = container_el.as_ref().map(|el| container_bounds(el));
                let point = container.map_or_else(|| client_point(&ev), |c| c.to_local(client_point(&ev)));
                let result = engine.borrow_mut().on_pointer_up(point);
                if let Some(el) = container_el.as_ref() {
                    if el.has_pointer_capture(ev.pointer_id()) {
                        let _ = el.release_pointer_capture(ev.pointer_id());
                    }
                }
                match result {
                    Ok(actions) => process_actions(actions, binder, container, container_el.as_ref(), editor),
                    Err(e) => warn!("clearing resize feedback failed: {e:?}"),
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let tile_ids = move || editor.with(|s| s.tiles.tiles().iter().map(|r| r.id).collect::<Vec<_>>());

    view! {
        <div
            class="tile-canvas"
            node_ref=container_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up.clone()
            on:pointercancel=on_pointer_up
        >
            <For
                each=tile_ids
                key=|id| *id
                children=move |id: TileId| {
                    let node_ref = NodeRef::<leptos::html::Div>::new();
                    tile_refs.update_value(|refs| {
                        refs.insert(id, node_ref);
                    });
                    on_cleanup(move || {
                        tile_refs.update_value(|refs| {
                            refs.remove(&id);
                        });
                    });
                    view! { <TileView id=id tile_ref=node_ref/> }
                }
            />
            <HandleOverlay config=config/>
        </div>
    }
}
