//! Editor page: toolbar, tile canvas, and status bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page fetches the photo listing once. Tiles added before it
//! resolves are backfilled when it does; a failed fetch is logged and tiles
//! keep their placeholders.

use leptos::prelude::*;

use crate::components::status_bar::StatusBar;
use crate::components::tile_canvas::TileCanvas;
use crate::components::toolbar::Toolbar;
use crate::net::api::PHOTOS_ENDPOINT;
use crate::state::editor::EditorState;

/// Editor page. `listing_url` overrides the same-origin photo proxy.
#[component]
pub fn EditorPage(#[prop(optional, into)] listing_url: Option<String>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let url = listing_url.unwrap_or_else(|| PHOTOS_ENDPOINT.to_owned());

    #[cfg(feature = "hydrate")]
    {
        use leptos::logging::{log, warn};

        use crate::net::api::fetch_photos;
        use crate::net::types::image_refs;

        leptos::task::spawn_local(async move {
            match fetch_photos(&url).await {
                Ok(photos) => {
                    let images = image_refs(&photos);
                    let count = images.len();
                    // The page may be gone by the time the listing arrives.
                    let backfilled = editor.try_update(|s| s.load_images(images));
                    log!("photo listing loaded: {count} entries, {} tiles backfilled", backfilled.unwrap_or(0));
                }
                Err(e) => {
                    warn!("photo listing fetch failed: {e}");
                    let _ = editor.try_update(|s| s.fail_images(e));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (editor, url);
    }

    view! {
        <div class="editor-page">
            <Toolbar/>
            <TileCanvas/>
            <StatusBar/>
        </div>
    }
}
