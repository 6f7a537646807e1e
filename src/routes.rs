//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the photo listing proxy and health check, then stitches them with
//! Leptos SSR rendering and the `/pkg` asset directory under one Axum router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use client::net::types::Photo;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::photos::PhotoError;
use crate::state::AppState;

/// API routes: listing proxy and health check.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/photos", get(list_photos))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes, Leptos SSR at `/`, and `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// `GET /api/photos`: the cached upstream listing.
pub async fn list_photos(State(state): State<AppState>) -> Result<Json<Vec<Photo>>, StatusCode> {
    let source = Arc::clone(&state.photos);
    let listing = state
        .cache
        .get_or_load(|| async move { source.fetch().await })
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, upstream = state.photos.upstream(), "photo listing unavailable");
            photo_error_to_status(&e)
        })?;

    Ok(Json(listing.as_ref().clone()))
}

fn photo_error_to_status(err: &PhotoError) -> StatusCode {
    match err {
        PhotoError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        PhotoError::Request(_) | PhotoError::Status { .. } | PhotoError::Parse(_) => StatusCode::BAD_GATEWAY,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
