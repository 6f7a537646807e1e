//! Photo listing fetch.
//!
//! Client-side (hydrate): one `GET` via `gloo-net`.
//! Server-side (SSR): returns an error, since the listing is only fetched
//! once the page is live in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)`; the page logs them and renders tiles
//! with a placeholder instead of an image.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Photo;

/// Same-origin proxy of the upstream listing.
pub const PHOTOS_ENDPOINT: &str = "/api/photos";

#[cfg(any(test, feature = "hydrate"))]
fn photos_request_failed_message(status: u16) -> String {
    format!("photo listing request failed: {status}")
}

/// Decode a listing body.
pub fn parse_photos(body: &str) -> Result<Vec<Photo>, String> {
    serde_json::from_str(body).map_err(|e| format!("invalid photo listing: {e}"))
}

/// Fetch the ordered photo listing from `url` (normally [`PHOTOS_ENDPOINT`]).
pub async fn fetch_photos(url: &str) -> Result<Vec<Photo>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(photos_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_photos(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}
