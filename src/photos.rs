//! Upstream photo listing: fetch, parse, and cache.
//!
//! DESIGN
//! ======
//! The listing is fetched from the upstream at most once per successful
//! load. Failures are not cached, so the next request retries. Parsing is a
//! pure function for testability.

#[cfg(test)]
#[path = "photos_test.rs"]
mod photos_test;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use client::net::types::Photo;
use tokio::sync::RwLock;

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the upstream failed before a response arrived.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success status.
    #[error("upstream returned status {status}")]
    Status { status: u16 },

    /// The upstream body was not a photo listing.
    #[error("upstream listing parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// SOURCE
// =============================================================================

/// Thin HTTP wrapper around the configured upstream listing.
pub struct PhotoSource {
    http: reqwest::Client,
    upstream: String,
}

impl PhotoSource {
    pub fn new(config: &Config) -> Result<Self, PhotoError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.photos_timeout_secs))
            .build()
            .map_err(|e| PhotoError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: config.photos_upstream_url.clone() })
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    pub async fn fetch(&self) -> Result<Vec<Photo>, PhotoError> {
        let response = self
            .http
            .get(&self.upstream)
            .send()
            .await
            .map_err(|e| PhotoError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PhotoError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| PhotoError::Request(e.to_string()))?;
        parse_listing(&text)
    }
}

/// Parse an upstream listing body, preserving order.
pub fn parse_listing(body: &str) -> Result<Vec<Photo>, PhotoError> {
    serde_json::from_str(body).map_err(|e| PhotoError::Parse(e.to_string()))
}

// =============================================================================
// CACHE
// =============================================================================

/// Shared, lazily filled listing.
#[derive(Default)]
pub struct PhotoCache {
    listing: RwLock<Option<Arc<Vec<Photo>>>>,
}

impl PhotoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-filled with `photos`.
    #[cfg(test)]
    #[must_use]
    pub fn with_listing(photos: Vec<Photo>) -> Self {
        Self { listing: RwLock::new(Some(Arc::new(photos))) }
    }

    pub async fn cached(&self) -> Option<Arc<Vec<Photo>>> {
        self.listing.read().await.clone()
    }

    /// Return the cached listing, running `load` to fill it if empty.
    ///
    /// Concurrent callers wait on the write lock, so at most one load runs
    /// at a time. A failed load leaves the cache empty.
    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<Vec<Photo>>, PhotoError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Photo>, PhotoError>>,
    {
        if let Some(listing) = self.cached().await {
            return Ok(listing);
        }

        let mut slot = self.listing.write().await;
        if let Some(listing) = slot.as_ref() {
            return Ok(Arc::clone(listing));
        }

        let listing = Arc::new(load().await?);
        *slot = Some(Arc::clone(&listing));
        Ok(listing)
    }
}
