//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the upstream photo source and the listing cache; both are behind
//! `Arc` so cloning per request is cheap.

use std::sync::Arc;

use crate::config::Config;
use crate::photos::{PhotoCache, PhotoError, PhotoSource};

#[derive(Clone)]
pub struct AppState {
    pub photos: Arc<PhotoSource>,
    pub cache: Arc<PhotoCache>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, PhotoError> {
        Ok(Self { photos: Arc::new(PhotoSource::new(config)?), cache: Arc::new(PhotoCache::new()) })
    }

    /// State whose cache already holds `cache`.
    #[cfg(test)]
    pub fn with_cache(config: &Config, cache: PhotoCache) -> Result<Self, PhotoError> {
        Ok(Self { photos: Arc::new(PhotoSource::new(config)?), cache: Arc::new(cache) })
    }
}
