//! Photo listing schema (JSONPlaceholder `/photos` records).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::doc::ImageRef;
use serde::{Deserialize, Serialize};

/// One listing entry. Only `url` is required; the other fields default when
/// an upstream omits them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default)]
    pub album_id: u64,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
}

impl Photo {
    pub fn image_ref(&self) -> ImageRef {
        ImageRef { url: self.url.clone(), title: self.title.clone() }
    }
}

/// Listing order is preserved.
pub fn image_refs(photos: &[Photo]) -> Vec<ImageRef> {
    photos.iter().map(Photo::image_ref).collect()
}
