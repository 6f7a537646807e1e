//! Status of the one-shot photo listing fetch.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use canvas::doc::ImageRef;

/// Listing lifecycle. Fetch failures are logged and leave the listing empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ImageListing {
    #[default]
    Loading,
    Ready(Vec<ImageRef>),
    Failed(String),
}

impl ImageListing {
    /// Entries to assign to new tiles; empty until the fetch resolves.
    pub fn entries(&self) -> &[ImageRef] {
        match self {
            Self::Ready(images) => images,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    pub fn status_label(&self) -> String {
        match self {
            Self::Loading => "images: loading".to_owned(),
            Self::Ready(images) => format!("images: {}", images.len()),
            Self::Failed(_) => "images: unavailable".to_owned(),
        }
    }
}
