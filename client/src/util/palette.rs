//! Random tile color selection.

use canvas::doc::TileColor;

/// Pick a palette color uniformly at random.
///
/// Only the browser adds tiles; server renders fall back to the first
/// palette entry.
pub fn random_color() -> TileColor {
    #[cfg(feature = "hydrate")]
    {
        TileColor::from_sample(js_sys::Math::random())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TileColor::from_sample(0.0)
    }
}
