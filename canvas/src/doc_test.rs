#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;

fn listing(n: usize) -> Vec<ImageRef> {
    (0..n)
        .map(|i| ImageRef { url: format!("https://img.test/{i}.png"), title: format!("photo {i}") })
        .collect()
}

fn patch(top: f64, left: f64, width: f64, height: f64) -> TilePatch {
    TilePatch { top, left, width, height, color: TileColor::Green }
}

// =============================================================
// TileColor
// =============================================================

#[test]
fn color_css_names() {
    assert_eq!(TileColor::Red.as_css(), "red");
    assert_eq!(TileColor::Blue.as_css(), "blue");
    assert_eq!(TileColor::Yellow.as_css(), "yellow");
    assert_eq!(TileColor::Green.as_css(), "green");
    assert_eq!(TileColor::Purple.as_css(), "purple");
}

#[test]
fn color_from_sample_covers_palette_in_order() {
    assert_eq!(TileColor::from_sample(0.0), TileColor::Red);
    assert_eq!(TileColor::from_sample(0.2), TileColor::Blue);
    assert_eq!(TileColor::from_sample(0.45), TileColor::Yellow);
    assert_eq!(TileColor::from_sample(0.7), TileColor::Green);
    assert_eq!(TileColor::from_sample(0.999), TileColor::Purple);
}

#[test]
fn color_from_sample_pins_out_of_range() {
    assert_eq!(TileColor::from_sample(-3.0), TileColor::Red);
    assert_eq!(TileColor::from_sample(1.0), TileColor::Purple);
    assert_eq!(TileColor::from_sample(42.0), TileColor::Purple);
    assert_eq!(TileColor::from_sample(f64::NAN), TileColor::Red);
}

#[test]
fn color_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&TileColor::Purple).unwrap(), "\"purple\"");
    let back: TileColor = serde_json::from_str("\"yellow\"").unwrap();
    assert_eq!(back, TileColor::Yellow);
}

// =============================================================
// ObjectFit
// =============================================================

#[test]
fn fit_by_position_then_none() {
    assert_eq!(ObjectFit::for_position(0), Some(ObjectFit::Fill));
    assert_eq!(ObjectFit::for_position(1), Some(ObjectFit::Cover));
    assert_eq!(ObjectFit::for_position(2), Some(ObjectFit::Contain));
    assert_eq!(ObjectFit::for_position(3), Some(ObjectFit::None));
    assert_eq!(ObjectFit::for_position(4), Some(ObjectFit::ScaleDown));
    assert_eq!(ObjectFit::for_position(5), None);
}

#[test]
fn fit_css_uses_kebab_case() {
    assert_eq!(ObjectFit::ScaleDown.as_css(), "scale-down");
    assert_eq!(serde_json::to_string(&ObjectFit::ScaleDown).unwrap(), "\"scale-down\"");
}

// =============================================================
// TileStore::add / remove_last
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = TileStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.last().is_none());
}

#[test]
fn add_uses_default_geometry() {
    let mut store = TileStore::new();
    let id = store.add(TileColor::Blue, &[]);
    let tile = store.get(id).unwrap();
    assert_eq!(tile.top, 0.0);
    assert_eq!(tile.left, 0.0);
    assert_eq!(tile.width, 100.0);
    assert_eq!(tile.height, 100.0);
    assert_eq!(tile.color, TileColor::Blue);
    assert!(tile.update_end);
}

#[test]
fn add_twice_then_remove_last_keeps_first() {
    let mut store = TileStore::new();
    let first = store.add(TileColor::Red, &[]);
    let second = store.add(TileColor::Purple, &[]);
    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
    for tile in store.tiles() {
        assert!(PALETTE.contains(&tile.color));
        assert_eq!(tile.rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    let removed = store.remove_last().unwrap();
    assert_eq!(removed.id, second);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tiles()[0].id, first);
}

#[test]
fn remove_last_on_empty_is_noop() {
    let mut store = TileStore::new();
    assert!(store.remove_last().is_none());
    assert!(store.remove_last().is_none());
    assert!(store.is_empty());
}

#[test]
fn size_tracks_adds_minus_removes_clamped_at_zero() {
    // true = add, false = remove_last
    let script = [true, false, false, true, true, true, false, true, false, false, false, false, true];
    let mut store = TileStore::new();
    let mut expected: usize = 0;
    for (i, op) in script.iter().enumerate() {
        if *op {
            store.add(TileColor::from_sample(i as f64 / 13.0), &[]);
            expected += 1;
        } else {
            store.remove_last();
            expected = expected.saturating_sub(1);
        }
        assert_eq!(store.len(), expected, "after op {i}");
        let ids: HashSet<TileId> = store.tiles().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), store.len(), "duplicate ids after op {i}");
    }
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut store = TileStore::new();
    let a = store.add(TileColor::Red, &[]);
    store.remove_last();
    let b = store.add(TileColor::Red, &[]);
    assert_ne!(a, b);
}

// =============================================================
// Images and fit assignment
// =============================================================

#[test]
fn add_assigns_image_and_fit_by_position() {
    let images = listing(3);
    let mut store = TileStore::new();
    let a = store.add(TileColor::Red, &images);
    let b = store.add(TileColor::Red, &images);
    assert_eq!(store.get(a).unwrap().image.as_ref(), Some(&images[0]));
    assert_eq!(store.get(b).unwrap().image.as_ref(), Some(&images[1]));
    assert_eq!(store.get(a).unwrap().fit, Some(ObjectFit::Fill));
    assert_eq!(store.get(b).unwrap().fit, Some(ObjectFit::Cover));
}

#[test]
fn add_beyond_listing_leaves_image_empty() {
    let images = listing(1);
    let mut store = TileStore::new();
    store.add(TileColor::Red, &images);
    let second = store.add(TileColor::Red, &images);
    assert!(store.get(second).unwrap().image.is_none());
}

#[test]
fn add_after_remove_reuses_position_image() {
    let images = listing(3);
    let mut store = TileStore::new();
    store.add(TileColor::Red, &images);
    store.add(TileColor::Red, &images);
    store.remove_last();
    let again = store.add(TileColor::Red, &images);
    assert_eq!(store.get(again).unwrap().image.as_ref(), Some(&images[1]));
}

#[test]
fn attach_images_backfills_only_missing() {
    let mut store = TileStore::new();
    let a = store.add(TileColor::Red, &[]);
    let b = store.add(TileColor::Red, &[]);
    let images = listing(5);
    assert_eq!(store.attach_images(&images), 2);
    assert_eq!(store.get(a).unwrap().image.as_ref(), Some(&images[0]));
    assert_eq!(store.get(b).unwrap().image.as_ref(), Some(&images[1]));

    let other = listing(1);
    assert_eq!(store.attach_images(&other), 0);
    assert_eq!(store.get(a).unwrap().image.as_ref(), Some(&images[0]));
}

#[test]
fn attach_images_with_short_listing_fills_what_it_can() {
    let mut store = TileStore::new();
    store.add(TileColor::Red, &[]);
    let b = store.add(TileColor::Red, &[]);
    assert_eq!(store.attach_images(&listing(1)), 1);
    assert!(store.get(b).unwrap().image.is_none());
}

// =============================================================
// TileStore::update
// =============================================================

#[test]
fn update_replaces_record_and_clears_update_end() {
    let mut store = TileStore::new();
    let id = store.add(TileColor::Red, &listing(1));
    assert!(store.update(id, patch(10.0, 20.0, 30.0, 40.0), false));

    let tile = store.get(id).unwrap();
    assert_eq!(tile.rect(), Rect::new(20.0, 10.0, 30.0, 40.0));
    assert_eq!(tile.color, TileColor::Green);
    assert!(!tile.update_end);
    assert!(tile.image.is_some());
    assert_eq!(tile.fit, Some(ObjectFit::Fill));
}

#[test]
fn update_passes_update_end_through() {
    let mut store = TileStore::new();
    let id = store.add(TileColor::Red, &[]);
    store.update(id, patch(1.0, 1.0, 1.0, 1.0), false);
    store.update(id, patch(1.0, 1.0, 1.0, 1.0), true);
    assert!(store.get(id).unwrap().update_end);
}

#[test]
fn update_unknown_id_leaves_store_unchanged() {
    let mut store = TileStore::new();
    store.add(TileColor::Red, &listing(2));
    store.add(TileColor::Blue, &listing(2));
    let before = store.tiles().to_vec();

    assert!(!store.update(9_999, patch(5.0, 5.0, 5.0, 5.0), false));
    assert_eq!(store.tiles(), before.as_slice());
}

#[test]
fn update_touches_only_the_matching_tile() {
    let mut store = TileStore::new();
    let a = store.add(TileColor::Red, &[]);
    let b = store.add(TileColor::Blue, &[]);
    store.update(b, patch(7.0, 8.0, 9.0, 10.0), false);
    assert_eq!(store.get(a).unwrap().rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(store.get(b).unwrap().rect(), Rect::new(8.0, 7.0, 9.0, 10.0));
    assert_eq!(store.tiles()[0].id, a);
    assert_eq!(store.tiles()[1].id, b);
}

#[test]
fn patch_from_record_copies_mutable_fields() {
    let mut store = TileStore::new();
    let id = store.add(TileColor::Yellow, &[]);
    let p = TilePatch::from_record(store.get(id).unwrap());
    assert_eq!(p, TilePatch { top: 0.0, left: 0.0, width: 100.0, height: 100.0, color: TileColor::Yellow });
}

#[test]
fn tile_record_serde_roundtrip() {
    let mut store = TileStore::new();
    let id = store.add(TileColor::Green, &listing(1));
    let tile = store.get(id).unwrap().clone();
    let json = serde_json::to_string(&tile).unwrap();
    let back: TileRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tile);
}
