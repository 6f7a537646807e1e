#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::TileColor;
use crate::hit::ResizeAnchor;

fn record(top: f64, left: f64, width: f64, height: f64) -> TileRecord {
    TileRecord {
        id: 42,
        top,
        left,
        width,
        height,
        color: TileColor::Purple,
        update_end: true,
        image: None,
        fit: None,
    }
}

fn resize(width: f64, height: f64, translate: [f64; 2]) -> ResizeEvent {
    ResizeEvent {
        width,
        height,
        direction: ResizeAnchor::Se,
        drag: DragEvent { left: 0.0, top: 0.0, before_translate: translate },
    }
}

// =============================================================
// on_drag
// =============================================================

#[test]
fn drag_takes_origin_from_event_and_size_from_record() {
    let binder = TileBinder::new();
    let rec = record(0.0, 0.0, 120.0, 80.0);
    let ev = DragEvent { left: 30.0, top: 15.0, before_translate: [30.0, 15.0] };
    let update = binder.on_drag(&rec, &ev);
    assert_eq!(update.id, 42);
    assert_eq!(
        update.patch,
        TilePatch { top: 15.0, left: 30.0, width: 120.0, height: 80.0, color: TileColor::Purple }
    );
    assert!(!update.update_end);
}

#[test]
fn drag_floors_negative_origin_at_zero() {
    let binder = TileBinder::new();
    let rec = record(10.0, 10.0, 100.0, 100.0);
    let ev = DragEvent { left: -20.0, top: -5.0, before_translate: [-30.0, -15.0] };
    let update = binder.on_drag(&rec, &ev);
    assert_eq!((update.patch.left, update.patch.top), (0.0, 0.0));
}

#[test]
fn drag_keeps_positive_origin_without_upper_limit() {
    let binder = TileBinder::new();
    let rec = record(0.0, 0.0, 100.0, 100.0);
    let update = binder.on_drag(&rec, &DragEvent { left: 30.0, top: 4_000.0, before_translate: [30.0, 4_000.0] });
    assert_eq!((update.patch.left, update.patch.top), (30.0, 4_000.0));
}

#[test]
fn drag_after_resize_uses_live_dimensions() {
    let binder = TileBinder::new();
    let mut store = TileStore::new();
    let id = store.add(TileColor::Red, &[]);

    let rec = store.get(id).unwrap().clone();
    let (update, _) = binder.on_resize(&rec, &resize(150.0, 60.0, [0.0, 0.0]), None);
    update.apply(&mut store);

    let rec = store.get(id).unwrap().clone();
    binder
        .on_drag(&rec, &DragEvent { left: 5.0, top: 6.0, before_translate: [5.0, 6.0] })
        .apply(&mut store);

    let tile = store.get(id).unwrap();
    assert_eq!((tile.left, tile.top, tile.width, tile.height), (5.0, 6.0, 150.0, 60.0));
}

// =============================================================
// on_resize
// =============================================================

#[test]
fn resize_clamps_to_container() {
    let binder = TileBinder::new();
    let rec = record(50.0, 0.0, 50.0, 50.0);
    let container = ContainerBounds::new(0.0, 0.0, 200.0, 120.0);
    let (update, _) = binder.on_resize(&rec, &resize(50.0, 100.0, [0.0, 0.0]), Some(&container));
    assert_eq!(update.patch.height, 70.0);
    assert_eq!(update.patch.width, 50.0);
    assert_eq!((update.patch.top, update.patch.left), (50.0, 0.0));
}

#[test]
fn resize_without_container_skips_clamp() {
    let binder = TileBinder::new();
    let rec = record(50.0, 0.0, 50.0, 50.0);
    let (update, _) = binder.on_resize(&rec, &resize(5_000.0, 5_000.0, [0.0, 0.0]), None);
    assert_eq!((update.patch.width, update.patch.height), (5_000.0, 5_000.0));
}

#[test]
fn resize_keeps_record_origin_and_color() {
    let binder = TileBinder::new();
    let rec = record(20.0, 30.0, 50.0, 50.0);
    let (update, _) = binder.on_resize(&rec, &resize(60.0, 60.0, [-10.0, -5.0]), None);
    assert_eq!((update.patch.top, update.patch.left), (20.0, 30.0));
    assert_eq!(update.patch.color, TileColor::Purple);
    assert!(!update.update_end);
}

#[test]
fn resize_reference_node_tracks_translation() {
    let binder = TileBinder::new();
    let rec = record(20.0, 30.0, 50.0, 50.0);
    let (_, node) = binder.on_resize(&rec, &resize(60.0, 60.0, [-10.0, -5.0]), None);
    assert_eq!(node, ReferenceNode { top: 15.0, left: 20.0, translate_x: -10.0, translate_y: -5.0 });
}

#[test]
fn resize_reference_node_floors_origin_at_zero() {
    let binder = TileBinder::new();
    let rec = record(5.0, 5.0, 50.0, 50.0);
    let (_, node) = binder.on_resize(&rec, &resize(80.0, 80.0, [-20.0, -30.0]), None);
    assert_eq!((node.top, node.left), (0.0, 0.0));
    assert_eq!((node.translate_x, node.translate_y), (-20.0, -30.0));
}

#[test]
fn custom_clamp_is_used() {
    fn floor_at_ten(_top: f64, _left: f64, proposed: Size, _container: Size) -> Size {
        Size::new(proposed.width.max(10.0), proposed.height.max(10.0))
    }
    let binder = TileBinder::with_clamp(floor_at_ten);
    let rec = record(0.0, 0.0, 50.0, 50.0);
    let container = ContainerBounds::new(0.0, 0.0, 100.0, 100.0);
    let (update, _) = binder.on_resize(&rec, &resize(2.0, 3.0, [0.0, 0.0]), Some(&container));
    assert_eq!((update.patch.width, update.patch.height), (10.0, 10.0));
}

// =============================================================
// on_gesture_end / apply
// =============================================================

#[test]
fn gesture_end_marks_update_end() {
    let binder = TileBinder::new();
    let rec = record(1.0, 2.0, 3.0, 4.0);
    let update = binder.on_gesture_end(&rec);
    assert!(update.update_end);
    assert_eq!(update.patch, TilePatch::from_record(&rec));
}

#[test]
fn apply_to_missing_tile_is_noop() {
    let binder = TileBinder::new();
    let mut store = TileStore::new();
    store.add(TileColor::Blue, &[]);
    let before = store.tiles().to_vec();
    assert!(!binder.on_gesture_end(&record(0.0, 0.0, 1.0, 1.0)).apply(&mut store));
    assert_eq!(store.tiles(), before.as_slice());
}

#[test]
fn reference_node_from_record_is_untranslated() {
    let node = ReferenceNode::from_record(&record(7.0, 8.0, 1.0, 1.0));
    assert_eq!(node, ReferenceNode { top: 7.0, left: 8.0, translate_x: 0.0, translate_y: 0.0 });
}
