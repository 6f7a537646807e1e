use super::*;

use canvas::doc::TileColor;

fn record() -> TileRecord {
    TileRecord {
        id: 3,
        top: 12.4,
        left: 7.6,
        width: 100.0,
        height: 80.5,
        color: TileColor::Blue,
        update_end: true,
        image: None,
        fit: None,
    }
}

#[test]
fn format_selection_variants() {
    assert_eq!(format_selection(None), "no selection");
    assert_eq!(format_selection(Some(4)), "tile #4");
}

#[test]
fn format_geometry_rounds_fields() {
    assert_eq!(format_geometry(Some(&record())), "8, 12  100 x 81");
    assert_eq!(format_geometry(None), "-");
}

#[test]
fn format_reference_shows_translation() {
    let node = ReferenceNode { top: 0.0, left: 10.0, translate_x: -20.0, translate_y: 0.0 };
    assert_eq!(format_reference(Some(node)), "ref 10, 0  translate -20, 0");
    assert_eq!(format_reference(None), "ref -");
}

#[test]
fn round_coord_rounds_half_away_from_zero() {
    assert_eq!(round_coord(1.5), 2);
    assert_eq!(round_coord(-1.5), -2);
}
