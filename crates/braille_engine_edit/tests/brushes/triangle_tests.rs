//! Tests for triangle outlines

use braille_engine::Position;
use braille_engine_edit::brushes::{
    ShapeKind, ShapeParams, shape_to_dots_map,
    triangle::{BASE, CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT, LEFT_SIDE, RIGHT_SIDE, VERTEX, edge_columns},
};

#[test]
fn test_edges_widen_monotonically() {
    for w in 1..14 {
        for h in 2..12 {
            let mut prev = edge_columns(w, h, 0);
            assert!(prev.0 <= prev.1, "{w}x{h} row 0");
            for row in 1..h {
                let cur = edge_columns(w, h, row);
                assert!(cur.0 <= prev.0, "{w}x{h} left grew at row {row}");
                assert!(cur.1 >= prev.1, "{w}x{h} right shrank at row {row}");
                prev = cur;
            }
            assert_eq!(prev, (0, w - 1), "{w}x{h} base must span the box");
        }
    }
}

#[test]
fn test_apex_is_centred() {
    assert_eq!(edge_columns(5, 3, 0), (2, 2));
    assert_eq!(edge_columns(6, 3, 0), (2, 3));
}

#[test]
fn test_five_by_three() {
    let map = shape_to_dots_map(ShapeKind::Triangle, Position::new(0, 0), Position::new(4, 2), 10, 8, &ShapeParams::default());
    assert_eq!(map[&Position::new(2, 0)], VERTEX);
    assert_eq!(map[&Position::new(1, 1)], LEFT_SIDE);
    assert_eq!(map[&Position::new(3, 1)], RIGHT_SIDE);
    assert_eq!(map[&Position::new(0, 2)], CORNER_BOTTOM_LEFT);
    assert_eq!(map[&Position::new(2, 2)], BASE);
    assert_eq!(map[&Position::new(4, 2)], CORNER_BOTTOM_RIGHT);
    assert_eq!(map.len(), 1 + 2 + 5);
}

#[test]
fn test_degenerate_triangles() {
    let map = shape_to_dots_map(ShapeKind::Triangle, Position::new(3, 3), Position::new(3, 3), 10, 8, &ShapeParams::default());
    assert_eq!(map.len(), 1);
    assert_eq!(map[&Position::new(3, 3)], VERTEX);

    let map = shape_to_dots_map(ShapeKind::Triangle, Position::new(1, 0), Position::new(3, 0), 10, 8, &ShapeParams::default());
    assert_eq!(map[&Position::new(1, 0)], CORNER_BOTTOM_LEFT);
    assert_eq!(map[&Position::new(2, 0)], BASE);
    assert_eq!(map[&Position::new(3, 0)], CORNER_BOTTOM_RIGHT);
}
