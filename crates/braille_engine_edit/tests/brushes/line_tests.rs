//! Tests for line rasterization

use braille_engine::{Dots, Position};
use braille_engine_edit::brushes::{ShapeKind, ShapeParams, shape_to_dots_map};

#[test]
fn test_same_input_same_output() {
    let params = ShapeParams::default().with_anchor_frac((0.8, 0.9));
    let first = shape_to_dots_map(ShapeKind::Line, Position::new(0, 7), Position::new(9, 0), 10, 8, &params);
    for _ in 0..5 {
        assert_eq!(shape_to_dots_map(ShapeKind::Line, Position::new(0, 7), Position::new(9, 0), 10, 8, &params), first);
    }
    assert!(!first.is_empty());
}

#[test]
fn test_horizontal_line_through_centre() {
    let map = shape_to_dots_map(ShapeKind::Line, Position::new(0, 2), Position::new(5, 2), 10, 8, &ShapeParams::default());
    assert_eq!(map.len(), 6);
    for x in 0..6 {
        assert_eq!(map[&Position::new(x, 2)], Dots::DOT2 | Dots::DOT5, "cell {x}");
    }
}

#[test]
fn test_vertical_line_uses_one_dot_column() {
    // pressed in the upper left of the anchor cell: left column, top row
    let params = ShapeParams::default().with_anchor_frac((0.2, 0.1));
    let map = shape_to_dots_map(ShapeKind::Line, Position::new(2, 0), Position::new(2, 3), 10, 8, &params);
    assert_eq!(map.len(), 4);
    for dots in map.values() {
        assert!(Dots::LEFT_COLUMN.contains(*dots));
    }
    assert_eq!(map[&Position::new(2, 1)], Dots::LEFT_COLUMN);
    assert_eq!(map[&Position::new(2, 3)], Dots::DOT1);
}

#[test]
fn test_clamped_line_keeps_its_direction() {
    // the anchor lies outside; the part inside is still the same row
    let map = shape_to_dots_map(ShapeKind::Line, Position::new(-4, 1), Position::new(3, 1), 10, 8, &ShapeParams::default());
    assert!(map.keys().all(|pos| pos.y == 1));
    assert!(map.contains_key(&Position::new(0, 1)));
    assert!(map.contains_key(&Position::new(3, 1)));
}
