//! Tests for rectangle outlines

use braille_engine::{Dots, Position, Rectangle};
use braille_engine_edit::brushes::{ShapeKind, ShapeParams, shape_to_dots_map};

#[test]
fn test_contour_is_complete_and_hollow() {
    let map = shape_to_dots_map(ShapeKind::Rectangle, Position::new(1, 1), Position::new(4, 3), 10, 8, &ShapeParams::default());
    let bbox = Rectangle::from_pt(Position::new(1, 1), Position::new(4, 3));

    for cell in bbox.cells() {
        let on_border = cell.x == 1 || cell.x == 4 || cell.y == 1 || cell.y == 3;
        assert_eq!(map.contains_key(&cell), on_border, "cell {cell}");
    }
    assert_eq!(map.len(), 10);
}

#[test]
fn test_sides_raise_outer_dots() {
    let map = shape_to_dots_map(ShapeKind::Rectangle, Position::new(0, 0), Position::new(3, 2), 10, 8, &ShapeParams::default());
    // left column cells carry the whole left dot column
    assert!(map[&Position::new(0, 1)].contains(Dots::LEFT_COLUMN));
    // right column cells carry the whole right dot column
    assert!(map[&Position::new(3, 1)].contains(Dots::RIGHT_COLUMN));
    // top edge: dots 1 and 4, bottom edge: dots 3 and 6
    assert!(map[&Position::new(1, 0)].contains(Dots::DOT1 | Dots::DOT4));
    assert!(map[&Position::new(2, 2)].contains(Dots::DOT3 | Dots::DOT6));
    assert!(!map[&Position::new(1, 0)].intersects(Dots::DOT3 | Dots::DOT6));
}

#[test]
fn test_single_cell_rectangle() {
    let map = shape_to_dots_map(ShapeKind::Rectangle, Position::new(2, 2), Position::new(2, 2), 10, 8, &ShapeParams::default());
    assert_eq!(map.len(), 1);
    assert_eq!(map[&Position::new(2, 2)], Dots::all());
}
