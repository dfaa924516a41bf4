//! Rasterizer output always stays inside the grid

use braille_engine::Position;
use braille_engine_edit::brushes::{ShapeKind, ShapeParams, shape_bounding_box, shape_to_dots_map};

const SHAPES: [ShapeKind; 4] = [ShapeKind::Rectangle, ShapeKind::Line, ShapeKind::Circle, ShapeKind::Triangle];

#[test]
fn test_out_of_grid_anchors_stay_inside() {
    let corners = [-7, -1, 0, 3, 9, 10, 25];
    for shape in SHAPES {
        for &ax in &corners {
            for &cy in &corners {
                let anchor = Position::new(ax, 2);
                let current = Position::new(9 - ax, cy);
                let map = shape_to_dots_map(shape, anchor, current, 10, 8, &ShapeParams::default());
                for (pos, dots) in &map {
                    assert!(pos.x >= 0 && pos.x < 10 && pos.y >= 0 && pos.y < 8, "{shape:?} wrote {pos} outside 10x8");
                    assert!(!dots.is_empty(), "{shape:?} produced an empty entry at {pos}");
                }
            }
        }
    }
}

#[test]
fn test_fully_outside_box_is_empty() {
    for shape in SHAPES {
        let map = shape_to_dots_map(shape, Position::new(12, 0), Position::new(20, 5), 10, 8, &ShapeParams::default());
        assert!(map.is_empty(), "{shape:?}");
        let map = shape_to_dots_map(shape, Position::new(-5, -5), Position::new(-1, -1), 10, 8, &ShapeParams::default());
        assert!(map.is_empty(), "{shape:?}");
    }
    assert!(shape_bounding_box(Position::new(-3, -3), Position::new(-1, 4), 10, 8).is_none());
}

#[test]
fn test_corner_order_does_not_matter_for_box_shapes() {
    for shape in [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle] {
        let a = shape_to_dots_map(shape, Position::new(1, 1), Position::new(6, 5), 10, 8, &ShapeParams::default());
        let b = shape_to_dots_map(shape, Position::new(6, 5), Position::new(1, 1), 10, 8, &ShapeParams::default());
        assert_eq!(a, b, "{shape:?}");
    }
}

#[test]
fn test_stroke_width_is_clamped() {
    let wide = ShapeParams {
        stroke_width: Some(40),
        ..ShapeParams::default()
    };
    let three = ShapeParams {
        stroke_width: Some(3),
        ..ShapeParams::default()
    };
    assert_eq!(wide.stroke_width(), 3);
    assert_eq!(
        shape_to_dots_map(ShapeKind::Rectangle, Position::new(0, 0), Position::new(4, 4), 10, 8, &wide),
        shape_to_dots_map(ShapeKind::Rectangle, Position::new(0, 0), Position::new(4, 4), 10, 8, &three)
    );
    let zero = ShapeParams {
        stroke_width: Some(0),
        ..ShapeParams::default()
    };
    assert_eq!(zero.stroke_width(), 1);
}

#[test]
fn test_extreme_anchors_stay_inside() {
    let far = i32::MAX / 2;
    let corners = [
        (Position::new(-far, -far), Position::new(far, far)),
        (Position::new(far, -far), Position::new(-far, far)),
        (Position::new(-far, 3), Position::new(4, 3)),
        (Position::new(5, far), Position::new(5, -far)),
    ];
    for shape in SHAPES {
        for (anchor, current) in corners {
            let map = shape_to_dots_map(shape, anchor, current, 10, 8, &ShapeParams::default());
            if shape == ShapeKind::Line {
                assert!(!map.is_empty(), "line from {anchor} to {current}");
            }
            for pos in map.keys() {
                assert!(pos.x >= 0 && pos.x < 10 && pos.y >= 0 && pos.y < 8, "{shape:?} wrote {pos} outside 10x8");
            }
        }
    }
}

#[test]
fn test_line_from_far_left_covers_row() {
    let map = shape_to_dots_map(ShapeKind::Line, Position::new(-200_000_000, 0), Position::new(3, 0), 10, 8, &ShapeParams::default());
    let cells: Vec<Position> = map.keys().copied().collect();
    assert_eq!(cells, vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)]);
}
