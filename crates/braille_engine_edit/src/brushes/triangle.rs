//! Isosceles triangle outline
//!
//! Works on cells rather than pixels: each cell on the outline gets one of a
//! few fixed patterns depending on whether it sits on the left edge, the right
//! edge, the base or a corner.

use braille_engine::{Dots, Position, Rectangle};

use super::DotMap;

/// `/` edge.
pub const LEFT_SIDE: Dots = Dots::pattern(&[3, 4]);
/// `\` edge.
pub const RIGHT_SIDE: Dots = Dots::pattern(&[1, 6]);
pub const BASE: Dots = Dots::pattern(&[3, 6]);
pub const CORNER_BOTTOM_LEFT: Dots = Dots::pattern(&[3, 4, 6]);
pub const CORNER_BOTTOM_RIGHT: Dots = Dots::pattern(&[1, 3, 6]);
/// Both edges in the same cell.
pub const VERTEX: Dots = Dots::pattern(&[1, 3, 4, 6]);

fn div_ceil(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}

/// Left and right edge columns (relative to the box) for `row` of a
/// `cells_w × cells_h` triangle with `cells_h > 1`.
///
/// The apex takes the middle column, or the two middle columns for even
/// widths. Columns widen monotonically towards the base.
pub fn edge_columns(cells_w: i32, cells_h: i32, row: i32) -> (i32, i32) {
    let apex_left = (cells_w - 1) / 2;
    let apex_right = div_ceil(cells_w - 1, 2);
    let denom = cells_h - 1;
    let left = apex_left * (denom - row) / denom;
    let right = apex_right + div_ceil((cells_w - 1 - apex_right) * row, denom);
    (left, right)
}

/// Triangle with its apex centred on the top row of `bbox` and its base on the bottom row.
pub fn triangle_dots(bbox: Rectangle) -> DotMap {
    let mut result = DotMap::new();
    let x0 = bbox.left();
    let y0 = bbox.top();
    let cells_w = bbox.width();
    let cells_h = bbox.height();

    if cells_w == 1 && cells_h == 1 {
        result.insert(Position::new(x0, y0), VERTEX);
        return result;
    }

    if cells_h == 1 {
        for x in bbox.x_range() {
            let dots = if x == x0 {
                CORNER_BOTTOM_LEFT
            } else if x == x0 + cells_w - 1 {
                CORNER_BOTTOM_RIGHT
            } else {
                BASE
            };
            result.insert(Position::new(x, y0), dots);
        }
        return result;
    }

    for row in 0..cells_h {
        let y = y0 + row;
        let (left, right) = edge_columns(cells_w, cells_h, row);

        if row == cells_h - 1 {
            for col in left..=right {
                let dots = if col == left && left != right {
                    CORNER_BOTTOM_LEFT
                } else if col == right && left != right {
                    CORNER_BOTTOM_RIGHT
                } else {
                    BASE
                };
                result.insert(Position::new(x0 + col, y), dots);
            }
        } else if left == right {
            result.insert(Position::new(x0 + left, y), VERTEX);
        } else {
            result.insert(Position::new(x0 + left, y), LEFT_SIDE);
            result.insert(Position::new(x0 + right, y), RIGHT_SIDE);
        }
    }
    result
}
