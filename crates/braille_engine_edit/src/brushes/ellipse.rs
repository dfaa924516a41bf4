//! Ellipse outline
//!
//! Sampling a bitmap gives thick, boxy outlines for small circles, so the
//! ellipse works directly on dots: every dot is measured against the curve and
//! raised when close enough.

use braille_engine::{CELL_HEIGHT, CELL_WIDTH, Dots, Position, Rectangle};

use super::{DotMap, dot_offset};

/// Left/right dot index pairs (0 based) that are thinned against each other.
const DOT_PAIRS: [(usize, usize); 3] = [(0, 3), (1, 4), (2, 5)];

/// Distance difference above which the farther dot of a pair is dropped.
/// Keeps the sides one dot thick while top and bottom may use both columns.
pub const THIN_DIFF_PX: f64 = 2.0;

/// Approximate pixel distance from a point to the ellipse centred at `(cx, cy)`
/// with semi axes `a`, `b`, measured along the ray from the centre.
pub fn pixel_dist_to_ellipse(px: f64, py: f64, cx: f64, cy: f64, a: f64, b: f64) -> f64 {
    let vx = px - cx;
    let vy = py - cy;
    let r = (vx * vx + vy * vy).sqrt();
    if r < 0.001 {
        return a.min(b);
    }
    let nx = vx / a;
    let ny = vy / b;
    let d_norm = (nx * nx + ny * ny).sqrt();
    (d_norm - 1.0).abs() / d_norm.max(0.001) * r
}

/// Ellipse inscribed in `bbox` as dots.
pub fn ellipse_dots(bbox: Rectangle, max_dist_px: f64) -> DotMap {
    let x0 = bbox.left();
    let y0 = bbox.top();
    let mut result = DotMap::new();

    // too small for a curve, use the canonical small circle patterns
    match (bbox.width(), bbox.height()) {
        (2, 1) => {
            result.insert(Position::new(x0, y0), Dots::pattern(&[2, 4, 6]));
            result.insert(Position::new(x0 + 1, y0), Dots::pattern(&[1, 3, 5]));
            return result;
        }
        (1, 2) => {
            result.insert(Position::new(x0, y0), Dots::pattern(&[1, 3, 4, 6]));
            result.insert(Position::new(x0, y0 + 1), Dots::pattern(&[1, 3, 4, 6]));
            return result;
        }
        _ => {}
    }

    let w_px = (bbox.width() * CELL_WIDTH) as f64;
    let h_px = (bbox.height() * CELL_HEIGHT) as f64;
    let cx = (w_px - 1.0) / 2.0;
    let cy = (h_px - 1.0) / 2.0;
    let a = (w_px / 2.0).max(1.0);
    let b = (h_px / 2.0).max(1.0);

    for cell in bbox.cells() {
        let off_x = ((cell.x - x0) * CELL_WIDTH) as f64;
        let off_y = ((cell.y - y0) * CELL_HEIGHT) as f64;

        let mut dists = [0.0; 6];
        let mut active = [false; 6];
        for i in 0..6 {
            let (dx, dy) = dot_offset(i);
            dists[i] = pixel_dist_to_ellipse(off_x + dx, off_y + dy, cx, cy, a, b);
            active[i] = dists[i] <= max_dist_px;
        }

        for (left, right) in DOT_PAIRS {
            if active[left] && active[right] && (dists[left] - dists[right]).abs() > THIN_DIFF_PX {
                if dists[left] > dists[right] {
                    active[left] = false;
                } else {
                    active[right] = false;
                }
            }
        }

        let dots = active
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(Dots::empty(), |acc, (i, _)| acc | Dots::from_bits_truncate(1 << i));
        if !dots.is_empty() {
            result.insert(cell, dots);
        }
    }
    result
}
