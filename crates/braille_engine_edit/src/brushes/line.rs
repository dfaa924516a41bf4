//! Line drawing
//!
//! Bresenham between two endpoints in logical pixel space. Both endpoints are
//! snapped to the same dot column and dot row, picked from where the user
//! pressed inside the anchor cell, so a vertical line raises one dot column
//! instead of both.

use braille_engine::{CELL_HEIGHT, CELL_WIDTH, Position, Rectangle};

use super::{DotMap, PixelBitmap, round_px};

/// Snapped `(x, y)` fraction inside a cell for a press at `anchor_frac`.
///
/// Without a press position the line runs through the cell centre.
pub fn snap_fraction(anchor_frac: Option<(f64, f64)>) -> (f64, f64) {
    let Some((fx, fy)) = anchor_frac else {
        return (0.5, 0.5);
    };
    let x = if fx < 0.5 { 0.3 } else { 0.7 };
    let y = if fy < 0.35 {
        0.2
    } else if fy < 0.65 {
        0.5
    } else {
        0.8
    };
    (x, y)
}

/// Generates the pixels on a line from p0 to p1.
pub fn get_line_points(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = (p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::with_capacity((dx.max(dy) + 1) as usize);

    loop {
        points.push(Position::new(x, y));
        if x == p1.x && y == p1.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Draws the line with a `stroke_width × stroke_width` block on every step.
pub fn rasterize_line(bmp: &mut PixelBitmap, p0: Position, p1: Position, stroke_width: i32) {
    let half = stroke_width / 2;
    for pt in get_line_points(p0, p1) {
        for i in -half..(stroke_width - half) {
            for j in -half..(stroke_width - half) {
                bmp.set_pixel(pt.x + i, pt.y + j);
            }
        }
    }
}

/// Snapped pixel position of `cell` relative to the bounding box origin, unrounded.
fn endpoint_px(cell: Position, origin: Position, frac: (f64, f64)) -> (f64, f64) {
    (
        (f64::from(cell.x) - f64::from(origin.x)) * CELL_WIDTH as f64 + frac.0 * CELL_WIDTH as f64,
        (f64::from(cell.y) - f64::from(origin.y)) * CELL_HEIGHT as f64 + frac.1 * CELL_HEIGHT as f64,
    )
}

/// Clips the segment `p0 → p1` to the box `min..=max` (Liang–Barsky).
///
/// `None` if the segment misses the box.
pub fn clip_segment(p0: (f64, f64), p1: (f64, f64), min: (f64, f64), max: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
    let dx = p1.0 - p0.0;
    let dy = p1.1 - p0.1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [(-dx, p0.0 - min.0), (dx, max.0 - p0.0), (-dy, p0.1 - min.1), (dy, max.1 - p0.1)] {
        if p.abs() < f64::EPSILON {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some(((p0.0 + t0 * dx, p0.1 + t0 * dy), (p0.0 + t1 * dx, p0.1 + t1 * dy)))
}

fn is_within(p: (f64, f64), min: (f64, f64), max: (f64, f64)) -> bool {
    p.0 >= min.0 && p.0 <= max.0 && p.1 >= min.1 && p.1 <= max.1
}

/// A line from `anchor` to `current` as dots inside `bbox`.
///
/// Endpoints may lie anywhere, even far outside the grid. The segment is
/// clipped to the bitmap plus a stroke wide margin before it is stepped, so
/// only pixels that can reach the bitmap are ever visited.
pub fn line_dots(bbox: Rectangle, anchor: Position, current: Position, anchor_frac: Option<(f64, f64)>, stroke_width: i32, max_dist_px: f64) -> DotMap {
    let frac = snap_fraction(anchor_frac);
    let mut start = endpoint_px(anchor, bbox.top_left(), frac);
    let mut end = endpoint_px(current, bbox.top_left(), frac);

    let mut bmp = PixelBitmap::for_cells(bbox);
    let margin = f64::from(stroke_width.max(1));
    let min = (-margin, -margin);
    let max = (f64::from(bmp.width() - 1) + margin, f64::from(bmp.height() - 1) + margin);
    if !is_within(start, min, max) || !is_within(end, min, max) {
        let Some((clipped_start, clipped_end)) = clip_segment(start, end, min, max) else {
            return DotMap::new();
        };
        start = clipped_start;
        end = clipped_end;
    }

    let to_px = |p: (f64, f64)| Position::new(round_px(p.0), round_px(p.1));
    rasterize_line(&mut bmp, to_px(start), to_px(end), stroke_width);
    bmp.to_dots_map(bbox, max_dist_px)
}
