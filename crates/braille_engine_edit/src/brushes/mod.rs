//! Shape rasterizer for braille drawings
//!
//! Turns a shape kind and two corner cells into the dots each cell of the
//! shape's bounding box should raise. Everything here is pure: the result is a
//! [`DotMap`] that is written into a grid by
//! [`apply_dots_map_to_grid`](crate::grid_operations::apply_dots_map_to_grid).
//!
//! # Algorithms
//! - Rectangle: stroke band on a logical pixel bitmap, then proximity sampling
//! - Line: Bresenham with stroke width on the bitmap, endpoints snapped to a dot column/row
//! - Circle: radial distance of every dot to the ellipse, with left/right thinning
//! - Triangle: fixed per-cell patterns along the interpolated edges
//!
//! # Example
//! ```
//! use braille_engine::Position;
//! use braille_engine_edit::brushes::{ShapeKind, ShapeParams, shape_to_dots_map};
//!
//! let map = shape_to_dots_map(ShapeKind::Circle, Position::new(0, 0), Position::new(1, 0), 10, 10, &ShapeParams::default());
//! assert_eq!(map.len(), 2);
//! ```

mod bitmap;
pub mod ellipse;
pub mod line;
pub mod rectangle;
pub mod triangle;

pub use bitmap::PixelBitmap;

use std::collections::BTreeMap;

use braille_engine::{CELL_HEIGHT, CELL_WIDTH, DOT_POSITIONS, Dots, Position, Rectangle};
use serde::{Deserialize, Serialize};

/// Cells and the dots they should get. Cells without dots are left out.
pub type DotMap = BTreeMap<Position, Dots>;

pub const DEFAULT_STROKE_WIDTH: i32 = 1;
pub const MAX_STROKE_WIDTH: i32 = 3;
/// Proximity radius for bitmap sampling, tuned for 20×30 px cells.
pub const DEFAULT_MAX_DIST_PX: f64 = 7.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Line,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Line => "line",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }
}

/// Optional rasterizer settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParams {
    /// Stroke width in logical pixels, clamped to `1..=3`.
    pub stroke_width: Option<i32>,
    /// Sampling radius in logical pixels.
    pub max_dist_px: Option<f64>,
    /// Where inside the anchor cell the shape was started (0..1, 0..1). Lines only.
    pub anchor_frac: Option<(f64, f64)>,
}

impl ShapeParams {
    pub fn with_anchor_frac(mut self, frac: (f64, f64)) -> Self {
        self.anchor_frac = Some(frac);
        self
    }

    pub fn stroke_width(&self) -> i32 {
        self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH).clamp(1, MAX_STROKE_WIDTH)
    }

    pub fn max_dist_px(&self) -> f64 {
        self.max_dist_px.unwrap_or(DEFAULT_MAX_DIST_PX)
    }
}

/// The bounding box spanned by two corner cells, clamped to the grid.
/// `None` if nothing of it lies inside.
pub fn shape_bounding_box(anchor: Position, current: Position, grid_width: i32, grid_height: i32) -> Option<Rectangle> {
    let x0 = anchor.x.min(current.x).max(0);
    let y0 = anchor.y.min(current.y).max(0);
    let x1 = anchor.x.max(current.x).min(grid_width - 1);
    let y1 = anchor.y.max(current.y).min(grid_height - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some(Rectangle::from_pt(Position::new(x0, y0), Position::new(x1, y1)))
}

/// Rasterizes `shape` between the `anchor` and `current` cells.
///
/// Corner order does not matter and corners outside the grid are clamped.
/// Only cells inside `grid_width × grid_height` ever appear in the result.
pub fn shape_to_dots_map(shape: ShapeKind, anchor: Position, current: Position, grid_width: i32, grid_height: i32, params: &ShapeParams) -> DotMap {
    let Some(bbox) = shape_bounding_box(anchor, current, grid_width, grid_height) else {
        return DotMap::new();
    };
    match shape {
        ShapeKind::Rectangle => rectangle::rectangle_dots(bbox, params.stroke_width(), params.max_dist_px()),
        ShapeKind::Line => line::line_dots(bbox, anchor, current, params.anchor_frac, params.stroke_width(), params.max_dist_px()),
        ShapeKind::Circle => ellipse::ellipse_dots(bbox, params.max_dist_px()),
        ShapeKind::Triangle => triangle::triangle_dots(bbox),
    }
}

/// Dot centre in pixels relative to the cell's top left corner, unrounded.
pub(crate) fn dot_offset(index: usize) -> (f64, f64) {
    let (fx, fy) = DOT_POSITIONS[index];
    (fx * CELL_WIDTH as f64, fy * CELL_HEIGHT as f64)
}

/// Rounds half up like the pixel grid does.
pub(crate) fn round_px(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
