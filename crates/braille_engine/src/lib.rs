#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::too_many_lines,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::struct_excessive_bools,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
use std::cmp::min;

mod error;
pub use error::*;

mod position;
pub use position::*;

mod dots;
pub use dots::*;

mod cell;
pub use cell::*;

mod grid;
pub use grid::*;

pub mod braille_table;
pub use braille_table::{digit_to_letter, dots_to_letter, letter_to_dots};

pub mod export;
pub use export::LineEnding;
pub mod image_import;

/// Logical pixels per cell, horizontally. Shared with whatever renders the grid.
pub const CELL_WIDTH: i32 = 20;
/// Logical pixels per cell, vertically.
pub const CELL_HEIGHT: i32 = 30;

/// Dot centres as fractions of the cell size, indexed by `dot number - 1`.
pub const DOT_POSITIONS: [(f64, f64); 6] = [(0.3, 0.2), (0.3, 0.5), (0.3, 0.8), (0.7, 0.2), (0.7, 0.5), (0.7, 0.8)];

/// Converts a logical pixel coordinate into the cell containing it.
///
/// Negative coordinates map to negative cells; callers check bounds.
pub fn pixel_to_cell(px: f64, py: f64) -> Position {
    Position::new((px / CELL_WIDTH as f64).floor() as i32, (py / CELL_HEIGHT as f64).floor() as i32)
}

/// The position of a pixel inside its cell as `(0..1, 0..1)` fractions.
pub fn cell_fraction(px: f64, py: f64) -> (f64, f64) {
    let fx = px / CELL_WIDTH as f64;
    let fy = py / CELL_HEIGHT as f64;
    (fx - fx.floor(), fy - fy.floor())
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    pub fn is_inside(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }
}

impl From<(usize, usize)> for Size {
    fn from(value: (usize, usize)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from(value: (u32, u32)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

/// A block of cells. `size` counts cells, so `bottom_right()` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn new(start: Position, size: Size) -> Self {
        Self { start, size }
    }

    pub fn from(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            start: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// The smallest rectangle covering both cells, inclusive.
    pub fn from_pt(p1: Position, p2: Position) -> Self {
        let start = Position::new(min(p1.x, p2.x), min(p1.y, p2.y));
        Rectangle {
            start,
            size: Size::new((p1.x - p2.x).abs() + 1, (p1.y - p2.y).abs() + 1),
        }
    }

    pub fn top_left(&self) -> Position {
        self.start
    }

    pub fn bottom_right(&self) -> Position {
        Position {
            x: self.start.x + self.size.width,
            y: self.start.y + self.size.height,
        }
    }

    /// Last cell inside the rectangle.
    pub fn last_cell(&self) -> Position {
        Position::new(self.start.x + self.size.width - 1, self.start.y + self.size.height - 1)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.start.x <= x && x < self.start.x + self.size.width && self.start.y <= y && y < self.start.y + self.size.height
    }

    pub fn contains_pt(&self, point: Position) -> bool {
        self.contains(point.x, point.y)
    }

    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        !other.is_empty() && self.contains_pt(other.start) && self.contains_pt(other.last_cell())
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let min = self.start.max(other.start);
        let max = self.bottom_right().min(other.bottom_right());
        Rectangle {
            start: min,
            size: Size::new((max.x - min.x).max(0), (max.y - min.y).max(0)),
        }
    }

    pub fn translated(&self, offset: Position) -> Rectangle {
        Rectangle {
            start: self.start + offset,
            size: self.size,
        }
    }

    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.start.x..self.bottom_right().x
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.start.y..self.bottom_right().y
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn right(&self) -> i32 {
        self.bottom_right().x
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_right().y
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.y_range().flat_map(move |y| self.x_range().map(move |x| Position::new(x, y)))
    }
}
