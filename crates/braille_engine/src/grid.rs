use std::sync::Arc;

use crate::{Cell, EngineError, Position, Rectangle, Result, Size};

/// A row-major grid of braille cells.
///
/// Rows are reference counted, so cloning is cheap and a mutation only copies
/// the rows it touches. Snapshots kept elsewhere (undo history) never observe
/// writes made through another clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGridSize`] unless both dimensions are positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidGridSize { width, height });
        }
        let row = Arc::new(vec![Cell::EMPTY; width as usize]);
        Ok(Grid {
            width,
            height,
            rows: vec![row; height as usize],
        })
    }

    /// Builds a grid from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGridSize`] if there are no rows or the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, Vec::len) as i32;
        if width == 0 || rows.iter().any(|r| r.len() as i32 != width) {
            return Err(EngineError::InvalidGridSize { width, height });
        }
        Ok(Grid {
            width,
            height,
            rows: rows.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(Position::default(), self.size())
    }

    pub fn is_inside(&self, pos: Position) -> bool {
        self.size().is_inside(pos)
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if !self.is_inside(pos) {
            return None;
        }
        Some(&self.rows[pos.y as usize][pos.x as usize])
    }

    /// Cell at `pos`, or an empty cell when outside.
    pub fn cell(&self, pos: Position) -> Cell {
        self.get(pos).copied().unwrap_or_default()
    }

    /// Overwrites one cell. Out of bounds writes are ignored and return `false`.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        if !self.is_inside(pos) {
            return false;
        }
        Arc::make_mut(&mut self.rows[pos.y as usize])[pos.x as usize] = cell;
        true
    }

    /// Resets one cell to empty.
    pub fn clear(&mut self, pos: Position) -> bool {
        self.set(pos, Cell::EMPTY)
    }

    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if y < 0 || y >= self.height {
            return None;
        }
        Some(self.rows[y as usize].as_slice())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// True if row `y` is still the same allocation in both grids.
    pub fn shares_row(&self, other: &Grid, y: i32) -> bool {
        if y < 0 || y >= self.height || y >= other.height {
            return false;
        }
        Arc::ptr_eq(&self.rows[y as usize], &other.rows[y as usize])
    }

    pub fn is_empty(&self) -> bool {
        self.rows().all(|row| row.iter().all(Cell::is_empty))
    }

    /// Renders the grid with Unicode braille patterns, one line per row.
    pub fn to_unicode_string(&self) -> String {
        let mut result = String::with_capacity(((self.width + 1) * self.height) as usize * 3);
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                result.push('\n');
            }
            result.extend(row.iter().map(|c| c.dots.to_unicode()));
        }
        result
    }
}
