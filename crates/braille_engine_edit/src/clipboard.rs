//! Dense rectangular cell clipboard

use std::collections::BTreeSet;

use braille_engine::{Cell, Grid, Position, Rectangle, Size};

/// Snapshot of a selection's bounding box.
///
/// Positions inside the box that were not selected hold empty cells, so a
/// sparse selection pastes back with its gaps cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardData {
    pub cells: Vec<Vec<Cell>>,
    pub width: i32,
    pub height: i32,
}

/// Smallest rectangle containing every position of `cells`.
pub fn bounding_box<'a>(cells: impl IntoIterator<Item = &'a Position>) -> Option<Rectangle> {
    let mut iter = cells.into_iter();
    let first = *iter.next()?;
    let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
    Some(Rectangle::from_pt(min, max))
}

impl ClipboardData {
    /// Builds clipboard data from rows of cells.
    ///
    /// Returns `None` for empty or ragged rows.
    pub fn new(cells: Vec<Vec<Cell>>) -> Option<Self> {
        let height = cells.len() as i32;
        let width = cells.first().map_or(0, Vec::len) as i32;
        if width == 0 || cells.iter().any(|row| row.len() as i32 != width) {
            log::warn!("rejecting malformed clipboard data with {height} rows");
            return None;
        }
        Some(Self { cells, width, height })
    }

    /// Copies the bounding box of `selected` out of `grid`. `None` for an empty selection.
    pub fn from_selection(grid: &Grid, selected: &BTreeSet<Position>) -> Option<Self> {
        let bbox = bounding_box(selected)?;
        let cells = bbox
            .y_range()
            .map(|y| {
                bbox.x_range()
                    .map(|x| {
                        let pos = Position::new(x, y);
                        if selected.contains(&pos) { grid.cell(pos) } else { Cell::EMPTY }
                    })
                    .collect()
            })
            .collect();
        Some(Self {
            cells,
            width: bbox.width(),
            height: bbox.height(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells.get(y as usize)?.get(x as usize)
    }

    /// Writes the clipboard with its top left at `target`. Cells landing
    /// outside the grid are dropped.
    pub fn paste_into(&self, grid: &Grid, target: Position) -> Grid {
        let mut result = grid.clone();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                result.set(target.saturating_add(Position::from((x, y))), *cell);
            }
        }
        result
    }
}
