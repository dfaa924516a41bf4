//! Cell selection and block transforms
//!
//! The selection is an arbitrary set of cells held outside the grid; a cell
//! counts as active when it is in the set. Area drags always select a filled
//! rectangle, but toggling single cells can produce any sparse shape, so every
//! transform works from the set's bounding box.
//!
//! Moves are all or nothing: if any part of the bounding box would leave the
//! grid the whole move is rejected. Moves read from one snapshot and write into
//! a copy, so overlapping source and destination cells are never moved twice.

use std::collections::BTreeSet;

use braille_engine::{Grid, Position, Rectangle, Size, pixel_to_cell};
use serde::{Deserialize, Serialize};

use crate::clipboard::{self, ClipboardData};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn offset(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<Position>,

    is_selecting: bool,
    selection_start: Option<Position>,
    selection_end: Option<Position>,
    /// Cells selected before an additive area drag started.
    base_selection: BTreeSet<Position>,

    is_dragging: bool,
    drag_start: Option<Position>,
    drag_offset: Position,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &BTreeSet<Position> {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether the cell is highlighted as part of the selection.
    pub fn is_active(&self, pos: Position) -> bool {
        self.selected.contains(&pos)
    }

    pub fn is_selecting(&self) -> bool {
        self.is_selecting
    }

    pub fn selection_start(&self) -> Option<Position> {
        self.selection_start
    }

    pub fn selection_end(&self) -> Option<Position> {
        self.selection_end
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_start(&self) -> Option<Position> {
        self.drag_start
    }

    /// Current drag delta in cells. Not clamped; checked when the drag finishes.
    pub fn drag_offset(&self) -> Position {
        self.drag_offset
    }

    /// Bounding box of the selected cells.
    pub fn bounding_box(&self) -> Option<Rectangle> {
        clipboard::bounding_box(&self.selected)
    }

    /// The only selected cell, if exactly one is selected.
    pub fn single_cell(&self) -> Option<Position> {
        if self.selected.len() == 1 { self.selected.first().copied() } else { None }
    }

    /// Replaces the selected set, dropping any interaction in progress.
    pub fn set_selected(&mut self, cells: impl IntoIterator<Item = Position>) {
        self.clear_selection();
        self.selected = cells.into_iter().collect();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Area selection
    // ═══════════════════════════════════════════════════════════════════════

    /// Starts an area drag at the pixel. Outside the grid nothing happens.
    ///
    /// Without `add_to_selection` the previous selection is replaced; with it
    /// the dragged rectangle is added to what was selected before.
    pub fn start_selection(&mut self, px: f64, py: f64, add_to_selection: bool, grid_size: Size) -> bool {
        let cell = pixel_to_cell(px, py);
        if !grid_size.is_inside(cell) {
            return false;
        }
        self.cancel_drag();
        self.base_selection = if add_to_selection { std::mem::take(&mut self.selected) } else { BTreeSet::new() };
        self.is_selecting = true;
        self.selection_start = Some(cell);
        self.selection_end = Some(cell);
        self.selected = self.base_selection.clone();
        self.selected.insert(cell);
        true
    }

    /// Extends the area drag to the pixel, clamped into the grid.
    pub fn update_selection(&mut self, px: f64, py: f64, grid_size: Size) -> bool {
        if !self.is_selecting {
            return false;
        }
        let Some(start) = self.selection_start else {
            return false;
        };
        let end = pixel_to_cell(px, py).clamp_to(grid_size.width, grid_size.height);
        if self.selection_end == Some(end) {
            return false;
        }
        self.selection_end = Some(end);
        self.selected = self.base_selection.clone();
        self.selected.extend(Rectangle::from_pt(start, end).cells());
        true
    }

    pub fn finish_selection(&mut self) {
        self.is_selecting = false;
        self.base_selection.clear();
        if self.selected.is_empty() {
            self.selection_start = None;
            self.selection_end = None;
        }
    }

    /// Selects one cell. With `add_to_selection` the cell's membership is toggled.
    pub fn select_cell(&mut self, x: i32, y: i32, add_to_selection: bool) {
        let pos = Position::new(x, y);
        if add_to_selection {
            if !self.selected.remove(&pos) {
                self.selected.insert(pos);
            }
        } else {
            self.clear_selection();
            self.selected.insert(pos);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.base_selection.clear();
        self.is_selecting = false;
        self.selection_start = None;
        self.selection_end = None;
        self.cancel_drag();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Moving
    // ═══════════════════════════════════════════════════════════════════════

    /// True if the whole selection fits in the grid after shifting by `offset`.
    pub fn can_move_by(&self, offset: Position, grid_size: Size) -> bool {
        self.bounding_box().is_some_and(|bbox| {
            let x = i64::from(bbox.start.x) + i64::from(offset.x);
            let y = i64::from(bbox.start.y) + i64::from(offset.y);
            x >= 0 && y >= 0 && x + i64::from(bbox.width()) <= i64::from(grid_size.width) && y + i64::from(bbox.height()) <= i64::from(grid_size.height)
        })
    }

    /// Moves the selected cells by `offset` and selects them at their new place.
    ///
    /// `None` if the selection is empty or would leave the grid.
    pub fn move_by(&mut self, grid: &Grid, offset: Position) -> Option<Grid> {
        if !self.can_move_by(offset, grid.size()) {
            return None;
        }
        let mut result = grid.clone();
        for pos in &self.selected {
            result.clear(*pos);
        }
        for pos in &self.selected {
            result.set(*pos + offset, grid.cell(*pos));
        }
        self.selected = self.selected.iter().map(|pos| *pos + offset).collect();
        if let Some(start) = self.selection_start.as_mut() {
            *start += offset;
        }
        if let Some(end) = self.selection_end.as_mut() {
            *end += offset;
        }
        Some(result)
    }

    /// Nudges the selection one cell. Rejected as a whole at the grid border.
    pub fn move_selection(&mut self, grid: &Grid, direction: Direction) -> Option<Grid> {
        let result = self.move_by(grid, direction.offset());
        if result.is_none() && !self.selected.is_empty() {
            log::warn!("rejected moving {} cells {direction:?}, selection would leave the grid", self.selected.len());
        }
        result
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Dragging
    // ═══════════════════════════════════════════════════════════════════════

    /// Starts dragging the selection if the pixel lies on a selected cell.
    ///
    /// `false` means the press missed the selection.
    pub fn start_drag(&mut self, px: f64, py: f64) -> bool {
        let cell = pixel_to_cell(px, py);
        if !self.selected.contains(&cell) {
            return false;
        }
        self.is_dragging = true;
        self.drag_start = Some(cell);
        self.drag_offset = Position::default();
        true
    }

    /// Updates the drag preview offset. The grid is not touched.
    pub fn update_drag(&mut self, px: f64, py: f64) -> bool {
        if !self.is_dragging {
            return false;
        }
        let Some(start) = self.drag_start else {
            return false;
        };
        let offset = pixel_to_cell(px, py).saturating_sub(start);
        if offset == self.drag_offset {
            return false;
        }
        self.drag_offset = offset;
        true
    }

    /// Selected cells at their dragged position, for previews.
    pub fn drag_preview(&self) -> impl Iterator<Item = Position> + '_ {
        let offset = self.drag_offset;
        self.selected.iter().filter(|_| self.is_dragging).map(move |pos| pos.saturating_add(offset))
    }

    /// Applies the drag. A zero offset or a move leaving the grid discards it.
    pub fn finish_drag(&mut self, grid: &Grid) -> Option<Grid> {
        if !self.is_dragging {
            return None;
        }
        let offset = self.drag_offset;
        self.cancel_drag();
        if offset == Position::default() {
            return None;
        }
        let result = self.move_by(grid, offset);
        if result.is_none() {
            log::warn!("discarded drag by {offset}, selection would leave the grid");
        }
        result
    }

    pub fn cancel_drag(&mut self) {
        self.is_dragging = false;
        self.drag_start = None;
        self.drag_offset = Position::default();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Clipboard and deletion
    // ═══════════════════════════════════════════════════════════════════════

    pub fn copy_selected_cells(&self, grid: &Grid) -> Option<ClipboardData> {
        ClipboardData::from_selection(grid, &self.selected)
    }

    /// Copies, clears the selected cells and drops the selection.
    pub fn cut_selected_cells(&mut self, grid: &Grid) -> Option<(ClipboardData, Grid)> {
        let data = self.copy_selected_cells(grid)?;
        let result = self.delete_selected_cells(grid)?;
        Some((data, result))
    }

    /// Clears the selected cells and drops the selection.
    pub fn delete_selected_cells(&mut self, grid: &Grid) -> Option<Grid> {
        if self.selected.is_empty() {
            return None;
        }
        let mut result = grid.clone();
        for pos in &self.selected {
            result.clear(*pos);
        }
        self.clear_selection();
        Some(result)
    }
}

/// Writes `data` with its top left at `(target_x, target_y)`, dropping what falls outside.
pub fn paste_clipboard(grid: &Grid, data: &ClipboardData, target_x: i32, target_y: i32) -> Grid {
    if data.is_empty() {
        return grid.clone();
    }
    data.paste_into(grid, Position::new(target_x, target_y))
}
