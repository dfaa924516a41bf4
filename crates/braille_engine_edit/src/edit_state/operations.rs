//! Direct edits that do not come from a pointer gesture

use braille_engine::{Dots, Grid, Origin, Position, Result, export::export_grid};

use crate::grid_operations::{clear_cell, flood_fill, set_cell, write_text_to_grid};

use super::BrailleEditState;

impl BrailleEditState {
    /// Types `text` at the text cursor.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let Some(cursor) = self.text_cursor else {
            return false;
        };
        self.insert_text_at(cursor.x, cursor.y, text)
    }

    pub fn insert_text_at(&mut self, x: i32, y: i32, text: &str) -> bool {
        if text.is_empty() || !self.grid.is_inside(Position::new(x, y)) {
            return false;
        }
        let grid = write_text_to_grid(&self.grid, x, y, text);
        if grid == self.grid {
            return false;
        }
        self.commit(grid, "Insert text")
    }

    /// Applies the cell editor's result.
    pub fn edit_cell(&mut self, x: i32, y: i32, dots: Dots) -> bool {
        match set_cell(&self.grid, x, y, dots, Origin::Manual) {
            Some(grid) => self.commit(grid, "Edit cell"),
            None => false,
        }
    }

    pub fn clear_cell(&mut self, x: i32, y: i32) -> bool {
        match clear_cell(&self.grid, x, y) {
            Some(grid) => self.commit(grid, "Clear cell"),
            None => false,
        }
    }

    /// Flood fills with the current fill pattern.
    pub fn fill_at(&mut self, x: i32, y: i32) -> bool {
        match flood_fill(&self.grid, x, y, self.fill_pattern) {
            Some(grid) => self.commit(grid, "Fill"),
            None => false,
        }
    }

    /// Replaces the whole drawing, e.g. with an imported image.
    pub fn replace_grid(&mut self, grid: Grid, description: impl Into<String>) -> bool {
        self.interrupt();
        if grid.size() != self.grid.size() {
            self.selection.clear_selection();
        }
        self.commit(grid, description)
    }

    /// Changes the grid size, keeping the cells that still fit.
    ///
    /// # Errors
    ///
    /// Fails unless both dimensions are positive.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<bool> {
        if width == self.grid.width() && height == self.grid.height() {
            return Ok(false);
        }
        let mut grid = Grid::new(width, height)?;
        for (y, row) in self.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                grid.set(Position::new(x as i32, y as i32), *cell);
            }
        }
        self.interrupt();
        self.selection.clear_selection();
        self.text_cursor = None;
        Ok(self.commit(grid, format!("Resize to {width}x{height}")))
    }

    /// The drawing in the embosser's one byte per letter format.
    pub fn export_bytes(&self, fallback: u8) -> Vec<u8> {
        export_grid(&self.grid, self.line_ending, fallback)
    }
}
