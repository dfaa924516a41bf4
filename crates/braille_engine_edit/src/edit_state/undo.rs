//! Commit and undo/redo
//!
//! Every finished edit lands here as one history entry. Undo and redo drop
//! whatever gesture is running first, so a half drawn preview never survives
//! into a restored grid.

use braille_engine::Grid;

use crate::{drawing::StrokeMode, history::UndoState};

use super::BrailleEditState;

impl BrailleEditState {
    /// Makes `grid` the working grid and records it as one undo step.
    pub(crate) fn commit(&mut self, grid: Grid, description: impl Into<String>) -> bool {
        let description = description.into();
        log::debug!("commit: {description}");
        self.grid = grid.clone();
        self.history.push(grid, description);
        self.is_dirty = true;
        true
    }

    /// Ends a freehand stroke, committing it if it changed anything.
    pub(crate) fn finish_stroke(&mut self) -> bool {
        let Some(mode) = self.stroke.mode() else {
            return false;
        };
        self.stroke.finish();
        if self.grid == *self.history.current() {
            return false;
        }
        let description = match mode {
            StrokeMode::Paint => "Draw dots",
            StrokeMode::Erase => "Erase dots",
        };
        self.commit(self.grid.clone(), description)
    }

    /// Throws a running freehand stroke away, restoring the last committed grid.
    pub(crate) fn cancel_stroke(&mut self) {
        if self.stroke.is_drawing() {
            self.stroke.cancel();
            self.grid = self.history.current().clone();
        }
    }

    /// Starts over with `grid`, forgetting all history.
    pub fn reset(&mut self, grid: Grid) {
        self.interrupt();
        self.selection.clear_selection();
        self.history.reset(grid.clone());
        self.grid = grid;
        self.is_dirty = false;
    }

    fn restore_current(&mut self) {
        self.cancel_stroke();
        self.placement.cancel();
        self.selection.cancel_drag();
        self.grid = self.history.current().clone();
        self.is_dirty = true;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for BrailleEditState {
    fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn undo(&mut self) -> bool {
        // an unfinished stroke is not in the history yet; undo just drops it
        if self.stroke.is_drawing() && self.grid != *self.history.current() {
            self.cancel_stroke();
            return true;
        }
        if self.history.undo().is_none() {
            return false;
        }
        self.restore_current();
        true
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn redo(&mut self) -> bool {
        if self.history.redo().is_none() {
            return false;
        }
        self.restore_current();
        true
    }
}
