//! Keyboard intent dispatch

use braille_engine::{Position, export::grid_to_letters};

use crate::{
    history::UndoState,
    intents::{Intent, IntentContext},
    selection::paste_clipboard,
};

use super::BrailleEditState;

impl BrailleEditState {
    /// What the key mapping needs to know about the editor right now.
    pub fn intent_context(&self) -> IntentContext {
        IntentContext {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            has_selection: !self.selection.is_empty(),
            has_clipboard: self.clipboard.as_ref().is_some_and(|c| !c.is_empty()),
            is_placing_shape: self.placement.is_placing(),
        }
    }

    /// Where a paste lands: the single selected cell, else the selection's
    /// top left, else the grid origin.
    pub fn paste_target(&self) -> Position {
        if let Some(cell) = self.selection.single_cell() {
            return cell;
        }
        self.selection.bounding_box().map_or_else(Position::default, |bbox| bbox.top_left())
    }

    /// Runs one intent. `true` when anything changed.
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        log::debug!("intent: {}", intent.name());
        match intent {
            Intent::Undo => self.undo(),
            Intent::Redo => self.redo(),
            Intent::Copy => match self.selection.copy_selected_cells(&self.grid) {
                Some(data) => {
                    self.clipboard = Some(data);
                    true
                }
                None => false,
            },
            Intent::Cut => match self.selection.cut_selected_cells(&self.grid) {
                Some((data, grid)) => {
                    self.clipboard = Some(data);
                    self.commit(grid, "Cut")
                }
                None => false,
            },
            Intent::Paste => {
                let Some(data) = self.clipboard.as_ref().filter(|c| !c.is_empty()) else {
                    return false;
                };
                let target = self.paste_target();
                let grid = paste_clipboard(&self.grid, data, target.x, target.y);
                self.commit(grid, "Paste")
            }
            Intent::Delete => match self.selection.delete_selected_cells(&self.grid) {
                Some(grid) => self.commit(grid, "Delete"),
                None => false,
            },
            Intent::ClearSelection => {
                if self.selection.is_empty() {
                    return false;
                }
                self.selection.clear_selection();
                true
            }
            Intent::MoveSelection(direction) => match self.selection.move_selection(&self.grid, direction) {
                Some(grid) => self.commit(grid, "Move selection"),
                None => false,
            },
            Intent::EnterEdit => {
                let Some(cell) = self.selection.single_cell() else {
                    return false;
                };
                self.edit_request = Some(cell);
                true
            }
            Intent::ConfirmShape => self.confirm_shape(),
            Intent::CancelShape => {
                if !self.placement.is_placing() {
                    return false;
                }
                self.placement.cancel();
                true
            }
            Intent::ToggleView => {
                self.show_letters = !self.show_letters;
                true
            }
            Intent::CopyLetters => {
                self.copied_letters = Some(grid_to_letters(&self.grid, self.line_ending));
                true
            }
        }
    }

    /// Writes the pending shape into the grid as one undo step.
    pub fn confirm_shape(&mut self) -> bool {
        let name = self.placement.shape().map(|shape| shape.name());
        match (self.placement.confirm(&self.grid), name) {
            (Some(grid), Some(name)) => self.commit(grid, format!("Draw {name}")),
            _ => false,
        }
    }
}
