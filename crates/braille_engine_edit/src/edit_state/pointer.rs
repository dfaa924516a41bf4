//! Pointer routing
//!
//! Coordinates are logical pixels, independent of zoom. A pointer down always
//! ends the gesture that was running before it.
//!
//! | Tool            | down                     | move           | up              | leave                 |
//! |-----------------|--------------------------|----------------|-----------------|-----------------------|
//! | Select          | drag / area / toggle     | extend         | apply drag      | drop drag, end area   |
//! | Pencil, Eraser  | start stroke             | paint / erase  | commit stroke   | commit stroke         |
//! | Shapes          | anchor (restarts)        | resize preview | lock preview    | drop unless locked    |
//! | Fill            | flood fill               |                |                 |                       |
//! | Text            | place text cursor        |                |                 |                       |

use braille_engine::pixel_to_cell;

use crate::{
    drawing::{StrokeMode, dot_at_pixel},
    grid_operations::clear_cell,
    intents::KeyModifiers,
    tools::Tool,
};

use super::BrailleEditState;

impl BrailleEditState {
    /// Returns `true` when the working grid, the selection or a preview changed.
    pub fn pointer_down(&mut self, px: f64, py: f64, modifiers: KeyModifiers) -> bool {
        self.interrupt();
        let size = self.grid.size();

        match self.tool {
            Tool::Select => {
                let toggle = modifiers.intersects(KeyModifiers::CTRL | KeyModifiers::META);
                let add = modifiers.contains(KeyModifiers::SHIFT);
                if toggle {
                    let cell = pixel_to_cell(px, py);
                    if !size.is_inside(cell) {
                        return false;
                    }
                    self.selection.select_cell(cell.x, cell.y, true);
                    return true;
                }
                if !add && self.selection.start_drag(px, py) {
                    return true;
                }
                self.selection.start_selection(px, py, add, size)
            }
            Tool::Pencil | Tool::Eraser => {
                let mode = if self.tool == Tool::Pencil { StrokeMode::Paint } else { StrokeMode::Erase };
                if !size.is_inside(pixel_to_cell(px, py)) {
                    return false;
                }
                if let Some(grid) = self.stroke.start(&self.grid, px, py, mode) {
                    self.grid = grid;
                    return true;
                }
                // an eraser click away from any dot wipes the whole cell
                if mode == StrokeMode::Erase && dot_at_pixel(px, py, size).is_none() {
                    let cell = pixel_to_cell(px, py);
                    if let Some(grid) = clear_cell(&self.grid, cell.x, cell.y) {
                        self.grid = grid;
                        return true;
                    }
                }
                false
            }
            Tool::Line | Tool::Rectangle | Tool::Circle | Tool::Triangle => {
                let Some(shape) = self.tool.shape_kind() else {
                    return false;
                };
                self.placement.begin(px, py, shape, size)
            }
            Tool::Fill => {
                let cell = pixel_to_cell(px, py);
                self.fill_at(cell.x, cell.y)
            }
            Tool::Text => {
                let cell = pixel_to_cell(px, py);
                if !size.is_inside(cell) {
                    return false;
                }
                self.text_cursor = Some(cell);
                true
            }
        }
    }

    pub fn pointer_move(&mut self, px: f64, py: f64) -> bool {
        let size = self.grid.size();
        match self.tool {
            Tool::Select => {
                if self.selection.is_dragging() {
                    self.selection.update_drag(px, py)
                } else {
                    self.selection.update_selection(px, py, size)
                }
            }
            Tool::Pencil | Tool::Eraser => match self.stroke.continue_stroke(&self.grid, px, py) {
                Some(grid) => {
                    self.grid = grid;
                    true
                }
                None => false,
            },
            Tool::Line | Tool::Rectangle | Tool::Circle | Tool::Triangle => self.placement.update(px, py, size),
            Tool::Fill | Tool::Text => false,
        }
    }

    pub fn pointer_up(&mut self, _px: f64, _py: f64) -> bool {
        match self.tool {
            Tool::Select => {
                if self.selection.is_dragging() {
                    return match self.selection.finish_drag(&self.grid) {
                        Some(grid) => self.commit(grid, "Move selection"),
                        None => false,
                    };
                }
                if self.selection.is_selecting() {
                    self.selection.finish_selection();
                    return true;
                }
                false
            }
            Tool::Pencil | Tool::Eraser => self.finish_stroke(),
            Tool::Line | Tool::Rectangle | Tool::Circle | Tool::Triangle => self.placement.lock(),
            Tool::Fill | Tool::Text => false,
        }
    }

    /// The pointer left the canvas. A locked shape preview stays.
    pub fn pointer_leave(&mut self) -> bool {
        let mut changed = false;
        if self.selection.is_dragging() {
            self.selection.cancel_drag();
            changed = true;
        }
        if self.selection.is_selecting() {
            self.selection.finish_selection();
            changed = true;
        }
        if self.stroke.is_drawing() {
            self.finish_stroke();
            changed = true;
        }
        if self.placement.is_placing() && !self.placement.is_locked() {
            self.placement.cancel();
            changed = true;
        }
        changed
    }
}
