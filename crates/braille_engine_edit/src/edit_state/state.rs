//! Braille Edit State
//!
//! The state container behind one drawing. It owns the working grid and
//! everything an interaction needs around it, so front ends only forward
//! pointer events and keyboard intents and read the result back.
//!
//! ## Working grid and history
//!
//! `grid()` is what should be rendered. Every finished edit goes through
//! `commit`, which pushes the new grid onto the history. Freehand strokes
//! change the working grid live and commit once when the stroke ends, so a
//! whole stroke undoes as one step.
//!
//! ## Previews
//!
//! Shape placement and selection drags never touch the grid until they are
//! confirmed; `shape_preview()` and `Selection::drag_preview()` describe what
//! would happen.

use braille_engine::{Dots, Grid, LineEnding, Position, Result, Size};

use crate::{
    brushes::DotMap,
    clipboard::ClipboardData,
    drawing::DrawingStroke,
    grid_operations::apply_dots_map_to_grid,
    history::History,
    selection::Selection,
    shape_placement::ShapePlacement,
    tools::Tool,
};

// ═══════════════════════════════════════════════════════════════════════════
// Braille Edit State
// ═══════════════════════════════════════════════════════════════════════════

pub struct BrailleEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Drawing
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) grid: Grid,
    pub(crate) history: History,
    pub(crate) is_dirty: bool,

    // ═══════════════════════════════════════════════════════════════════════
    // Interaction
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) tool: Tool,
    pub(crate) selection: Selection,
    pub(crate) clipboard: Option<ClipboardData>,
    pub(crate) placement: ShapePlacement,
    pub(crate) stroke: DrawingStroke,

    /// Cell where typed text goes (text tool).
    pub(crate) text_cursor: Option<Position>,
    /// Cell the front end should open its cell editor on.
    pub(crate) edit_request: Option<Position>,

    // ═══════════════════════════════════════════════════════════════════════
    // View & output
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) show_letters: bool,
    pub(crate) fill_pattern: Dots,
    pub(crate) line_ending: LineEnding,
    /// Result of the last "copy letters" intent.
    pub(crate) copied_letters: Option<String>,
}

impl BrailleEditState {
    /// # Errors
    ///
    /// Fails unless both dimensions are positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            history: History::new(grid.clone()),
            grid,
            is_dirty: false,
            tool: Tool::default(),
            selection: Selection::new(),
            clipboard: None,
            placement: ShapePlacement::default(),
            stroke: DrawingStroke::default(),
            text_cursor: None,
            edit_request: None,
            show_letters: false,
            fill_pattern: Dots::all(),
            line_ending: LineEnding::default(),
            copied_letters: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_size(&self) -> Size {
        self.grid.size()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_saved(&mut self) {
        self.is_dirty = false;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn clipboard(&self) -> Option<&ClipboardData> {
        self.clipboard.as_ref()
    }

    pub fn set_clipboard(&mut self, data: Option<ClipboardData>) {
        self.clipboard = data;
    }

    pub fn placement(&self) -> &ShapePlacement {
        &self.placement
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    pub fn text_cursor(&self) -> Option<Position> {
        self.text_cursor
    }

    /// Takes the pending cell editor request, if any.
    pub fn take_edit_request(&mut self) -> Option<Position> {
        self.edit_request.take()
    }

    pub fn show_letters(&self) -> bool {
        self.show_letters
    }

    pub fn fill_pattern(&self) -> Dots {
        self.fill_pattern
    }

    pub fn set_fill_pattern(&mut self, dots: Dots) {
        self.fill_pattern = dots;
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    pub fn copied_letters(&self) -> Option<&str> {
        self.copied_letters.as_deref()
    }

    pub fn set_stroke_width(&mut self, stroke_width: i32) {
        self.placement.set_stroke_width(Some(stroke_width));
    }

    pub fn set_max_dist_px(&mut self, max_dist_px: f64) {
        self.placement.set_max_dist_px(Some(max_dist_px));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tools
    // ═══════════════════════════════════════════════════════════════════════

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools, dropping any interaction in progress. Leaving the
    /// select tool also drops the selection.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.interrupt();
        if !tool.uses_selection() {
            self.selection.clear_selection();
        }
        if tool != Tool::Text {
            self.text_cursor = None;
        }
        log::debug!("tool {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
    }

    /// Handles a tool shortcut key (toggling within pencil / eraser).
    pub fn select_tool_by_shortcut(&mut self, key: char) -> bool {
        let Some(tool) = self.tool.from_shortcut(key) else {
            return false;
        };
        self.set_tool(tool);
        true
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Previews
    // ═══════════════════════════════════════════════════════════════════════

    /// Dots the pending shape would write.
    pub fn shape_preview(&self) -> DotMap {
        self.placement.preview(self.grid.size())
    }

    /// The working grid with the pending shape drawn in, for rendering.
    pub fn preview_grid(&self) -> Grid {
        let preview = self.shape_preview();
        if preview.is_empty() {
            return self.grid.clone();
        }
        apply_dots_map_to_grid(&self.grid, &preview, braille_engine::Origin::Automatic)
    }

    /// Ends whatever gesture is running: commits a freehand stroke, drops a
    /// shape placement and a selection drag.
    pub(crate) fn interrupt(&mut self) {
        self.finish_stroke();
        self.placement.cancel();
        self.selection.cancel_drag();
        if self.selection.is_selecting() {
            self.selection.finish_selection();
        }
    }
}
