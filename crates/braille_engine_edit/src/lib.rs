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

pub mod brushes;
pub mod clipboard;
pub mod drawing;
pub mod grid_operations;
pub mod history;
pub mod intents;
pub mod selection;
pub mod shape_placement;
pub mod tools;

mod edit_state;
pub use edit_state::BrailleEditState;

pub use brushes::{DotMap, ShapeKind, ShapeParams, shape_to_dots_map};
pub use clipboard::ClipboardData;
pub use history::{History, UndoState};
pub use intents::{Intent, IntentContext, Key, KeyModifiers};
pub use selection::{Direction, Selection};
pub use shape_placement::ShapePlacement;
pub use tools::Tool;

// Re-export the model so front ends only need this crate
pub use braille_engine::{
    CELL_HEIGHT, CELL_WIDTH, Cell, Dots, EngineError, Grid, LineEnding, Origin, Position, Rectangle, Result, Size, braille_table, export,
    image_import, pixel_to_cell,
};
