//! Braille edit state module structure
//!
//! - `state.rs` - Struct definition, constructors, getters, tool switching
//! - `pointer.rs` - Pointer down/move/up/leave routed per tool
//! - `intents.rs` - Keyboard intent dispatch
//! - `operations.rs` - Direct edits (text, fill, cell editor, resize, import)
//! - `undo.rs` - Commit and undo/redo

mod intents;
mod operations;
mod pointer;
mod state;
mod undo;

pub use state::BrailleEditState;
