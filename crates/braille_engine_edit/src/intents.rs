//! Keyboard intents
//!
//! Front ends translate key presses into an [`Intent`] with [`Intent::from_key`]
//! and hand it to `BrailleEditState::handle_intent`. The mapping needs a small
//! amount of editor context, since several keys only mean something while a
//! selection, a clipboard or a shape preview exists.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::selection::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    Delete,
    ClearSelection,
    MoveSelection(Direction),
    /// Open the cell editor on the selected cell.
    EnterEdit,
    ConfirmShape,
    CancelShape,
    /// Switch between the dot view and the letter view.
    ToggleView,
    /// Copy the grid as plain letters.
    CopyLetters,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Undo => "Undo",
            Intent::Redo => "Redo",
            Intent::Copy => "Copy",
            Intent::Cut => "Cut",
            Intent::Paste => "Paste",
            Intent::Delete => "Delete",
            Intent::ClearSelection => "Clear selection",
            Intent::MoveSelection(_) => "Move selection",
            Intent::EnterEdit => "Edit cell",
            Intent::ConfirmShape => "Confirm shape",
            Intent::CancelShape => "Cancel shape",
            Intent::ToggleView => "Toggle view",
            Intent::CopyLetters => "Copy letters",
        }
    }

    /// Maps a key press to an intent. `None` if the key means nothing right now.
    pub fn from_key(key: Key, modifiers: KeyModifiers, context: IntentContext) -> Option<Intent> {
        if modifiers.intersects(KeyModifiers::CTRL | KeyModifiers::META) {
            let Key::Char(ch) = key else {
                return None;
            };
            let shift = modifiers.contains(KeyModifiers::SHIFT);
            return match ch.to_ascii_lowercase() {
                'z' if shift => context.can_redo.then_some(Intent::Redo),
                'z' => context.can_undo.then_some(Intent::Undo),
                'y' => context.can_redo.then_some(Intent::Redo),
                'c' if shift => Some(Intent::CopyLetters),
                'c' => context.has_selection.then_some(Intent::Copy),
                'v' => context.has_clipboard.then_some(Intent::Paste),
                'x' => context.has_selection.then_some(Intent::Cut),
                '`' => Some(Intent::ToggleView),
                _ => None,
            };
        }

        match key {
            Key::Escape if context.is_placing_shape => Some(Intent::CancelShape),
            Key::Escape => context.has_selection.then_some(Intent::ClearSelection),
            Key::Enter if context.is_placing_shape => Some(Intent::ConfirmShape),
            Key::Enter => context.has_selection.then_some(Intent::EnterEdit),
            Key::Delete | Key::Backspace => context.has_selection.then_some(Intent::Delete),
            Key::Arrow(direction) => context.has_selection.then_some(Intent::MoveSelection(direction)),
            Key::Char(_) => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Delete,
    Backspace,
    Arrow(Direction),
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// Editor state the key mapping depends on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IntentContext {
    pub can_undo: bool,
    pub can_redo: bool,
    pub has_selection: bool,
    pub has_clipboard: bool,
    pub is_placing_shape: bool,
}
