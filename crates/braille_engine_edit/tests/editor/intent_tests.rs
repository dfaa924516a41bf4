//! Keyboard intents through the edit state

use braille_engine::{Dots, Position};
use braille_engine_edit::{Direction, Intent, Key, KeyModifiers, LineEnding, Tool, UndoState};
use pretty_assertions::assert_eq;

use crate::helpers::editor;

#[test]
fn test_copy_paste_targets_single_cell() {
    let mut state = editor(5, 3, Tool::Select);
    state.insert_text_at(0, 0, "ab");
    state.selection_mut().set_selected([Position::new(0, 0), Position::new(1, 0)]);
    assert!(state.handle_intent(Intent::Copy));
    assert!(state.clipboard().is_some());

    state.selection_mut().select_cell(2, 2, false);
    assert_eq!(state.paste_target(), Position::new(2, 2));
    assert!(state.handle_intent(Intent::Paste));
    assert_eq!(state.grid().cell(Position::new(2, 2)).letter, 'a');
    assert_eq!(state.grid().cell(Position::new(3, 2)).letter, 'b');
}

#[test]
fn test_paste_target_fallbacks() {
    let mut state = editor(5, 3, Tool::Select);
    assert_eq!(state.paste_target(), Position::new(0, 0));
    state.selection_mut().set_selected([Position::new(3, 2), Position::new(1, 1)]);
    assert_eq!(state.paste_target(), Position::new(1, 1));
    assert!(!state.handle_intent(Intent::Paste));
}

#[test]
fn test_cut_delete_and_undo() {
    let mut state = editor(4, 2, Tool::Select);
    state.insert_text_at(0, 0, "abcd");
    state.selection_mut().select_cell(1, 0, false);
    assert!(state.handle_intent(Intent::Cut));
    assert!(state.grid().cell(Position::new(1, 0)).is_empty());
    assert!(state.selection().is_empty());

    state.selection_mut().select_cell(2, 0, false);
    assert!(state.handle_intent(Intent::Delete));
    assert!(!state.handle_intent(Intent::Delete));
    assert_eq!(state.undo_description().as_deref(), Some("Delete"));

    assert!(state.handle_intent(Intent::Undo));
    assert!(state.handle_intent(Intent::Undo));
    assert_eq!(state.grid().cell(Position::new(1, 0)).letter, 'b');
    assert!(state.handle_intent(Intent::Redo));
    assert!(state.grid().cell(Position::new(1, 0)).is_empty());
}

#[test]
fn test_new_edit_drops_redo_tail() {
    let mut state = editor(3, 1, Tool::Select);
    state.edit_cell(0, 0, Dots::DOT1);
    state.edit_cell(1, 0, Dots::DOT1);
    state.undo();
    assert!(state.can_redo());
    state.edit_cell(2, 0, Dots::DOT1);
    assert!(!state.can_redo());
    assert!(state.grid().cell(Position::new(1, 0)).is_empty());
}

#[test]
fn test_move_selection_intent() {
    let mut state = editor(5, 5, Tool::Select);
    state.edit_cell(2, 2, Dots::DOT1 | Dots::DOT2);
    state.selection_mut().select_cell(2, 2, false);
    for _ in 0..3 {
        state.handle_intent(Intent::MoveSelection(Direction::Right));
    }
    assert_eq!(state.selection().single_cell(), Some(Position::new(4, 2)));
    assert_eq!(state.grid().cell(Position::new(4, 2)).letter, 'b');
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_view_edit_and_letters() {
    let mut state = editor(3, 2, Tool::Select);
    state.set_line_ending(LineEnding::Lf);
    state.insert_text_at(0, 0, "hi");

    assert!(state.handle_intent(Intent::ToggleView));
    assert!(state.show_letters());

    assert!(!state.handle_intent(Intent::EnterEdit));
    state.selection_mut().select_cell(1, 0, false);
    assert!(state.handle_intent(Intent::EnterEdit));
    assert_eq!(state.take_edit_request(), Some(Position::new(1, 0)));
    assert_eq!(state.take_edit_request(), None);

    assert!(state.handle_intent(Intent::CopyLetters));
    assert_eq!(state.copied_letters(), Some("hi \n   "));
    assert_eq!(state.export_bytes(b'?'), b"hi \n   ".to_vec());
}

#[test]
fn test_key_mapping_uses_editor_context() {
    let mut state = editor(3, 3, Tool::Select);
    let ctrl = KeyModifiers::CTRL;
    assert_eq!(Intent::from_key(Key::Char('z'), ctrl, state.intent_context()), None);
    state.edit_cell(0, 0, Dots::DOT1);
    assert_eq!(Intent::from_key(Key::Char('z'), ctrl, state.intent_context()), Some(Intent::Undo));
    assert_eq!(Intent::from_key(Key::Char('c'), ctrl, state.intent_context()), None);
    state.selection_mut().select_cell(0, 0, false);
    let intent = Intent::from_key(Key::Char('c'), ctrl, state.intent_context()).unwrap();
    assert!(state.handle_intent(intent));
    assert!(state.intent_context().has_clipboard);
}
