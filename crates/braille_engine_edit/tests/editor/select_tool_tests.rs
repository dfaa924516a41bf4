//! Select tool pointer handling

use braille_engine::{Cell, Origin, Position};
use braille_engine_edit::{KeyModifiers, Tool, UndoState};

use crate::helpers::{centre, editor};

#[test]
fn test_area_drag_selects_rectangle() {
    let mut state = editor(6, 6, Tool::Select);
    let (x, y) = centre(1, 1);
    assert!(state.pointer_down(x, y, KeyModifiers::empty()));
    let (x, y) = centre(3, 2);
    assert!(state.pointer_move(x, y));
    assert!(state.pointer_up(x, y));

    assert_eq!(state.selection().len(), 6);
    assert!(state.selection().is_active(Position::new(3, 2)));
    assert!(!state.selection().is_selecting());
}

#[test]
fn test_area_drag_clamps_to_grid() {
    let mut state = editor(4, 4, Tool::Select);
    let (x, y) = centre(2, 2);
    state.pointer_down(x, y, KeyModifiers::empty());
    state.pointer_move(500.0, 500.0);
    state.pointer_up(500.0, 500.0);
    assert_eq!(state.selection().len(), 4);
    assert!(state.selection().is_active(Position::new(3, 3)));
}

#[test]
fn test_shift_adds_and_ctrl_toggles() {
    let mut state = editor(6, 6, Tool::Select);
    let (x, y) = centre(0, 0);
    state.pointer_down(x, y, KeyModifiers::empty());
    state.pointer_up(x, y);

    let (x, y) = centre(4, 4);
    state.pointer_down(x, y, KeyModifiers::SHIFT);
    let (x, y) = centre(5, 4);
    state.pointer_move(x, y);
    state.pointer_up(x, y);
    assert_eq!(state.selection().len(), 3);

    let (x, y) = centre(0, 0);
    assert!(state.pointer_down(x, y, KeyModifiers::CTRL));
    state.pointer_up(x, y);
    assert!(!state.selection().is_active(Position::new(0, 0)));
    assert_eq!(state.selection().len(), 2);
}

#[test]
fn test_dragging_selection_commits_one_move() {
    let mut state = editor(6, 3, Tool::Select);
    assert!(state.insert_text_at(1, 1, "k"));
    let (x, y) = centre(1, 1);
    state.pointer_down(x, y, KeyModifiers::empty());
    state.pointer_up(x, y);
    let history_len = state.history().len();

    // pressing on the selected cell drags it
    state.pointer_down(x, y, KeyModifiers::empty());
    assert!(state.selection().is_dragging());
    let (x, y) = centre(4, 0);
    assert!(state.pointer_move(x, y));
    assert_eq!(state.grid().cell(Position::new(1, 1)).letter, 'k');
    assert!(state.pointer_up(x, y));

    assert_eq!(state.grid().cell(Position::new(4, 0)).letter, 'k');
    assert!(state.grid().cell(Position::new(1, 1)).is_empty());
    assert_eq!(state.history().len(), history_len + 1);
    assert_eq!(state.selection().single_cell(), Some(Position::new(4, 0)));

    assert!(state.undo());
    assert_eq!(state.grid().cell(Position::new(1, 1)).letter, 'k');
}

#[test]
fn test_pointer_leave_cancels_drag() {
    let mut state = editor(4, 4, Tool::Select);
    let mut grid = state.grid().clone();
    grid.set(Position::new(0, 0), Cell::from_letter('z', Origin::Manual));
    state.replace_grid(grid, "Load");
    state.selection_mut().select_cell(0, 0, false);

    let (x, y) = centre(0, 0);
    state.pointer_down(x, y, KeyModifiers::empty());
    let (x, y) = centre(2, 2);
    state.pointer_move(x, y);
    assert!(state.pointer_leave());
    assert!(!state.pointer_up(x, y));
    assert_eq!(state.grid().cell(Position::new(0, 0)).letter, 'z');
    assert!(state.grid().cell(Position::new(2, 2)).is_empty());
}

#[test]
fn test_drawing_tools_drop_selection() {
    let mut state = editor(4, 4, Tool::Select);
    state.selection_mut().select_cell(1, 1, false);
    state.set_tool(Tool::Pencil);
    assert!(state.selection().is_empty());
}
