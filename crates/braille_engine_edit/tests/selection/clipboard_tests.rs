//! Tests for copy, cut and paste

use braille_engine::{Cell, Position};
use braille_engine_edit::{
    clipboard::ClipboardData,
    selection::{Selection, paste_clipboard},
};
use pretty_assertions::assert_eq;

use crate::helpers::lettered_grid;

#[test]
fn test_copy_paste_at_source_reproduces_cells() {
    let grid = lettered_grid(6, 4);
    let mut selection = Selection::new();
    selection.select_cell(1, 1, false);
    selection.select_cell(3, 2, true);
    selection.select_cell(2, 1, true);

    let data = selection.copy_selected_cells(&grid).unwrap();
    assert_eq!((data.width, data.height), (3, 2));

    let mut blank = grid.clone();
    for pos in selection.selected() {
        blank.clear(*pos);
    }
    let pasted = paste_clipboard(&blank, &data, 1, 1);
    for pos in selection.selected() {
        assert_eq!(pasted.cell(*pos).dots, grid.cell(*pos).dots);
        assert_eq!(pasted.cell(*pos).letter, grid.cell(*pos).letter);
    }
}

#[test]
fn test_unselected_cells_in_box_are_placeholders() {
    let grid = lettered_grid(4, 4);
    let mut selection = Selection::new();
    selection.select_cell(0, 0, false);
    selection.select_cell(1, 1, true);

    let data = selection.copy_selected_cells(&grid).unwrap();
    assert_eq!(data.get(0, 0).map(|c| c.letter), Some('a'));
    assert_eq!(data.get(1, 0), Some(&Cell::EMPTY));
    assert_eq!(data.get(0, 1), Some(&Cell::EMPTY));
}

#[test]
fn test_paste_is_clipped_at_the_border() {
    let grid = lettered_grid(4, 3);
    let data = ClipboardData::from_selection(&grid, &(0..3).map(|x| Position::new(x, 0)).collect()).unwrap();
    let pasted = paste_clipboard(&grid, &data, 2, 2);
    assert_eq!(pasted.cell(Position::new(2, 2)).letter, 'a');
    assert_eq!(pasted.cell(Position::new(3, 2)).letter, 'b');
    assert_eq!(pasted.size(), grid.size());
    // nothing else changed
    assert_eq!(pasted.row(0), grid.row(0));
}

#[test]
fn test_cut_clears_and_drops_selection() {
    let grid = lettered_grid(3, 3);
    let mut selection = Selection::new();
    selection.select_cell(1, 1, false);

    let (data, cut) = selection.cut_selected_cells(&grid).unwrap();
    assert_eq!(data.get(0, 0), grid.get(Position::new(1, 1)));
    assert!(cut.cell(Position::new(1, 1)).is_empty());
    assert!(selection.is_empty());
    assert!(selection.cut_selected_cells(&cut).is_none());
}

#[test]
fn test_empty_selection_copies_nothing() {
    let grid = lettered_grid(3, 3);
    let selection = Selection::new();
    assert!(selection.copy_selected_cells(&grid).is_none());
}
