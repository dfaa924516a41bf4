//! Tests for dragging selections

use braille_engine::Position;
use braille_engine_edit::selection::Selection;
use pretty_assertions::assert_eq;

use crate::helpers::{centre, lettered_grid};

#[test]
fn test_drag_out_of_bounds_leaves_grid_untouched() {
    let grid = lettered_grid(5, 5);
    let before = grid.clone();
    let mut selection = Selection::new();
    selection.select_cell(1, 1, false);
    selection.select_cell(2, 1, true);

    let (sx, sy) = centre(2, 1);
    assert!(selection.start_drag(sx, sy));
    let (ex, ey) = centre(5, 3);
    assert!(selection.update_drag(ex, ey));
    assert_eq!(selection.drag_offset(), Position::new(3, 2));

    assert!(selection.finish_drag(&grid).is_none());
    assert_eq!(grid, before);
    assert!(!selection.is_dragging());
    assert!(selection.is_active(Position::new(1, 1)));
}

#[test]
fn test_drag_is_preview_only_until_finished() {
    let grid = lettered_grid(5, 5);
    let mut selection = Selection::new();
    selection.select_cell(0, 0, false);

    let (sx, sy) = centre(0, 0);
    assert!(selection.start_drag(sx, sy));
    let (ex, ey) = centre(3, 2);
    selection.update_drag(ex, ey);
    assert_eq!(selection.drag_preview().collect::<Vec<_>>(), vec![Position::new(3, 2)]);
    assert!(selection.is_active(Position::new(0, 0)));

    let moved = selection.finish_drag(&grid).unwrap();
    assert_eq!(moved.cell(Position::new(3, 2)).letter, 'a');
    assert!(moved.cell(Position::new(0, 0)).is_empty());
    assert_eq!(selection.single_cell(), Some(Position::new(3, 2)));
}

#[test]
fn test_drag_needs_a_selected_cell() {
    let mut selection = Selection::new();
    selection.select_cell(1, 1, false);
    let (px, py) = centre(3, 3);
    assert!(!selection.start_drag(px, py));
    assert!(!selection.is_dragging());
}

#[test]
fn test_zero_offset_drag_is_discarded() {
    let grid = lettered_grid(3, 3);
    let mut selection = Selection::new();
    selection.select_cell(1, 1, false);
    let (px, py) = centre(1, 1);
    assert!(selection.start_drag(px, py));
    assert!(!selection.update_drag(px + 3.0, py + 3.0));
    assert!(selection.finish_drag(&grid).is_none());
}

#[test]
fn test_cancelled_drag_keeps_selection() {
    let mut selection = Selection::new();
    selection.select_cell(1, 1, false);
    let (px, py) = centre(1, 1);
    selection.start_drag(px, py);
    selection.update_drag(px + 20.0, py);
    selection.cancel_drag();
    assert_eq!(selection.drag_offset(), Position::default());
    assert_eq!(selection.single_cell(), Some(Position::new(1, 1)));
}

#[test]
fn test_drag_to_extreme_pixels_is_rejected() {
    let grid = lettered_grid(4, 4);
    let mut selection = Selection::new();
    selection.select_cell(0, 0, false);

    let (sx, sy) = centre(0, 0);
    assert!(selection.start_drag(sx, sy));
    assert!(selection.update_drag(-1.0e300, 1.0e300));
    assert_eq!(selection.drag_offset(), Position::new(i32::MIN, i32::MAX));
    assert_eq!(selection.drag_preview().collect::<Vec<_>>(), vec![Position::new(i32::MIN, i32::MAX)]);

    assert!(selection.finish_drag(&grid).is_none());
    assert_eq!(selection.single_cell(), Some(Position::new(0, 0)));
}
