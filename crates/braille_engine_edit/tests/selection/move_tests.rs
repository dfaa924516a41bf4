//! Tests for keyboard moves

use braille_engine::{Cell, Grid, Origin, Position, Size};
use braille_engine_edit::selection::{Direction, Selection};
use pretty_assertions::assert_eq;

use crate::helpers::{centre, lettered_grid};

#[test]
fn test_move_right_stops_at_border() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.set(Position::new(2, 2), Cell::from_letter('x', Origin::Manual));
    let mut selection = Selection::new();
    selection.select_cell(2, 2, false);

    let mut moves = 0;
    for _ in 0..3 {
        if let Some(moved) = selection.move_selection(&grid, Direction::Right) {
            grid = moved;
            moves += 1;
        }
    }

    assert_eq!(moves, 2);
    assert_eq!(selection.single_cell().map(|p| p.to_cell_key()), Some("4,2".to_string()));
    assert_eq!(grid.cell(Position::new(4, 2)).letter, 'x');
    assert!(grid.cell(Position::new(2, 2)).is_empty());
}

#[test]
fn test_move_round_trip_restores_grid() {
    let original = lettered_grid(6, 5);
    let mut selection = Selection::new();
    let size = original.size();
    let (sx, sy) = centre(1, 1);
    let (ex, ey) = centre(3, 2);
    assert!(selection.start_selection(sx, sy, false, size));
    selection.update_selection(ex, ey, size);
    selection.finish_selection();
    let selected_before = selection.selected().clone();

    let moved = selection.move_selection(&original, Direction::Up).unwrap();
    let restored = selection.move_selection(&moved, Direction::Down).unwrap();

    // the cells the block left behind stay cleared, so compare only the block
    for pos in &selected_before {
        assert_eq!(restored.cell(*pos), original.cell(*pos), "cell {pos}");
    }
    assert_eq!(selection.selected(), &selected_before);

    let moved = selection.move_selection(&restored, Direction::Left).unwrap();
    let again = selection.move_selection(&moved, Direction::Right).unwrap();
    for pos in &selected_before {
        assert_eq!(again.cell(*pos), original.cell(*pos), "cell {pos}");
    }
}

#[test]
fn test_overlapping_move_reads_from_snapshot() {
    let grid = lettered_grid(5, 1);
    let mut selection = Selection::new();
    selection.set_selected((0..4).map(|x| Position::new(x, 0)));

    let moved = selection.move_selection(&grid, Direction::Right).unwrap();
    let letters: String = moved.row(0).unwrap().iter().map(|c| c.letter).collect();
    assert_eq!(letters, " abcd");
}

#[test]
fn test_sparse_selection_moves_as_a_block() {
    let grid = lettered_grid(4, 4);
    let mut selection = Selection::new();
    selection.select_cell(0, 0, false);
    selection.select_cell(2, 1, true);

    // the bounding box touches the top, so up is rejected as a whole
    assert!(selection.move_selection(&grid, Direction::Up).is_none());
    assert!(selection.can_move_by(Position::new(1, 2), Size::new(4, 4)));
    assert!(!selection.can_move_by(Position::new(2, 0), Size::new(4, 4)));

    let moved = selection.move_selection(&grid, Direction::Down).unwrap();
    assert_eq!(moved.cell(Position::new(0, 1)).letter, 'a');
    assert_eq!(moved.cell(Position::new(2, 2)).letter, grid.cell(Position::new(2, 1)).letter);
    assert!(moved.cell(Position::new(0, 0)).is_empty());
    // unselected cells inside the box are not carried along
    assert_eq!(moved.cell(Position::new(1, 1)), grid.cell(Position::new(1, 1)));
}

#[test]
fn test_move_of_empty_selection_is_noop() {
    let grid = lettered_grid(3, 3);
    let mut selection = Selection::new();
    assert!(selection.move_selection(&grid, Direction::Left).is_none());
}
