//! Tests for the plain text export

use braille_engine::{
    Cell, Grid, Origin, Position,
    export::{LineEnding, export_grid, grid_to_letters},
};

#[test]
fn test_export_reads_row_major() {
    let mut grid = Grid::new(3, 2).unwrap();
    for (i, ch) in "cat".chars().enumerate() {
        grid.set(Position::new(i as i32, 0), Cell::from_letter(ch, Origin::Text));
    }
    grid.set(Position::new(2, 1), Cell::from_letter('!', Origin::Text));

    assert_eq!(grid_to_letters(&grid, LineEnding::Lf), "cat\n  !");
    assert_eq!(export_grid(&grid, LineEnding::CrLf, b'?'), b"cat\r\n  !".to_vec());
}

#[test]
fn test_empty_grid_exports_spaces() {
    let grid = Grid::new(2, 2).unwrap();
    assert_eq!(export_grid(&grid, LineEnding::Lf, b'?'), b"  \n  ".to_vec());
}
