//! Tests for the grid model and cell keys

use braille_engine::{Cell, Dots, Grid, Origin, Position, Rectangle, Size, pixel_to_cell};
use pretty_assertions::assert_eq;

#[test]
fn test_cell_keys_round_trip() {
    for y in -2..5 {
        for x in -2..5 {
            let pos = Position::new(x, y);
            assert_eq!(pos.to_cell_key().parse::<Position>().unwrap(), pos);
        }
    }
}

#[test]
fn test_rows_have_grid_width() {
    let grid = Grid::new(7, 3).unwrap();
    assert_eq!(grid.rows().count(), 3);
    assert!(grid.rows().all(|row| row.len() == 7));
    assert_eq!(grid.rectangle(), Rectangle::new(Position::new(0, 0), Size::new(7, 3)));
}

#[test]
fn test_snapshots_are_independent() {
    let mut grid = Grid::new(3, 3).unwrap();
    let snapshots: Vec<Grid> = (0..3)
        .map(|i| {
            grid.set(Position::new(i, i), Cell::from_dots(Dots::all(), Origin::Automatic));
            grid.clone()
        })
        .collect();

    assert_eq!(snapshots[0].cell(Position::new(1, 1)), Cell::EMPTY);
    assert_eq!(snapshots[1].cell(Position::new(1, 1)).dots, Dots::all());
    assert_eq!(snapshots[1].cell(Position::new(2, 2)), Cell::EMPTY);
    assert_eq!(snapshots[2].cell(Position::new(2, 2)).letter, '⠿');
}

#[test]
fn test_pixel_addressing() {
    let grid = Grid::new(5, 5).unwrap();
    assert!(grid.is_inside(pixel_to_cell(99.9, 149.9)));
    assert!(!grid.is_inside(pixel_to_cell(100.0, 10.0)));
    assert!(!grid.is_inside(pixel_to_cell(-0.1, 10.0)));
}
