use braille_engine::{CELL_HEIGHT, CELL_WIDTH, Cell, Grid, Origin, Position};

/// A grid with a distinct letter in every cell, so moved content is traceable.
pub fn lettered_grid(width: i32, height: i32) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    let letters: Vec<char> = ('a'..='z').collect();
    for y in 0..height {
        for x in 0..width {
            let ch = letters[((y * width + x) as usize) % letters.len()];
            grid.set(Position::new(x, y), Cell::from_letter(ch, Origin::Text));
        }
    }
    grid
}

/// Centre pixel of a cell.
pub fn centre(x: i32, y: i32) -> (f64, f64) {
    ((x * CELL_WIDTH) as f64 + 10.0, (y * CELL_HEIGHT) as f64 + 15.0)
}
