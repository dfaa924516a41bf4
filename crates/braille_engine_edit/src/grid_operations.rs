//! Pure helpers that write into a grid
//!
//! Every function takes the grid by reference and returns a new one; the
//! input is never touched, so snapshots in the undo history stay valid.

use std::collections::BTreeSet;

use braille_engine::{Cell, Dots, Grid, Origin, Position, braille_table};

use crate::brushes::DotMap;

/// Writes `dots_map` into a copy of `grid`.
///
/// In bounds entries replace the cell's dots, get their letter recomputed and
/// are stamped with `origin`. Everything else stays as it was.
pub fn apply_dots_map_to_grid(grid: &Grid, dots_map: &DotMap, origin: Origin) -> Grid {
    let mut result = grid.clone();
    for (pos, dots) in dots_map {
        result.set(*pos, Cell::from_dots(*dots, origin));
    }
    result
}

/// Sets one cell's dots, or `None` when outside the grid.
pub fn set_cell(grid: &Grid, x: i32, y: i32, dots: Dots, origin: Origin) -> Option<Grid> {
    let pos = Position::new(x, y);
    if !grid.is_inside(pos) {
        return None;
    }
    let mut result = grid.clone();
    result.set(pos, Cell::from_dots(dots, origin));
    Some(result)
}

/// Empties one cell. `None` if outside the grid or already empty.
pub fn clear_cell(grid: &Grid, x: i32, y: i32) -> Option<Grid> {
    let pos = Position::new(x, y);
    if grid.get(pos)? == &Cell::EMPTY {
        return None;
    }
    let mut result = grid.clone();
    result.clear(pos);
    Some(result)
}

/// The 4-connected region of cells with the same dots as `start`.
pub fn flood_region(grid: &Grid, start: Position) -> BTreeSet<Position> {
    let mut region = BTreeSet::new();
    let Some(start_cell) = grid.get(start) else {
        return region;
    };
    let original = start_cell.dots;
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        if region.contains(&pos) || grid.get(pos).is_none_or(|cell| cell.dots != original) {
            continue;
        }
        region.insert(pos);
        stack.push(Position::new(pos.x + 1, pos.y));
        stack.push(Position::new(pos.x - 1, pos.y));
        stack.push(Position::new(pos.x, pos.y + 1));
        stack.push(Position::new(pos.x, pos.y - 1));
    }
    region
}

/// Fills the region around `(x, y)` with `fill`.
///
/// `None` if the start is outside the grid or already holds `fill`.
pub fn flood_fill(grid: &Grid, x: i32, y: i32, fill: Dots) -> Option<Grid> {
    let start = Position::new(x, y);
    if grid.get(start)?.dots == fill {
        return None;
    }
    let map: DotMap = flood_region(grid, start).into_iter().map(|pos| (pos, fill)).collect();
    log::debug!("flood fill at {start} covers {} cells", map.len());
    Some(apply_dots_map_to_grid(grid, &map, Origin::Automatic))
}

/// Writes `text` one cell per character starting at `(start_x, start_y)`.
///
/// `\n` continues at `start_x` on the next line, running off the right edge
/// continues at column 0 of the next line and writing stops at the bottom.
/// Letters are stored lowercase. A digit takes two cells: the number sign
/// followed by the letter `a`–`j` it stands for. Characters without a pattern
/// keep their letter with no dots.
pub fn write_text_to_grid(grid: &Grid, start_x: i32, start_y: i32, text: &str) -> Grid {
    let mut result = grid.clone();
    let mut x = start_x;
    let mut y = start_y;

    let cells = text.chars().flat_map(|ch| match braille_table::digit_to_letter(ch) {
        Some(letter) => vec![braille_table::NUMBER_SIGN, letter],
        None => vec![ch.to_ascii_lowercase()],
    });

    for ch in cells {
        if ch == '\n' {
            x = start_x;
            y += 1;
            if y >= result.height() {
                break;
            }
            continue;
        }
        if x >= result.width() {
            x = 0;
            y += 1;
        }
        if y >= result.height() {
            break;
        }
        result.set(Position::new(x, y), Cell::from_letter(ch, Origin::Text));
        x += 1;
    }
    result
}
