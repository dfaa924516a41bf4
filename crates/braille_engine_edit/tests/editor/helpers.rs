use braille_engine::{CELL_HEIGHT, CELL_WIDTH, DOT_POSITIONS};
use braille_engine_edit::{BrailleEditState, Tool};

pub fn editor(width: i32, height: i32, tool: Tool) -> BrailleEditState {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut state = BrailleEditState::new(width, height).unwrap();
    state.set_tool(tool);
    state
}

/// Centre pixel of a cell.
pub fn centre(x: i32, y: i32) -> (f64, f64) {
    ((x * CELL_WIDTH) as f64 + 10.0, (y * CELL_HEIGHT) as f64 + 15.0)
}

/// Pixel right on top of dot `dot` (1..=6) of a cell.
pub fn dot_pixel(x: i32, y: i32, dot: usize) -> (f64, f64) {
    let (fx, fy) = DOT_POSITIONS[dot - 1];
    ((x as f64 + fx) * CELL_WIDTH as f64, (y as f64 + fy) * CELL_HEIGHT as f64)
}
