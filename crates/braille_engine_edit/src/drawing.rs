//! Freehand dot painting and erasing

use braille_engine::{Cell, DOT_POSITIONS, Dots, Grid, Origin, Position, Size, cell_fraction, pixel_to_cell};

/// How close (in cell fractions) the pointer must be to a dot centre to hit it.
pub const DOT_PROXIMITY: f64 = 0.25;

/// The cell and dot number under a pixel, if the pointer is close enough to a dot.
pub fn dot_at_pixel(px: f64, py: f64, grid_size: Size) -> Option<(Position, u8)> {
    let cell = pixel_to_cell(px, py);
    if !grid_size.is_inside(cell) {
        return None;
    }
    let (fx, fy) = cell_fraction(px, py);
    let mut closest = None;
    let mut closest_distance = f64::INFINITY;
    for (i, (dx, dy)) in DOT_POSITIONS.iter().enumerate() {
        let distance = ((fx - dx).powi(2) + (fy - dy).powi(2)).sqrt();
        if distance < closest_distance && distance < DOT_PROXIMITY {
            closest_distance = distance;
            closest = Some((cell, i as u8 + 1));
        }
    }
    closest
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum StrokeMode {
    #[default]
    Paint,
    Erase,
}

/// One pointer-down to pointer-up freehand gesture.
#[derive(Clone, Debug, Default)]
pub struct DrawingStroke {
    mode: Option<StrokeMode>,
    last_dot: Option<(Position, u8)>,
}

impl DrawingStroke {
    pub fn is_drawing(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<StrokeMode> {
        self.mode
    }

    /// Starts a stroke and applies it to the dot under the pointer.
    pub fn start(&mut self, grid: &Grid, px: f64, py: f64, mode: StrokeMode) -> Option<Grid> {
        self.mode = Some(mode);
        self.last_dot = None;
        self.continue_stroke(grid, px, py)
    }

    /// Applies the stroke to the dot under the pointer, skipping the dot hit last.
    ///
    /// Returns the new grid when a dot actually changed.
    pub fn continue_stroke(&mut self, grid: &Grid, px: f64, py: f64) -> Option<Grid> {
        let mode = self.mode?;
        let target = dot_at_pixel(px, py, grid.size())?;
        if self.last_dot == Some(target) {
            return None;
        }
        self.last_dot = Some(target);
        let (pos, dot) = target;
        let dot = Dots::dot(dot)?;

        let cell = grid.cell(pos);
        let dots = match mode {
            StrokeMode::Paint => cell.dots | dot,
            StrokeMode::Erase => cell.dots - dot,
        };
        if dots == cell.dots {
            return None;
        }
        let mut result = grid.clone();
        result.set(pos, Cell::from_dots(dots, Origin::Manual));
        Some(result)
    }

    pub fn finish(&mut self) {
        self.mode = None;
        self.last_dot = None;
    }

    pub fn cancel(&mut self) {
        self.finish();
    }
}
