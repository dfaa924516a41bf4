//! Logical pixel bitmap the rectangle and line brushes draw into.

use braille_engine::{CELL_HEIGHT, CELL_WIDTH, Dots, Position, Rectangle};

use super::{DotMap, dot_offset, round_px};

/// A monochrome bitmap covering a block of cells at `CELL_WIDTH × CELL_HEIGHT` pixels each.
#[derive(Clone, Debug)]
pub struct PixelBitmap {
    width: i32,
    height: i32,
    data: Vec<bool>,
}

impl PixelBitmap {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            data: vec![false; (width * height) as usize],
        }
    }

    /// A bitmap sized for `cells`.
    pub fn for_cells(cells: Rectangle) -> Self {
        Self::new(cells.width() * CELL_WIDTH, cells.height() * CELL_HEIGHT)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Sets one pixel. Pixels outside the bitmap are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        if x >= 0 && x < self.width && y >= 0 && y < self.height {
            self.data[(y * self.width + x) as usize] = true;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && self.data[(y * self.width + x) as usize]
    }

    /// Horizontal band `thickness` pixels high starting at row `y0`.
    pub fn h_band(&mut self, x0: i32, x1: i32, y0: i32, thickness: i32) {
        for s in 0..thickness {
            for x in x0..=x1 {
                self.set_pixel(x, y0 + s);
            }
        }
    }

    /// Vertical band `thickness` pixels wide starting at column `x0`.
    pub fn v_band(&mut self, y0: i32, y1: i32, x0: i32, thickness: i32) {
        for s in 0..thickness {
            for y in y0..=y1 {
                self.set_pixel(x0 + s, y);
            }
        }
    }

    pub fn lit_pixels(&self) -> usize {
        self.data.iter().filter(|p| **p).count()
    }

    fn has_lit_pixel_near(&self, px: i32, py: i32, r: i32, max_dist_sq: f64) -> bool {
        for dy in -r..=r {
            for dx in -r..=r {
                if ((dx * dx + dy * dy) as f64) <= max_dist_sq && self.get_pixel(px + dx, py + dy) {
                    return true;
                }
            }
        }
        false
    }

    /// Raises every dot of `cells` that has a lit pixel within `max_dist_px`.
    ///
    /// The bitmap's origin is the top left corner of `cells`.
    pub fn to_dots_map(&self, cells: Rectangle, max_dist_px: f64) -> DotMap {
        let mut result = DotMap::new();
        let max_dist_sq = max_dist_px * max_dist_px;
        let r = max_dist_px.ceil() as i32;

        for cell in cells.cells() {
            let off_x = (cell.x - cells.left()) * CELL_WIDTH;
            let off_y = (cell.y - cells.top()) * CELL_HEIGHT;
            let mut dots = Dots::empty();
            for i in 0..6 {
                let (dx, dy) = dot_offset(i);
                let px = round_px(off_x as f64 + dx);
                let py = round_px(off_y as f64 + dy);
                if self.has_lit_pixel_near(px, py, r, max_dist_sq) {
                    dots |= Dots::from_bits_truncate(1 << i);
                }
            }
            if !dots.is_empty() {
                result.insert(Position::new(cell.x, cell.y), dots);
            }
        }
        result
    }
}
