//! Turns a binary bitmap into a braille grid.
//!
//! Each dot of each cell is mapped into bitmap space with the same dot
//! position table the editor uses and lights up when enough of a small
//! circular window around it is set.

use serde::{Deserialize, Serialize};

use crate::{CELL_HEIGHT, CELL_WIDTH, Cell, DOT_POSITIONS, Dots, EngineError, Grid, Origin, Position, Result};

/// Pixel value used for "set" in binary bitmaps.
pub const LIT: u8 = 255;

/// A single channel 8 bit image, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// # Errors
    ///
    /// Fails if a dimension is zero or `data` does not hold exactly `width * height` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::EmptyBitmap { width, height });
        }
        let expected = width * height;
        if data.len() != expected {
            return Err(EngineError::BitmapSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Bitmap { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.data[y as usize * self.width + x as usize])
    }

    /// Anything above mid grey counts as set.
    pub fn is_lit(&self, x: i64, y: i64) -> bool {
        self.get(x, y).is_some_and(|v| v > 127)
    }
}

/// How grey levels are stretched before thresholding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    /// Linear scaling around mid grey by an intensity factor.
    #[default]
    Contrast,
    /// Histogram equalization, intensity is ignored.
    Equalize,
}

/// Applies `mode` to a grayscale bitmap. `intensity` 1.0 leaves the contrast mode unchanged.
pub fn contrast_or_equalize(gray: &Bitmap, mode: ContrastMode, intensity: f64) -> Bitmap {
    let data = match mode {
        ContrastMode::Contrast => gray
            .data
            .iter()
            .map(|&v| ((f64::from(v) - 128.0) * intensity + 128.0).clamp(0.0, 255.0) as u8)
            .collect(),
        ContrastMode::Equalize => {
            let mut cdf = [0usize; 256];
            for &v in &gray.data {
                cdf[v as usize] += 1;
            }
            let mut running = 0;
            for count in &mut cdf {
                running += *count;
                *count = running;
            }
            let min_cdf = cdf.iter().copied().find(|&c| c > 0).unwrap_or(0);
            let range = gray.data.len() - min_cdf;
            if range == 0 {
                // a single grey level has nothing to spread
                return gray.clone();
            }
            gray.data.iter().map(|&v| ((cdf[v as usize] - min_cdf) * 255 / range) as u8).collect()
        }
    };
    Bitmap {
        width: gray.width,
        height: gray.height,
        data,
    }
}

/// Binarises a grayscale bitmap to 0/255.
///
/// With `dark_is_contour` pixels darker than `threshold` become set, which is
/// what a black drawing on white paper needs.
pub fn binary_threshold(gray: &Bitmap, threshold: u8, dark_is_contour: bool) -> Bitmap {
    let data = gray
        .data
        .iter()
        .map(|&v| if (v < threshold) == dark_is_contour { LIT } else { 0 })
        .collect();
    Bitmap {
        width: gray.width,
        height: gray.height,
        data,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleParams {
    /// Radius of the sampling window in bitmap pixels. `0` samples a single pixel.
    pub dot_radius: f64,
    /// Share of set pixels in the window (0..1) needed to raise a dot.
    pub threshold_dot: f64,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            dot_radius: 2.5,
            threshold_dot: 0.1,
        }
    }
}

fn sample_coverage(bitmap: &Bitmap, sx: f64, sy: f64, dot_radius: f64, threshold_dot: f64) -> bool {
    if dot_radius <= 0.0 {
        return bitmap.is_lit(sx.floor() as i64, sy.floor() as i64);
    }
    let r = dot_radius.ceil().max(1.0) as i64;
    let r2 = dot_radius * dot_radius;
    let mut count = 0u32;
    let mut total = 0u32;
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f64 > r2 {
                continue;
            }
            total += 1;
            if bitmap.is_lit((sx + dx as f64).floor() as i64, (sy + dy as f64).floor() as i64) {
                count += 1;
            }
        }
    }
    if total == 0 {
        return false;
    }
    // tiny windows light on any hit so thin strokes survive
    count as f64 / total as f64 >= threshold_dot || (count >= 1 && total <= 9)
}

/// Samples `bitmap` into a fresh `grid_width × grid_height` grid, every cell tagged automatic.
///
/// # Errors
///
/// Returns [`EngineError::InvalidGridSize`] for a non positive grid size.
pub fn edges_to_grid(bitmap: &Bitmap, grid_width: i32, grid_height: i32, params: &SampleParams) -> Result<Grid> {
    let mut grid = Grid::new(grid_width, grid_height)?;
    let dot_radius = params.dot_radius.max(0.0);
    let threshold_dot = params.threshold_dot.clamp(0.0, 1.0);
    let logical_width = (grid_width * CELL_WIDTH) as f64;
    let logical_height = (grid_height * CELL_HEIGHT) as f64;

    for y in 0..grid_height {
        for x in 0..grid_width {
            let mut dots = Dots::empty();
            for (i, (fx, fy)) in DOT_POSITIONS.iter().enumerate() {
                let lx = (x as f64 + fx) * CELL_WIDTH as f64;
                let ly = (y as f64 + fy) * CELL_HEIGHT as f64;
                let sx = lx / logical_width * bitmap.width as f64;
                let sy = ly / logical_height * bitmap.height as f64;
                if sample_coverage(bitmap, sx, sy, dot_radius, threshold_dot) {
                    dots |= Dots::from_bits_truncate(1 << i);
                }
            }
            grid.set(Position::new(x, y), Cell::from_dots(dots, Origin::Automatic));
        }
    }
    log::debug!(
        "sampled {}x{} bitmap into {grid_width}x{grid_height} cells (radius {dot_radius}, threshold {threshold_dot})",
        bitmap.width,
        bitmap.height
    );
    Ok(grid)
}
