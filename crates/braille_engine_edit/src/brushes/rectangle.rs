//! Rectangle outline

use braille_engine::Rectangle;

use super::{DotMap, PixelBitmap};

/// Draws a border band `stroke_width` pixels thick on all four sides of the bitmap.
pub fn rasterize_rectangle(bmp: &mut PixelBitmap, stroke_width: i32) {
    let w = bmp.width();
    let h = bmp.height();
    let band_h = stroke_width.min(h);
    let band_w = stroke_width.min(w);

    bmp.h_band(0, w - 1, 0, band_h);
    bmp.h_band(0, w - 1, (h - stroke_width).max(0), band_h);
    bmp.v_band(0, h - 1, 0, band_w);
    bmp.v_band(0, h - 1, (w - stroke_width).max(0), band_w);
}

/// Outline of `bbox` as dots.
pub fn rectangle_dots(bbox: Rectangle, stroke_width: i32, max_dist_px: f64) -> DotMap {
    let mut bmp = PixelBitmap::for_cells(bbox);
    rasterize_rectangle(&mut bmp, stroke_width);
    bmp.to_dots_map(bbox, max_dist_px)
}
