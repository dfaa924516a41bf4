//! Image to braille conversion for the `import` command

use std::path::Path;

use anyhow::Context;
use braille_engine::{
    Grid,
    image_import::{Bitmap, binary_threshold, contrast_or_equalize, edges_to_grid},
};
use image::GrayImage;

use crate::settings::ImageSettings;

/// Binary bitmap of a grayscale image after the contrast stage; unless
/// `invert` is set, dark strokes on a light background become set pixels.
pub fn luma_to_binary(luma: GrayImage, settings: &ImageSettings, invert: bool) -> anyhow::Result<Bitmap> {
    let (width, height) = luma.dimensions();
    let gray = Bitmap::new(width as usize, height as usize, luma.into_raw())?;
    let gray = contrast_or_equalize(&gray, settings.contrast_mode, settings.contrast_intensity);
    Ok(binary_threshold(&gray, settings.threshold, !invert))
}

pub fn image_to_grid(path: &Path, grid_width: i32, grid_height: i32, settings: &ImageSettings, invert: bool) -> anyhow::Result<Grid> {
    let luma = image::open(path).with_context(|| format!("loading image {}", path.display()))?.to_luma8();
    log::info!("loaded {} ({}x{})", path.display(), luma.width(), luma.height());

    let bitmap = luma_to_binary(luma, settings, invert)?;
    let grid = edges_to_grid(&bitmap, grid_width, grid_height, &settings.sample_params())?;
    Ok(grid)
}
