use std::path::Path;

use image::{ImageBuffer, ImageFormat, Luma};
use ndarray::{Array2, ArrayView2};

use crate::error::Result;

/// Load an image file as a single-channel array with samples in `[0, 1]`.
/// Color input is converted to luminance.
pub fn load_gray(path: &Path) -> Result<Array2<f32>> {
    let img = image::open(path)?;
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();

    Ok(Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        gray.get_pixel(col as u32, row as u32).0[0] as f32 / 65535.0
    }))
}

/// Save as 16-bit grayscale TIFF. Samples are clamped to `[0, 1]`.
pub fn save_tiff(data: ArrayView2<f32>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();
    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_fn(w as u32, h as u32, |x, y| {
        Luma([(data[[y as usize, x as usize]].clamp(0.0, 1.0) * 65535.0) as u16])
    });
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save as 8-bit grayscale PNG. Samples are clamped to `[0, 1]`.
pub fn save_png(data: ArrayView2<f32>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();
    let img = ImageBuffer::<Luma<u8>, Vec<u8>>::from_fn(w as u32, h as u32, |x, y| {
        Luma([(data[[y as usize, x as usize]].clamp(0.0, 1.0) * 255.0) as u8])
    });
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an edge or boundary map, choosing the format from the extension.
/// Anything other than `.tif`/`.tiff` is written as PNG.
pub fn save_mask(data: ArrayView2<f32>, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(data, path),
        _ => save_png(data, path),
    }
}
