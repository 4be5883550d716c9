pub mod convolve;
pub mod morphology;
pub mod padding;

use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Build an `(h, w)` array by evaluating `f(row, col)` at every pixel.
///
/// Rows are evaluated in parallel once the image reaches
/// `PARALLEL_PIXEL_THRESHOLD` pixels.
pub(crate) fn map_pixels<F>(h: usize, w: usize, f: F) -> Array2<f32>
where
    F: Fn(usize, usize) -> f32 + Sync,
{
    if h * w < PARALLEL_PIXEL_THRESHOLD {
        return Array2::from_shape_fn((h, w), |(row, col)| f(row, col));
    }

    let rows: Vec<Vec<f32>> = (0..h)
        .into_par_iter()
        .map(|row| (0..w).map(|col| f(row, col)).collect())
        .collect();

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
