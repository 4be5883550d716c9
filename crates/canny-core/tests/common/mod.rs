use canny_core::ImageBatch;
use ndarray::Array2;

/// `h x w` zeros with a 1-pixel-wide bright vertical line at `col`.
pub fn vertical_line(h: usize, w: usize, col: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(_, c)| if c == col { 1.0 } else { 0.0 })
}

/// `h x w` zeros with a filled square of side `size` whose top-left corner
/// is `(top, left)`.
pub fn filled_square(h: usize, w: usize, top: usize, left: usize, size: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| {
        if (top..top + size).contains(&r) && (left..left + size).contains(&c) {
            1.0
        } else {
            0.0
        }
    })
}

/// Deterministic textured image with values in `[0, 1]`.
pub fn textured(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| ((r * 7 + c * 13 + r * c) % 17) as f32 / 16.0)
}

pub fn single(image: Array2<f32>) -> ImageBatch {
    ImageBatch::single(image)
}

pub fn count_ones(data: &Array2<f32>) -> usize {
    data.iter().filter(|&&v| v > 0.5).count()
}

pub fn assert_binary(data: &Array2<f32>) {
    for &v in data.iter() {
        assert!(v == 0.0 || v == 1.0, "expected 0 or 1, got {v}");
    }
}
