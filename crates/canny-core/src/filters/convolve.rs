//! Dense 2-D correlation with explicit output-shape contracts.
//!
//! `*_valid` shrinks the output by `kernel_dim - 1` along each axis and never
//! reads outside the input. `*_same` keeps the input shape and treats samples
//! outside the input as zero.

use ndarray::{Array2, Array3, ArrayView2, Axis};

use super::map_pixels;

/// Correlate `data` with `kernel`, keeping only fully-overlapping positions.
///
/// Output shape is `(h - kh + 1, w - kw + 1)`, or empty when the kernel does
/// not fit.
pub fn correlate_valid(data: ArrayView2<f32>, kernel: ArrayView2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    let (kh, kw) = kernel.dim();
    if kh > h || kw > w {
        return Array2::zeros((0, 0));
    }

    map_pixels(h - kh + 1, w - kw + 1, |row, col| {
        let mut sum = 0.0f32;
        for ((kr, kc), &kv) in kernel.indexed_iter() {
            sum += data[[row + kr, col + kc]] * kv;
        }
        sum
    })
}

/// Correlate `data` with an odd-sized `kernel`, zero outside the borders.
pub fn correlate_same(data: ArrayView2<f32>, kernel: ArrayView2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    let (kh, kw) = kernel.dim();
    let (rh, rw) = ((kh / 2) as isize, (kw / 2) as isize);

    map_pixels(h, w, |row, col| {
        let mut sum = 0.0f32;
        for ((kr, kc), &kv) in kernel.indexed_iter() {
            if kv == 0.0 {
                continue;
            }
            let sr = row as isize + kr as isize - rh;
            let sc = col as isize + kc as isize - rw;
            if sr < 0 || sr >= h as isize || sc < 0 || sc >= w as isize {
                continue;
            }
            sum += data[[sr as usize, sc as usize]] * kv;
        }
        sum
    })
}

/// `correlate_same` for a multi-output kernel of shape `(channels, kh, kw)`.
///
/// Returns `(channels, h, w)`.
pub fn correlate_same_channels(data: ArrayView2<f32>, kernels: &Array3<f32>) -> Array3<f32> {
    let (h, w) = data.dim();
    let channels = kernels.len_of(Axis(0));
    let mut out = Array3::<f32>::zeros((channels, h, w));

    for (mut dst, kernel) in out.outer_iter_mut().zip(kernels.outer_iter()) {
        dst.assign(&correlate_same(data, kernel));
    }
    out
}
