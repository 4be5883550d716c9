use ndarray::{Array2, ArrayView2};

use super::map_pixels;

/// Flat grayscale erosion: minimum over the support (nonzero entries) of
/// `element`, centered on each pixel. Output keeps the input shape; samples
/// outside the image are ignored.
pub fn erode(data: ArrayView2<f32>, element: ArrayView2<f32>) -> Array2<f32> {
    window_reduce(data, element, f32::INFINITY, f32::min)
}

/// Flat grayscale dilation: maximum over the support of `element`.
pub fn dilate(data: ArrayView2<f32>, element: ArrayView2<f32>) -> Array2<f32> {
    window_reduce(data, element, f32::NEG_INFINITY, f32::max)
}

/// Apply `erode` `iterations` times.
pub fn erode_n(data: ArrayView2<f32>, element: ArrayView2<f32>, iterations: usize) -> Array2<f32> {
    let mut current = data.to_owned();
    for _ in 0..iterations {
        current = erode(current.view(), element);
    }
    current
}

/// Apply `dilate` `iterations` times.
pub fn dilate_n(data: ArrayView2<f32>, element: ArrayView2<f32>, iterations: usize) -> Array2<f32> {
    let mut current = data.to_owned();
    for _ in 0..iterations {
        current = dilate(current.view(), element);
    }
    current
}

fn window_reduce(
    data: ArrayView2<f32>,
    element: ArrayView2<f32>,
    init: f32,
    reduce: fn(f32, f32) -> f32,
) -> Array2<f32> {
    let (h, w) = data.dim();
    let (eh, ew) = element.dim();
    let (rh, rw) = ((eh / 2) as isize, (ew / 2) as isize);

    let offsets: Vec<(isize, isize)> = element
        .indexed_iter()
        .filter(|(_, &v)| v != 0.0)
        .map(|((r, c), _)| (r as isize - rh, c as isize - rw))
        .collect();

    map_pixels(h, w, |row, col| {
        let mut acc = init;
        for &(dr, dc) in &offsets {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr >= 0 && nr < h as isize && nc >= 0 && nc < w as isize {
                acc = reduce(acc, data[[nr as usize, nc as usize]]);
            }
        }
        // Empty support or a window fully outside the image: keep the sample.
        if acc.is_finite() {
            acc
        } else {
            data[[row, col]]
        }
    })
}
