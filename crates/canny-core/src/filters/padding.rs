use ndarray::{s, Array2, ArrayView2};

/// Pad by `rings` pixels on every side using mirror reflection that repeats
/// the border sample (`[a b c]` -> `[a a b c c]` for one ring).
///
/// Padding is applied one ring at a time, so each extra ring mirrors the
/// previous result's border.
pub fn pad_symmetric(data: ArrayView2<f32>, rings: usize) -> Array2<f32> {
    let mut current = data.to_owned();
    for _ in 0..rings {
        current = pad_one_ring(current.view());
    }
    current
}

fn pad_one_ring(data: ArrayView2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return data.to_owned();
    }

    let mut out = Array2::<f32>::zeros((h + 2, w + 2));
    out.slice_mut(s![1..h + 1, 1..w + 1]).assign(&data);

    out.slice_mut(s![0, 1..w + 1]).assign(&data.row(0));
    out.slice_mut(s![h + 1, 1..w + 1]).assign(&data.row(h - 1));

    // Columns last so the corners pick up the already-padded rows.
    let left = out.column(1).to_owned();
    let right = out.column(w).to_owned();
    out.column_mut(0).assign(&left);
    out.column_mut(w + 1).assign(&right);
    out
}
