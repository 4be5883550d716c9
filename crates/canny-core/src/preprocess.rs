use ndarray::Array3;
use tracing::debug;

use crate::batch::ImageBatch;
use crate::consts::MAX;
use crate::filters::padding::pad_symmetric;

/// Result of normalizing a batch.
#[derive(Debug)]
pub enum Normalized {
    /// Samples rescaled into `[0, MAX]`, optionally reflection-padded.
    Scaled(ImageBatch),
    /// The batch-wide maximum was not positive; nothing can be rescaled.
    Degenerate,
}

/// Rescale every sample by the batch-wide maximum so values land in
/// `[0, MAX]`, then pad each image by `pad_width` mirrored rings when
/// `preserve_size` is set.
///
/// A batch whose maximum is zero (or negative) is reported as
/// `Normalized::Degenerate` instead of dividing by zero.
pub fn normalize(batch: &ImageBatch, preserve_size: bool, pad_width: usize) -> Normalized {
    let max = batch.max_value();
    if max <= 0.0 {
        return Normalized::Degenerate;
    }

    let scale = MAX / max;
    let rings = if preserve_size { pad_width } else { 0 };
    debug!(max, rings, "Normalizing batch");

    let n = batch.len();
    let (h, w) = (batch.height() + 2 * rings, batch.width() + 2 * rings);
    let mut out = Array3::<f32>::zeros((n, h, w));
    for (mut dst, img) in out.outer_iter_mut().zip(batch.images()) {
        let scaled = img.mapv(|v| v * scale);
        dst.assign(&pad_symmetric(scaled.view(), rings));
    }

    Normalized::Scaled(ImageBatch::wrap(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_scales_by_batch_max() {
        let batch = ImageBatch::from_images(&[
            Array2::from_elem((2, 2), 2.0),
            Array2::from_elem((2, 2), 4.0),
        ])
        .unwrap();

        let Normalized::Scaled(out) = normalize(&batch, false, 1) else {
            panic!("expected a scaled batch");
        };
        assert_eq!(out.data().dim(), (2, 2, 2));
        assert!(out.image(0).iter().all(|&v| v == 0.5));
        assert!(out.image(1).iter().all(|&v| v == MAX));
    }

    #[test]
    fn test_pads_when_preserving_size() {
        let batch = ImageBatch::single(Array2::from_shape_fn((3, 4), |(r, c)| (r + c) as f32));
        let Normalized::Scaled(out) = normalize(&batch, true, 2) else {
            panic!("expected a scaled batch");
        };
        assert_eq!(out.image(0).dim(), (7, 8));
        assert_eq!(out.image(0)[[0, 0]], 0.0);
        assert!((out.image(0)[[6, 7]] - MAX).abs() < 1e-6);
    }

    #[test]
    fn test_zero_max_is_degenerate() {
        let batch = ImageBatch::single(Array2::zeros((3, 3)));
        assert!(matches!(normalize(&batch, true, 1), Normalized::Degenerate));
    }
}
