use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::consts::MAX;
use crate::filters::convolve::correlate_same_channels;
use crate::kernels::KernelBank;

use super::gradient::{GradientField, OrientationBucket};

/// How a pixel compares against neighbors of equal magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Strictly greater than both neighbors. A two-pixel plateau is
    /// suppressed entirely.
    #[default]
    Strict,
    /// Strictly greater than the leading neighbor and at least equal to the
    /// trailing one. A two-pixel plateau keeps its leading pixel.
    Leading,
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "Strict"),
            Self::Leading => write!(f, "Leading"),
        }
    }
}

/// 0/1 mask of pixels in `bucket` that are local maxima along its axis.
///
/// Neighbors are fetched with the bucket's two-channel pair kernel in "same"
/// mode, so neighbors outside the field count as zero.
pub fn local_maxima(
    field: &GradientField,
    kernels: &KernelBank,
    bucket: OrientationBucket,
    tie_break: TieBreak,
) -> Array2<f32> {
    let g = &field.magnitude;
    let fetched = correlate_same_channels(g.view(), kernels.neighbor_pair(bucket));
    let leading = fetched.index_axis(ndarray::Axis(0), 0);
    let trailing = fetched.index_axis(ndarray::Axis(0), 1);
    let member = field.bucket_mask(bucket);

    Zip::from(g)
        .and(&member)
        .and(&leading)
        .and(&trailing)
        .map_collect(|&m, &inside, &lead, &trail| {
            let v = m * inside;
            let is_max = match tie_break {
                TieBreak::Strict => v > lead && v > trail,
                TieBreak::Leading => v > lead && v >= trail,
            };
            if is_max {
                1.0
            } else {
                0.0
            }
        })
}

/// Directional non-maximum suppression over all four buckets.
///
/// Returns the raw edge-strength map `G * (max_0 + max_45 + max_90 + max_135)`
/// clipped to `[0, MAX]`. The bucket masks are disjoint, so the sum acts as
/// a logical OR.
pub fn suppress(field: &GradientField, kernels: &KernelBank, tie_break: TieBreak) -> Array2<f32> {
    let mut any_max = Array2::<f32>::zeros(field.dim());
    for bucket in OrientationBucket::ALL {
        any_max += &local_maxima(field, kernels, bucket, tie_break);
    }

    Zip::from(&field.magnitude)
        .and(&any_max)
        .map_collect(|&m, &keep| (m * keep).clamp(0.0, MAX))
}
