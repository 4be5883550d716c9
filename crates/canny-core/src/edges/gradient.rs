use ndarray::{Array2, ArrayView2, Zip};
use serde::{Deserialize, Serialize};

use crate::consts::{MAX, SOBEL_RADIUS};
use crate::filters::convolve::correlate_valid;
use crate::filters::padding::pad_symmetric;
use crate::kernels::KernelBank;

/// Quantized gradient direction used to pick the suppression axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrientationBucket {
    /// `[157.5, 180) U [0, 22.5)`: compares left and right neighbors.
    Deg0,
    /// `[22.5, 67.5)`: compares top-right and bottom-left neighbors.
    Deg45,
    /// `[67.5, 112.5)`: compares top and bottom neighbors.
    Deg90,
    /// `[112.5, 157.5)`: compares top-left and bottom-right neighbors.
    Deg135,
}

impl OrientationBucket {
    pub const ALL: [OrientationBucket; 4] = [Self::Deg0, Self::Deg45, Self::Deg90, Self::Deg135];

    /// Bucket for an angle in degrees within `[0, 180)`.
    pub fn from_degrees(deg: f32) -> Self {
        if !(22.5..157.5).contains(&deg) {
            Self::Deg0
        } else if deg < 67.5 {
            Self::Deg45
        } else if deg < 112.5 {
            Self::Deg90
        } else {
            Self::Deg135
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg45 => 1,
            Self::Deg90 => 2,
            Self::Deg135 => 3,
        }
    }

    pub fn degrees(self) -> f32 {
        self.index() as f32 * 45.0
    }

    /// `(row, col)` offsets of the leading and trailing neighbors compared
    /// during suppression. Rows grow downward.
    pub fn neighbor_offsets(self) -> ((isize, isize), (isize, isize)) {
        match self {
            Self::Deg0 => ((0, -1), (0, 1)),
            Self::Deg45 => ((-1, 1), (1, -1)),
            Self::Deg90 => ((-1, 0), (1, 0)),
            Self::Deg135 => ((-1, -1), (1, 1)),
        }
    }
}

impl std::fmt::Display for OrientationBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\u{b0}", self.degrees())
    }
}

/// Per-pixel gradient magnitude and orientation of a smoothed image.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// `sqrt(gx^2 + gy^2)`, non-negative.
    pub magnitude: Array2<f32>,
    /// `atan2(gy, gx)` in degrees, reduced into `[0, 180)`.
    pub orientation: Array2<f32>,
}

impl GradientField {
    /// Smooth with the bank's Gaussian and differentiate with Sobel kernels.
    ///
    /// Both convolutions shrink ("valid"). With `preserve_size`, `image` must
    /// already carry `gaussian_radius` mirrored rings; the smoothed image is
    /// re-padded by the Sobel radius so the field matches the unpadded
    /// input. Without it the field is `2 * (gaussian_radius + 1)` smaller
    /// along each axis.
    ///
    /// `remove_high_val` clips smoothed samples to `[0, MAX / 2]`, flattening
    /// the interior of large bright regions.
    pub fn compute(
        image: ArrayView2<f32>,
        kernels: &KernelBank,
        preserve_size: bool,
        remove_high_val: bool,
    ) -> Self {
        let mut smoothed = correlate_valid(image, kernels.gaussian().view());
        if remove_high_val {
            smoothed.mapv_inplace(|v| v.clamp(0.0, MAX / 2.0));
        }
        if preserve_size {
            smoothed = pad_symmetric(smoothed.view(), SOBEL_RADIUS);
        }

        let gx = correlate_valid(smoothed.view(), kernels.sobel_x().view());
        let gy = correlate_valid(smoothed.view(), kernels.sobel_y().view());

        let magnitude = Zip::from(&gx).and(&gy).map_collect(|&x, &y| (x * x + y * y).sqrt());
        let orientation = Zip::from(&gx)
            .and(&gy)
            .map_collect(|&x, &y| y.atan2(x).to_degrees().rem_euclid(180.0));

        Self {
            magnitude,
            orientation,
        }
    }

    pub fn dim(&self) -> (usize, usize) {
        self.magnitude.dim()
    }

    pub fn bucket_at(&self, row: usize, col: usize) -> OrientationBucket {
        OrientationBucket::from_degrees(self.orientation[[row, col]])
    }

    /// 0/1 membership mask for `bucket`. The four masks partition the field.
    pub fn bucket_mask(&self, bucket: OrientationBucket) -> Array2<f32> {
        self.orientation.mapv(|deg| {
            if OrientationBucket::from_degrees(deg) == bucket {
                1.0
            } else {
                0.0
            }
        })
    }
}
