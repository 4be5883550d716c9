use ndarray::{arr2, Array2, Array3};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ELEMENT_SCALE, DEFAULT_GAUSSIAN_SIGMA, DEFAULT_GAUSSIAN_SIZE};
use crate::edges::gradient::OrientationBucket;
use crate::error::{CannyError, Result};

/// Parameters of the kernels that are fixed for the lifetime of a detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Gaussian kernel side length. Must be odd.
    #[serde(default = "default_gaussian_size")]
    pub gaussian_size: usize,
    /// Gaussian spread. Must be positive.
    #[serde(default = "default_gaussian_sigma")]
    pub gaussian_sigma: f32,
}

fn default_gaussian_size() -> usize {
    DEFAULT_GAUSSIAN_SIZE
}
fn default_gaussian_sigma() -> f32 {
    DEFAULT_GAUSSIAN_SIGMA
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            gaussian_size: DEFAULT_GAUSSIAN_SIZE,
            gaussian_sigma: DEFAULT_GAUSSIAN_SIGMA,
        }
    }
}

impl KernelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.gaussian_size == 0 || self.gaussian_size % 2 == 0 {
            return Err(CannyError::InvalidParameter(format!(
                "gaussian_size must be odd, got {}",
                self.gaussian_size
            )));
        }
        if !self.gaussian_sigma.is_finite() || self.gaussian_sigma <= 0.0 {
            return Err(CannyError::InvalidParameter(format!(
                "gaussian_sigma must be positive, got {}",
                self.gaussian_sigma
            )));
        }
        Ok(())
    }

    /// Ring count a shrinking Gaussian pass removes from each side.
    pub fn gaussian_radius(&self) -> usize {
        (self.gaussian_size - 1) / 2
    }
}

/// Immutable convolution and morphology kernels, built once and shared
/// read-only by every pipeline call.
///
/// All kernels are applied as cross-correlation (no flipping), so the
/// coefficient at `[0, 0]` weights the top-left neighbor.
#[derive(Clone, Debug)]
pub struct KernelBank {
    config: KernelConfig,
    gaussian: Array2<f32>,
    sobel_x: Array2<f32>,
    sobel_y: Array2<f32>,
    /// Neighbor-pair kernels indexed by `OrientationBucket::index`.
    /// Shape `(2, 3, 3)`: channel 0 fetches the leading neighbor, channel 1
    /// the trailing one.
    pairs: [Array3<f32>; 4],
    propagation: Array2<f32>,
    structuring: Array2<f32>,
}

impl KernelBank {
    pub fn new(config: KernelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: KernelConfig) -> Self {
        let gaussian = gaussian_kernel(config.gaussian_size, config.gaussian_sigma);
        Self {
            config,
            gaussian,
            sobel_x: arr2(&[[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]]),
            sobel_y: arr2(&[[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]]),
            pairs: OrientationBucket::ALL.map(neighbor_pair_kernel),
            propagation: arr2(&[[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]]),
            structuring: Array2::from_elem((3, 3), DEFAULT_ELEMENT_SCALE),
        }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Unnormalized Gaussian: coefficients do not sum to 1.
    pub fn gaussian(&self) -> &Array2<f32> {
        &self.gaussian
    }

    pub fn sobel_x(&self) -> &Array2<f32> {
        &self.sobel_x
    }

    pub fn sobel_y(&self) -> &Array2<f32> {
        &self.sobel_y
    }

    pub fn neighbor_pair(&self, bucket: OrientationBucket) -> &Array3<f32> {
        &self.pairs[bucket.index()]
    }

    /// 8-neighborhood kernel used to spread hysteresis support.
    pub fn propagation(&self) -> &Array2<f32> {
        &self.propagation
    }

    /// 3x3 all-ones element scaled by `DEFAULT_ELEMENT_SCALE`.
    pub fn structuring_element(&self) -> &Array2<f32> {
        &self.structuring
    }
}

impl Default for KernelBank {
    fn default() -> Self {
        Self::build(KernelConfig::default())
    }
}

/// `exp(-(dr^2 + dc^2) / (2 sigma^2)) / (2 pi sigma^2)` over a `size x size` grid.
pub fn gaussian_kernel(size: usize, sigma: f32) -> Array2<f32> {
    let radius = (size / 2) as f32;
    let s2 = sigma * sigma;
    let norm = 2.0 * std::f32::consts::PI * s2;

    Array2::from_shape_fn((size, size), |(row, col)| {
        let dr = row as f32 - radius;
        let dc = col as f32 - radius;
        (-(dr * dr + dc * dc) / (2.0 * s2)).exp() / norm
    })
}

fn neighbor_pair_kernel(bucket: OrientationBucket) -> Array3<f32> {
    let ((lr, lc), (tr, tc)) = bucket.neighbor_offsets();
    let mut kernel = Array3::<f32>::zeros((2, 3, 3));
    kernel[[0, (1 + lr) as usize, (1 + lc) as usize]] = 1.0;
    kernel[[1, (1 + tr) as usize, (1 + tc) as usize]] = 1.0;
    kernel
}
