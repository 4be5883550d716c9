use ndarray::{Array2, Array3, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::batch::ImageBatch;
use crate::consts::{
    DEFAULT_HYSTERESIS_ROUNDS, DEFAULT_MAX_RATE, DEFAULT_MIN_RATE, MAX, PARALLEL_FRAME_THRESHOLD,
    SOBEL_RADIUS,
};
use crate::error::{CannyError, Result};
use crate::kernels::{KernelBank, KernelConfig};
use crate::preprocess::{normalize, Normalized};

use super::gradient::GradientField;
use super::hysteresis::hysteresis;
use super::suppression::{suppress, TieBreak};

/// Per-call options of `CannyDetector::detect_edges`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeParams {
    /// Lower hysteresis threshold in `[0, MAX]`.
    #[serde(default = "default_min_rate")]
    pub min_rate: f32,
    /// Upper hysteresis threshold in `[min_rate, MAX]`.
    #[serde(default = "default_max_rate")]
    pub max_rate: f32,
    /// Reflection-pad so the output has the input's spatial shape.
    #[serde(default = "default_true")]
    pub preserve_size: bool,
    /// Clip smoothed samples to `[0, MAX / 2]` before differentiation.
    #[serde(default)]
    pub remove_high_val: bool,
    /// Return the suppressed edge-strength map and skip hysteresis.
    #[serde(default)]
    pub raw_only: bool,
    /// Hysteresis propagation rounds; also the maximum linking distance.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    #[serde(default)]
    pub tie_break: TieBreak,
}

fn default_min_rate() -> f32 {
    DEFAULT_MIN_RATE
}
fn default_max_rate() -> f32 {
    DEFAULT_MAX_RATE
}
fn default_true() -> bool {
    true
}
fn default_rounds() -> usize {
    DEFAULT_HYSTERESIS_ROUNDS
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            min_rate: DEFAULT_MIN_RATE,
            max_rate: DEFAULT_MAX_RATE,
            preserve_size: true,
            remove_high_val: false,
            raw_only: false,
            rounds: DEFAULT_HYSTERESIS_ROUNDS,
            tie_break: TieBreak::Strict,
        }
    }
}

impl EdgeParams {
    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [("min_rate", self.min_rate), ("max_rate", self.max_rate)] {
            if !rate.is_finite() || !(0.0..=MAX).contains(&rate) {
                return Err(CannyError::InvalidParameter(format!(
                    "{name} must lie in [0, {MAX}], got {rate}"
                )));
            }
        }
        if self.min_rate > self.max_rate {
            return Err(CannyError::InvalidParameter(format!(
                "min_rate ({}) exceeds max_rate ({})",
                self.min_rate, self.max_rate
            )));
        }
        Ok(())
    }
}

/// Array-based Canny edge detector owning an immutable `KernelBank`.
///
/// Stateless apart from the kernels, so one detector can serve any number
/// of concurrent calls.
#[derive(Clone, Debug, Default)]
pub struct CannyDetector {
    kernels: KernelBank,
}

impl CannyDetector {
    pub fn new(config: KernelConfig) -> Result<Self> {
        Ok(Self {
            kernels: KernelBank::new(config)?,
        })
    }

    pub fn kernels(&self) -> &KernelBank {
        &self.kernels
    }

    /// Spatial shape produced for an `(h, w)` input.
    pub fn output_shape(&self, h: usize, w: usize, preserve_size: bool) -> (usize, usize) {
        if preserve_size {
            (h, w)
        } else {
            let shrink = 2 * (self.kernels.config().gaussian_radius() + SOBEL_RADIUS);
            (h.saturating_sub(shrink), w.saturating_sub(shrink))
        }
    }

    /// Run the full pipeline on every image of `batch`.
    ///
    /// Normalization uses the batch-wide maximum. A batch whose maximum is
    /// not positive yields all-zero output of the expected shape. Output is
    /// `{0, 1}` unless `raw_only`, in which case it is the suppressed edge
    /// strength in `[0, MAX]`.
    pub fn detect_edges(&self, batch: &ImageBatch, params: &EdgeParams) -> Result<ImageBatch> {
        params.validate()?;
        batch.ensure_finite()?;
        self.ensure_fits(batch.height(), batch.width(), params.preserve_size)?;

        let (out_h, out_w) = self.output_shape(batch.height(), batch.width(), params.preserve_size);
        let pad = self.kernels.config().gaussian_radius();

        let normalized = match normalize(batch, params.preserve_size, pad) {
            Normalized::Scaled(b) => b,
            Normalized::Degenerate => {
                warn!(
                    images = batch.len(),
                    "Batch maximum is zero, returning empty edge maps"
                );
                return Ok(ImageBatch::wrap(Array3::zeros((batch.len(), out_h, out_w))));
            }
        };

        debug!(
            images = batch.len(),
            height = out_h,
            width = out_w,
            raw_only = params.raw_only,
            "Detecting edges"
        );

        let edges: Vec<Array2<f32>> = if normalized.len() >= PARALLEL_FRAME_THRESHOLD {
            let views: Vec<ArrayView2<f32>> = normalized.images().collect();
            views
                .into_par_iter()
                .map(|img| self.detect_normalized(img, params))
                .collect()
        } else {
            normalized
                .images()
                .map(|img| self.detect_normalized(img, params))
                .collect()
        };

        ImageBatch::from_images(&edges)
    }

    /// Single-image convenience wrapper around `detect_edges`.
    pub fn detect_image(&self, image: &Array2<f32>, params: &EdgeParams) -> Result<Array2<f32>> {
        let out = self.detect_edges(&ImageBatch::single(image.clone()), params)?;
        Ok(out.into_array().index_axis_move(ndarray::Axis(0), 0))
    }

    /// Gradient -> suppression -> (optional) hysteresis on an image that is
    /// already normalized and padded.
    fn detect_normalized(&self, image: ArrayView2<f32>, params: &EdgeParams) -> Array2<f32> {
        let field = GradientField::compute(
            image,
            &self.kernels,
            params.preserve_size,
            params.remove_high_val,
        );
        let raw = suppress(&field, &self.kernels, params.tie_break);
        if params.raw_only {
            return raw;
        }

        let result = hysteresis(
            raw.view(),
            &self.kernels,
            params.min_rate,
            params.max_rate,
            params.rounds,
        );
        result.edges()
    }

    fn ensure_fits(&self, height: usize, width: usize, preserve_size: bool) -> Result<()> {
        let min = if preserve_size {
            1
        } else {
            self.kernels.config().gaussian_size + 2 * SOBEL_RADIUS
        };
        if height < min || width < min {
            return Err(CannyError::ImageTooSmall { height, width, min });
        }
        Ok(())
    }
}

/// `CannyDetector::detect_edges` with the default kernels.
pub fn detect_edges(batch: &ImageBatch, params: &EdgeParams) -> Result<ImageBatch> {
    CannyDetector::default().detect_edges(batch, params)
}
