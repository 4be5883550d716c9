use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::batch::ImageBatch;
use crate::consts::{
    DEFAULT_BOUNDARY_EDGE_THRESHOLD, DEFAULT_DILATION_ITERATIONS, DEFAULT_EROSION_ITERATIONS,
    MAX, PARALLEL_FRAME_THRESHOLD,
};
use crate::edges::{CannyDetector, EdgeParams, TieBreak};
use crate::error::{CannyError, Result};
use crate::filters::morphology::{dilate_n, erode_n};

/// Options for `BoundaryExtractor`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryParams {
    /// Erosion passes applied to each mask before edge detection.
    #[serde(default = "default_erosion_iterations")]
    pub erosion_iterations: usize,
    /// Dilation passes applied to the detected edges.
    #[serde(default = "default_dilation_iterations")]
    pub dilation_iterations: usize,
    /// Raw edge strength at or above which a local maximum counts as edge.
    /// Used as both hysteresis rates, which collapses hysteresis into a
    /// single binary threshold.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f32,
}

fn default_erosion_iterations() -> usize {
    DEFAULT_EROSION_ITERATIONS
}
fn default_dilation_iterations() -> usize {
    DEFAULT_DILATION_ITERATIONS
}
fn default_edge_threshold() -> f32 {
    DEFAULT_BOUNDARY_EDGE_THRESHOLD
}

impl Default for BoundaryParams {
    fn default() -> Self {
        Self {
            erosion_iterations: DEFAULT_EROSION_ITERATIONS,
            dilation_iterations: DEFAULT_DILATION_ITERATIONS,
            edge_threshold: DEFAULT_BOUNDARY_EDGE_THRESHOLD,
        }
    }
}

impl BoundaryParams {
    pub fn validate(&self) -> Result<()> {
        if !self.edge_threshold.is_finite() || !(0.0..=MAX).contains(&self.edge_threshold) {
            return Err(CannyError::InvalidParameter(format!(
                "edge_threshold must lie in [0, {MAX}], got {}",
                self.edge_threshold
            )));
        }
        Ok(())
    }

    /// Edge options used on each eroded mask: raw local maxima, size
    /// preserved, plateaus resolved to a single pixel.
    fn edge_params(&self) -> EdgeParams {
        EdgeParams {
            min_rate: self.edge_threshold,
            max_rate: self.edge_threshold,
            preserve_size: true,
            remove_high_val: false,
            raw_only: true,
            tie_break: TieBreak::Leading,
            ..EdgeParams::default()
        }
    }
}

/// Recovers thin object outlines from segmentation masks:
/// erode -> per-image binary edge detection -> dilate -> binarize.
#[derive(Clone, Debug, Default)]
pub struct BoundaryExtractor {
    detector: CannyDetector,
    params: BoundaryParams,
}

impl BoundaryExtractor {
    pub fn new(detector: CannyDetector, params: BoundaryParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { detector, params })
    }

    pub fn params(&self) -> &BoundaryParams {
        &self.params
    }

    /// Boundary masks for every mask in `masks`, same shape, values in `{0, MAX}`.
    pub fn extract(&self, masks: &ImageBatch) -> Result<ImageBatch> {
        masks.ensure_finite()?;
        debug!(
            images = masks.len(),
            erosions = self.params.erosion_iterations,
            dilations = self.params.dilation_iterations,
            "Extracting boundaries"
        );

        let dilated: Vec<Array2<f32>> = if masks.len() >= PARALLEL_FRAME_THRESHOLD {
            let views: Vec<ArrayView2<f32>> = masks.images().collect();
            views
                .into_par_iter()
                .map(|mask| self.outline(mask))
                .collect::<Result<_>>()?
        } else {
            masks
                .images()
                .map(|mask| self.outline(mask))
                .collect::<Result<_>>()?
        };

        let stacked = ImageBatch::from_images(&dilated)?;
        Ok(binarize(&stacked))
    }

    /// Erosion, edge detection and dilation for one mask. Each mask is its
    /// own detection batch, so normalization never mixes images.
    fn outline(&self, mask: ArrayView2<f32>) -> Result<Array2<f32>> {
        let element = self.detector.kernels().structuring_element().view();
        let eroded = erode_n(mask, element, self.params.erosion_iterations);

        let raw = self
            .detector
            .detect_image(&eroded, &self.params.edge_params())?;
        let threshold = self.params.edge_threshold;
        let edges = raw.mapv(|v| if v >= threshold && v > 0.0 { MAX } else { 0.0 });

        Ok(dilate_n(edges.view(), element, self.params.dilation_iterations))
    }
}

/// 1 wherever a sample differs from the batch-wide minimum, else 0, scaled
/// to `MAX`.
fn binarize(batch: &ImageBatch) -> ImageBatch {
    let min = batch.min_value();
    let out = batch.data().mapv(|v| if v != min { MAX } else { 0.0 });
    ImageBatch::wrap(out)
}

/// `BoundaryExtractor::extract` with default kernels and parameters.
pub fn extract_boundaries(masks: &ImageBatch) -> Result<ImageBatch> {
    BoundaryExtractor::default().extract(masks)
}
