/// Maximum sample value after normalization.
pub const MAX: f32 = 1.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum batch size to use image-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Default Gaussian kernel side length (odd).
pub const DEFAULT_GAUSSIAN_SIZE: usize = 3;

/// Default Gaussian spread.
pub const DEFAULT_GAUSSIAN_SIGMA: f32 = 1.2;

/// Sobel kernel radius; the smoothed image is re-padded by this many rings.
pub const SOBEL_RADIUS: usize = 1;

/// Default lower hysteresis threshold (fraction of MAX).
pub const DEFAULT_MIN_RATE: f32 = 0.10;

/// Default upper hysteresis threshold (fraction of MAX).
pub const DEFAULT_MAX_RATE: f32 = 0.40;

/// Default number of hysteresis propagation rounds. Also the maximum
/// 8-connected distance over which a weak pixel can be linked to a strong one.
pub const DEFAULT_HYSTERESIS_ROUNDS: usize = 11;

/// Default number of erosion passes before boundary edge detection.
pub const DEFAULT_EROSION_ITERATIONS: usize = 2;

/// Default number of dilation passes after boundary edge detection.
pub const DEFAULT_DILATION_ITERATIONS: usize = 2;

/// Coefficient of the 3x3 morphology structuring element.
pub const DEFAULT_ELEMENT_SCALE: f32 = 3.0;

/// Threshold applied to raw local-maximum edges during boundary extraction.
pub const DEFAULT_BOUNDARY_EDGE_THRESHOLD: f32 = 0.5;
