use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::error::{CannyError, Result};

/// An ordered batch of single-channel images sharing one spatial shape.
///
/// Data layout is `(batch, height, width)`. Images are processed
/// independently; output batches preserve order and count.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBatch {
    data: Array3<f32>,
}

impl ImageBatch {
    /// Wrap an existing `(batch, height, width)` array.
    pub fn from_array(data: Array3<f32>) -> Result<Self> {
        if data.len_of(Axis(0)) == 0 {
            return Err(CannyError::EmptyBatch);
        }
        Ok(Self { data })
    }

    /// Stack individual images into a batch.
    ///
    /// Every image must have the same shape as the first one.
    pub fn from_images(images: &[Array2<f32>]) -> Result<Self> {
        let first = images.first().ok_or(CannyError::EmptyBatch)?;
        let expected = first.dim();

        for (index, img) in images.iter().enumerate().skip(1) {
            if img.dim() != expected {
                return Err(CannyError::ShapeMismatch {
                    index,
                    expected,
                    found: img.dim(),
                });
            }
        }

        let views: Vec<ArrayView2<f32>> = images.iter().map(|img| img.view()).collect();
        let data = ndarray::stack(Axis(0), &views)
            .map_err(|e| CannyError::InvalidParameter(format!("cannot stack batch: {e}")))?;
        Ok(Self { data })
    }

    /// A batch holding a single image.
    pub fn single(image: Array2<f32>) -> Self {
        Self {
            data: image.insert_axis(Axis(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn height(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    pub fn width(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    pub fn image(&self, index: usize) -> ArrayView2<'_, f32> {
        self.data.index_axis(Axis(0), index)
    }

    pub fn images(&self) -> impl Iterator<Item = ArrayView2<'_, f32>> {
        self.data.outer_iter()
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    pub fn into_array(self) -> Array3<f32> {
        self.data
    }

    /// Split back into owned per-image arrays.
    pub fn into_images(self) -> Vec<Array2<f32>> {
        self.data.outer_iter().map(|img| img.to_owned()).collect()
    }

    /// Largest sample across the whole batch.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Smallest sample across the whole batch.
    pub fn min_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Fail with `NonFiniteInput` on the first image holding NaN or infinity.
    pub fn ensure_finite(&self) -> Result<()> {
        for (index, img) in self.images().enumerate() {
            if img.iter().any(|v| !v.is_finite()) {
                return Err(CannyError::NonFiniteInput { index });
            }
        }
        Ok(())
    }

    /// Wrap an array already known to hold at least one image.
    pub(crate) fn wrap(data: Array3<f32>) -> Self {
        debug_assert!(data.len_of(Axis(0)) > 0);
        Self { data }
    }
}
