use serde::{Deserialize, Serialize};

use crate::boundary::{BoundaryExtractor, BoundaryParams};
use crate::edges::{CannyDetector, EdgeParams};
use crate::error::Result;
use crate::kernels::KernelConfig;

/// Complete, serializable configuration for edge detection and boundary
/// extraction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CannyConfig {
    #[serde(default)]
    pub kernels: KernelConfig,
    #[serde(default)]
    pub edges: EdgeParams,
    #[serde(default)]
    pub boundary: BoundaryParams,
}

impl CannyConfig {
    pub fn validate(&self) -> Result<()> {
        self.kernels.validate()?;
        self.edges.validate()?;
        self.boundary.validate()
    }

    pub fn detector(&self) -> Result<CannyDetector> {
        CannyDetector::new(self.kernels.clone())
    }

    pub fn boundary_extractor(&self) -> Result<BoundaryExtractor> {
        BoundaryExtractor::new(self.detector()?, self.boundary.clone())
    }
}
