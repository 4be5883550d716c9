pub mod batch;
pub mod boundary;
pub mod config;
pub mod consts;
pub mod edges;
pub mod error;
pub mod filters;
pub mod io;
pub mod kernels;
pub mod preprocess;

pub use batch::ImageBatch;
pub use boundary::{extract_boundaries, BoundaryExtractor, BoundaryParams};
pub use config::CannyConfig;
pub use edges::{detect_edges, CannyDetector, EdgeParams, TieBreak};
pub use error::{CannyError, Result};
pub use kernels::{KernelBank, KernelConfig};
