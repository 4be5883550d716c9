pub mod detector;
pub mod gradient;
pub mod hysteresis;
pub mod suppression;

pub use detector::{detect_edges, CannyDetector, EdgeParams};
pub use gradient::{GradientField, OrientationBucket};
pub use hysteresis::{hysteresis, Hysteresis};
pub use suppression::{suppress, TieBreak};
