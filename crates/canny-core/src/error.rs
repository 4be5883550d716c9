use thiserror::Error;

#[derive(Error, Debug)]
pub enum CannyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "Image {index} has shape {}x{}, expected {}x{}",
        found.0, found.1, expected.0, expected.1
    )]
    ShapeMismatch {
        index: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Image {height}x{width} is too small, need at least {min}x{min}")]
    ImageTooSmall {
        height: usize,
        width: usize,
        min: usize,
    },

    #[error("Image {index} contains non-finite samples")]
    NonFiniteInput { index: usize },

    #[error("Empty image batch")]
    EmptyBatch,
}

pub type Result<T> = std::result::Result<T, CannyError>;
