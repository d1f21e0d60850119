//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Heightfield error type
#[derive(Error, Debug)]
pub enum HeightFieldError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
    #[error("Image has no pixels: {0}")]
    EmptyImage(String),
}

pub type HeightFieldResult<T> = Result<T, HeightFieldError>;

impl HeightFieldError {
    /// Whether this error comes from a rejected input value
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, HeightFieldError::InvalidArgument(_))
    }
}
