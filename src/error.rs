use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    /// Every pixel of the source image is fully transparent.
    #[error("could not find image content in {width}x{height} image")]
    ContentNotFound { width: u32, height: u32 },

    #[error("failed to read image from {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode PNG for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid padding config: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, PadError>;
