//! Error types for loading, downscaling and saving images.

use std::path::PathBuf;

/// The source image could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read image '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read image from {origin}: {source}")]
    Stream {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Decoded image from {origin} is malformed: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: InvalidInput,
    },
}

/// The downscaled image could not be persisted.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to write image '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write image to {target}: {source}")]
    Stream {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode PNG for {target}: {source}")]
    Encode {
        target: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot write a {width}x{height} image to {target}: PNG requires at least 1x1")]
    EmptyImage {
        target: String,
        width: u32,
        height: u32,
    },
}

/// A pixel buffer does not agree with its stated dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("pixel buffer for {width}x{height} must be {expected} bytes, got {actual}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("image dimensions {width}x{height} overflow the address space")]
    DimensionsOverflow { width: u32, height: u32 },
}

/// Any failure of a downscale run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}
