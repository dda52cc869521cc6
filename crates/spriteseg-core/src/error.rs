//! Error types for spriteseg-core
//!
//! Provides a unified error type for pixel grid construction, pixel
//! access and the conversion from decoded images.

use crate::color::ColorMode;
use thiserror::Error;

/// Spriteseg core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw buffer length does not match the image geometry
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Coordinates outside the pixel grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A color of one kind was written into a grid of another kind
    #[error("color mode mismatch: expected {expected:?}, got {actual:?}")]
    ModeMismatch {
        expected: ColorMode,
        actual: ColorMode,
    },

    /// The decoded image is not grayscale, RGB or RGBA
    #[error("unsupported image mode: {0}")]
    UnsupportedImageMode(String),
}

/// Result type alias for spriteseg core operations
pub type Result<T> = std::result::Result<T, Error>;
