//! Error types for spriteseg-region

use spriteseg_core::{Color, ColorMode};
use thiserror::Error;

/// Errors that can occur during sprite segmentation
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] spriteseg_core::Error),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// Supplied background color does not match the image mode
    #[error("background color {color} is not compatible with image mode {mode}")]
    IncompatibleBackground { mode: ColorMode, color: Color },

    /// Sprite bounds violate their invariants
    #[error("invalid sprite bounds: label={label}, ({x1}, {y1})-({x2}, {y2})")]
    InvalidBounds {
        label: i64,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Labeling bookkeeping produced an impossible state
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
