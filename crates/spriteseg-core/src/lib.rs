//! Spriteseg Core - Basic data structures for sprite segmentation
//!
//! This crate provides the pixel-level types shared by the segmentation
//! engine:
//!
//! - [`Color`] / [`ColorMode`] - Pixel colors (grayscale, RGB, RGBA)
//! - [`PixelSource`] - Read-only view over a decoded image
//! - [`PixelGrid`] - Owned, row-major pixel buffer
//! - [`BoundingBox`] - Inclusive axis-aligned box
//!
//! Decoded `image` buffers convert into a [`PixelGrid`] via
//! [`PixelGrid::from_dynamic_image`], and `GrayImage` / `RgbImage` /
//! `RgbaImage` implement [`PixelSource`] directly.

pub mod box_;
pub mod color;
mod convert;
pub mod error;
pub mod grid;
pub mod source;

pub use box_::BoundingBox;
pub use color::{Color, ColorMode};
pub use error::{Error, Result};
pub use grid::PixelGrid;
pub use source::PixelSource;
