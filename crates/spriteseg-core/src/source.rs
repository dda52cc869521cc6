//! Read-only pixel access
//!
//! [`PixelSource`] is the boundary between image decoding and the
//! segmentation engine. Anything that can report its size, its color mode
//! and the color at a coordinate can be segmented.

use crate::color::{Color, ColorMode};

/// Read-only view over a decoded image.
///
/// Coordinates are `(x, y)` with `x` the column in `0..width` and `y` the
/// row in `0..height`. Every color returned by [`PixelSource::pixel`] must
/// be of the kind reported by [`PixelSource::mode`].
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Color mode shared by every pixel
    fn mode(&self) -> ColorMode;

    /// Color at `(x, y)`.
    ///
    /// Callers only pass in-bounds coordinates.
    fn pixel(&self, x: u32, y: u32) -> Color;

    /// Total number of pixels.
    fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn mode(&self) -> ColorMode {
        (**self).mode()
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        (**self).pixel(x, y)
    }
}
