//! PixelGrid - owned, row-major pixel storage
//!
//! `PixelGrid` is the in-memory image the segmentation engine reads. It
//! stores one packed 32-bit word per pixel (see [`crate::color`]) in a flat
//! buffer indexed `y * width + x`.
//!
//! # Examples
//!
//! ```
//! use spriteseg_core::{Color, ColorMode, PixelGrid, PixelSource};
//!
//! let mut grid = PixelGrid::new(4, 3, ColorMode::Rgb).unwrap();
//! grid.set_pixel(1, 2, Color::Rgb(255, 0, 0)).unwrap();
//! assert_eq!(grid.pixel(1, 2), Color::Rgb(255, 0, 0));
//! assert_eq!(grid.pixel(0, 0), Color::Rgb(0, 0, 0));
//! ```

use crate::color::{Color, ColorMode, OPAQUE, compose_rgba};
use crate::error::{Error, Result};
use crate::source::PixelSource;

/// Owned pixel buffer of a single color mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    mode: ColorMode,
    data: Vec<u32>,
}

impl PixelGrid {
    /// Create a grid filled with black (transparent black for RGBA).
    ///
    /// Zero-area grids are allowed; segmenting one is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the pixel count does not fit
    /// in a `u32`, since every pixel may need its own label.
    pub fn new(width: u32, height: u32, mode: ColorMode) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            mode,
            data: vec![0; len],
        })
    }

    /// Create a grid filled with `color`; the grid takes the color's mode.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            mode: color.mode(),
            data: vec![color.to_packed(); len],
        })
    }

    /// Build a grayscale grid from one byte per pixel.
    pub fn from_gray(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_samples(width, height, ColorMode::Grayscale, bytes)
    }

    /// Build an RGB grid from three bytes per pixel.
    pub fn from_rgb(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_samples(width, height, ColorMode::Rgb, bytes)
    }

    /// Build an RGBA grid from four bytes per pixel.
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_samples(width, height, ColorMode::Rgba, bytes)
    }

    fn from_samples(width: u32, height: u32, mode: ColorMode, bytes: &[u8]) -> Result<Self> {
        let len = checked_len(width, height)?;
        let spp = mode.channels();
        let expected = len * spp;
        if bytes.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(spp)
            .map(|s| match mode {
                ColorMode::Grayscale => s[0] as u32,
                ColorMode::Rgb => compose_rgba(s[0], s[1], s[2], OPAQUE),
                ColorMode::Rgba => compose_rgba(s[0], s[1], s[2], s[3]),
            })
            .collect();

        Ok(Self {
            width,
            height,
            mode,
            data,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color mode
    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Check if the grid has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the color at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_packed(self.data[self.index(x, y)], self.mode))
    }

    /// Set the color at (x, y).
    ///
    /// An RGB color written into an RGBA grid is stored opaque.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::ModeMismatch`] if the color kind does not fit the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let compatible = color.mode() == self.mode
            || (self.mode == ColorMode::Rgba && color.mode() == ColorMode::Rgb);
        if !compatible {
            return Err(Error::ModeMismatch {
                expected: self.mode,
                actual: color.mode(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = color.to_packed();
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl PixelSource for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn mode(&self) -> ColorMode {
        self.mode
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from_packed(self.data[self.index(x, y)], self.mode)
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize> {
    let count = width as u64 * height as u64;
    if count > u32::MAX as u64 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(count as usize)
}
