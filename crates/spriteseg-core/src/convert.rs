//! Conversion from decoded `image` buffers
//!
//! Decoding is left to the `image` crate. This module only classifies the
//! decoded buffer into one of the three supported color modes and exposes
//! it as a [`PixelSource`].
//!
//! | `image` variant | [`ColorMode`] |
//! |-----------------|---------------|
//! | `Luma8`         | Grayscale     |
//! | `Rgb8`          | Rgb           |
//! | `Rgba8`         | Rgba          |
//!
//! Any other variant (16-bit, float, gray+alpha) is rejected with
//! [`Error::UnsupportedImageMode`].

use crate::color::{Color, ColorMode};
use crate::error::{Error, Result};
use crate::grid::PixelGrid;
use crate::source::PixelSource;
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

impl PixelGrid {
    /// Copy a decoded image into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedImageMode`] for anything other than
    /// 8-bit grayscale, RGB or RGBA.
    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageLuma8(buf) => {
                PixelGrid::from_gray(buf.width(), buf.height(), buf.as_raw())
            }
            DynamicImage::ImageRgb8(buf) => {
                PixelGrid::from_rgb(buf.width(), buf.height(), buf.as_raw())
            }
            DynamicImage::ImageRgba8(buf) => {
                PixelGrid::from_rgba(buf.width(), buf.height(), buf.as_raw())
            }
            other => Err(Error::UnsupportedImageMode(format!("{:?}", other.color()))),
        }
    }
}

impl TryFrom<&DynamicImage> for PixelGrid {
    type Error = Error;

    fn try_from(image: &DynamicImage) -> Result<Self> {
        PixelGrid::from_dynamic_image(image)
    }
}

impl PixelSource for GrayImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn mode(&self) -> ColorMode {
        ColorMode::Grayscale
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let [v] = self.get_pixel(x, y).0;
        Color::Gray(v)
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn mode(&self) -> ColorMode {
        ColorMode::Rgb
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let [r, g, b] = self.get_pixel(x, y).0;
        Color::Rgb(r, g, b)
    }
}

impl PixelSource for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn mode(&self) -> ColorMode {
        ColorMode::Rgba
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        Color::Rgba(r, g, b, a)
    }
}
