//! Pixel colors and color modes
//!
//! A [`Color`] is compared for equality only. Its variant always matches
//! the [`ColorMode`] of the image it was read from.
//!
//! # Packed representation
//!
//! Grids store colors as packed 32-bit words:
//!
//! - grayscale: intensity in the low byte
//! - RGB / RGBA: `0xRRGGBBAA` (red in MSB, alpha in LSB, alpha = 255 for RGB)

use std::fmt;

/// Red channel shift in a packed word
pub const RED_SHIFT: u32 = 24;
/// Green channel shift in a packed word
pub const GREEN_SHIFT: u32 = 16;
/// Blue channel shift in a packed word
pub const BLUE_SHIFT: u32 = 8;
/// Alpha channel shift in a packed word
pub const ALPHA_SHIFT: u32 = 0;

/// Alpha value assumed when an RGB color is widened to RGBA.
pub const OPAQUE: u8 = 255;

/// Color mode of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 8-bit grayscale
    Grayscale,
    /// 8-bit per channel RGB
    Rgb,
    /// 8-bit per channel RGB with alpha
    Rgba,
}

impl ColorMode {
    /// Number of 8-bit samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Grayscale => 1,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Grayscale => "L",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

/// A single pixel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Grayscale intensity
    Gray(u8),
    /// Red, green, blue
    Rgb(u8, u8, u8),
    /// Red, green, blue, alpha
    Rgba(u8, u8, u8, u8),
}

impl Color {
    /// The color mode this color belongs to.
    pub fn mode(self) -> ColorMode {
        match self {
            Color::Gray(_) => ColorMode::Grayscale,
            Color::Rgb(..) => ColorMode::Rgb,
            Color::Rgba(..) => ColorMode::Rgba,
        }
    }

    /// Pack into a 32-bit word.
    #[inline]
    pub fn to_packed(self) -> u32 {
        match self {
            Color::Gray(v) => v as u32,
            Color::Rgb(r, g, b) => compose_rgba(r, g, b, OPAQUE),
            Color::Rgba(r, g, b, a) => compose_rgba(r, g, b, a),
        }
    }

    /// Unpack a 32-bit word written by [`Color::to_packed`] for `mode`.
    #[inline]
    pub fn from_packed(word: u32, mode: ColorMode) -> Self {
        match mode {
            ColorMode::Grayscale => Color::Gray((word & 0xff) as u8),
            ColorMode::Rgb => {
                let (r, g, b, _) = extract_rgba(word);
                Color::Rgb(r, g, b)
            }
            ColorMode::Rgba => {
                let (r, g, b, a) = extract_rgba(word);
                Color::Rgba(r, g, b, a)
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Gray(v) => write!(f, "{v}"),
            Color::Rgb(r, g, b) => write!(f, "({r}, {g}, {b})"),
            Color::Rgba(r, g, b, a) => write!(f, "({r}, {g}, {b}, {a})"),
        }
    }
}

/// Compose a packed RGBA word.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// Extract RGBA values from a packed word.
#[inline]
pub fn extract_rgba(word: u32) -> (u8, u8, u8, u8) {
    (
        ((word >> RED_SHIFT) & 0xff) as u8,
        ((word >> GREEN_SHIFT) & 0xff) as u8,
        ((word >> BLUE_SHIFT) & 0xff) as u8,
        ((word >> ALPHA_SHIFT) & 0xff) as u8,
    )
}
