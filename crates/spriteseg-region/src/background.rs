//! Background color detection and foreground classification
//!
//! The background of a sprite sheet is the color that is not part of any
//! sprite. When the caller does not name it, it is taken to be the most
//! frequent color of the image.

use crate::error::{RegionError, RegionResult};
use log::debug;
use spriteseg_core::color::OPAQUE;
use spriteseg_core::{Color, ColorMode, PixelSource};
use std::collections::HashMap;

/// Find the most frequent color of an image.
///
/// Pixels are counted in row-major order. On a tie, the color that first
/// reached the winning count during that scan is returned.
///
/// # Errors
///
/// Returns [`RegionError::EmptyImage`] if the image has no pixels.
pub fn find_most_common_color<S: PixelSource + ?Sized>(source: &S) -> RegionResult<Color> {
    let width = source.width();
    let height = source.height();
    if width == 0 || height == 0 {
        return Err(RegionError::EmptyImage);
    }

    let mut counts: HashMap<Color, u64> = HashMap::new();
    let mut best = source.pixel(0, 0);
    let mut best_count = 0u64;

    for y in 0..height {
        for x in 0..width {
            let color = source.pixel(x, y);
            let count = counts.entry(color).or_insert(0);
            *count += 1;
            if *count > best_count {
                best_count = *count;
                best = color;
            }
        }
    }

    debug!(
        "most common color {} covers {} of {} pixels ({} distinct)",
        best,
        best_count,
        source.pixel_count(),
        counts.len()
    );
    Ok(best)
}

/// Check if a pixel belongs to a sprite.
#[inline]
pub fn is_foreground(color: Color, background: Color) -> bool {
    color != background
}

/// Bring a caller-supplied background color into the image's mode.
///
/// An RGB color given for an RGBA image is taken as fully opaque. Any
/// other mismatch between color kind and image mode is rejected.
///
/// # Errors
///
/// Returns [`RegionError::IncompatibleBackground`] on a mode mismatch.
pub fn conform_background(color: Color, mode: ColorMode) -> RegionResult<Color> {
    match (color, mode) {
        (Color::Rgb(r, g, b), ColorMode::Rgba) => Ok(Color::Rgba(r, g, b, OPAQUE)),
        (c, m) if c.mode() == m => Ok(c),
        (color, mode) => Err(RegionError::IncompatibleBackground { mode, color }),
    }
}

/// Resolve the background color for `source`.
///
/// Uses `supplied` if present, otherwise infers it with
/// [`find_most_common_color`].
pub fn resolve_background<S: PixelSource + ?Sized>(
    source: &S,
    supplied: Option<Color>,
) -> RegionResult<Color> {
    if source.width() == 0 || source.height() == 0 {
        return Err(RegionError::EmptyImage);
    }
    match supplied {
        Some(color) => conform_background(color, source.mode()),
        None => find_most_common_color(source),
    }
}
