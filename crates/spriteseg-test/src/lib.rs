//! spriteseg-test - Regression test framework for sprite segmentation
//!
//! Provides [`RegParams`], which collects check failures instead of
//! panicking on the first one, and fixtures that build pixel grids from
//! ASCII art.
//!
//! # Usage
//!
//! ```ignore
//! use spriteseg_test::{RegParams, gray_grid_from_ascii};
//!
//! let mut rp = RegParams::new("spritesheet");
//! let grid = gray_grid_from_ascii(&["#.#"]).unwrap();
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print label maps as they are checked

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use spriteseg_core::{Color, ColorMode, PixelGrid};

/// Build a grayscale grid from ASCII rows.
///
/// `'.'` is 0, `'#'` is 255 and a digit `d` is `10 * d`; anything else is
/// rejected.
pub fn gray_grid_from_ascii(rows: &[&str]) -> TestResult<PixelGrid> {
    let mut palette = vec![('.', Color::Gray(0)), ('#', Color::Gray(255))];
    for d in 0..10u8 {
        palette.push(((b'0' + d) as char, Color::Gray(d * 10)));
    }
    grid_from_ascii(rows, &palette)
}

/// Build a grid from ASCII rows and a character palette.
///
/// Every palette color must share one mode, which becomes the grid mode.
pub fn grid_from_ascii(rows: &[&str], palette: &[(char, Color)]) -> TestResult<PixelGrid> {
    let mode = palette
        .first()
        .map(|(_, c)| c.mode())
        .unwrap_or(ColorMode::Grayscale);
    if let Some((ch, c)) = palette.iter().find(|(_, c)| c.mode() != mode) {
        return Err(TestError::Fixture(format!(
            "palette entry '{ch}' is {} but the palette is {mode}",
            c.mode()
        )));
    }

    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
    let mut grid = PixelGrid::new(width, height, mode)?;

    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() as u32 != width {
            return Err(TestError::Fixture(format!(
                "row {y} has {} columns, expected {width}",
                row.chars().count()
            )));
        }
        for (x, ch) in row.chars().enumerate() {
            let color = palette
                .iter()
                .find(|(p, _)| *p == ch)
                .map(|(_, c)| *c)
                .ok_or_else(|| TestError::Fixture(format!("no palette entry for '{ch}'")))?;
            grid.set_pixel(x as u32, y as u32, color)?;
        }
    }
    Ok(grid)
}
