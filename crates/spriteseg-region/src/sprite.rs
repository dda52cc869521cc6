//! Sprite records
//!
//! A [`Sprite`] is one connected foreground region: its canonical label,
//! its inclusive bounding box and the number of pixels carrying the label.

use crate::error::{RegionError, RegionResult};
use crate::unionfind::Label;
use spriteseg_core::BoundingBox;

/// One connected foreground region of a sprite sheet.
///
/// Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite {
    label: Label,
    bounds: BoundingBox,
    pixel_count: u64,
}

impl Sprite {
    /// Create a sprite covering its whole bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidBounds`] if any argument is negative,
    /// the label does not fit a `u32`, a coordinate is not a valid pixel
    /// position (`>= u32::MAX`), or if `x2 < x1` or `y2 < y1`.
    pub fn new(label: i64, x1: i64, y1: i64, x2: i64, y2: i64) -> RegionResult<Self> {
        let (label, bounds) = validate(label, x1, y1, x2, y2)?;
        Ok(Self {
            label,
            bounds,
            pixel_count: bounds.area(),
        })
    }

    /// Create a sprite with a known number of foreground pixels.
    ///
    /// # Errors
    ///
    /// Same as [`Sprite::new`], plus [`RegionError::InvalidParameters`] if
    /// `pixel_count` is zero or exceeds the bounding box area.
    pub fn with_pixel_count(
        label: i64,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        pixel_count: u64,
    ) -> RegionResult<Self> {
        let (label, bounds) = validate(label, x1, y1, x2, y2)?;
        if pixel_count == 0 || pixel_count > bounds.area() {
            return Err(RegionError::InvalidParameters(format!(
                "sprite {} has {} pixels but its box covers {}",
                label,
                pixel_count,
                bounds.area()
            )));
        }
        Ok(Self {
            label,
            bounds,
            pixel_count,
        })
    }

    /// Canonical label
    pub fn label(&self) -> Label {
        self.label
    }

    /// Top-left corner `(x1, y1)`
    pub fn top_left(&self) -> (u32, u32) {
        (self.bounds.x1, self.bounds.y1)
    }

    /// Bottom-right corner `(x2, y2)`, inclusive
    pub fn bottom_right(&self) -> (u32, u32) {
        (self.bounds.x2, self.bounds.y2)
    }

    /// Bounding box
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Number of columns, `x2 - x1 + 1`
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    /// Number of rows, `y2 - y1 + 1`
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Number of pixels carrying this sprite's label
    pub fn pixel_count(&self) -> u64 {
        self.pixel_count
    }

    /// Area of the bounding box
    pub fn surface(&self) -> u64 {
        self.bounds.area()
    }

    /// Fraction of the bounding box covered by the sprite, in `(0, 1]`
    pub fn density(&self) -> f64 {
        self.pixel_count as f64 / self.surface() as f64
    }

    /// Center of the bounding box, rounded down
    pub fn centroid(&self) -> (u32, u32) {
        let b = &self.bounds;
        (
            ((b.x1 as u64 + b.x2 as u64) / 2) as u32,
            ((b.y1 as u64 + b.y2 as u64) / 2) as u32,
        )
    }
}

fn validate(label: i64, x1: i64, y1: i64, x2: i64, y2: i64) -> RegionResult<(Label, BoundingBox)> {
    // A grid holds at most u32::MAX pixels, so the last column or row is u32::MAX - 1
    let coord = |v: i64| (0..u32::MAX as i64).contains(&v);
    let ok = (0..=u32::MAX as i64).contains(&label)
        && [x1, y1, x2, y2].into_iter().all(coord)
        && x2 >= x1
        && y2 >= y1;
    if !ok {
        return Err(RegionError::InvalidBounds {
            label,
            x1,
            y1,
            x2,
            y2,
        });
    }
    Ok((
        label as Label,
        BoundingBox {
            x1: x1 as u32,
            y1: y1 as u32,
            x2: x2 as u32,
            y2: y2 as u32,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let s = Sprite::new(3, 2, 1, 5, 2).unwrap();
        assert_eq!(s.label(), 3);
        assert_eq!(s.top_left(), (2, 1));
        assert_eq!(s.bottom_right(), (5, 2));
        assert_eq!(s.width(), 4);
        assert_eq!(s.height(), 2);
        assert_eq!(s.surface(), 8);
        assert_eq!(s.pixel_count(), 8);
        assert_eq!(s.density(), 1.0);
        assert_eq!(s.centroid(), (3, 1));
    }

    #[test]
    fn test_single_pixel() {
        let s = Sprite::new(1, 4, 0, 4, 0).unwrap();
        assert_eq!(s.width(), 1);
        assert_eq!(s.height(), 1);
        assert_eq!(s.centroid(), (4, 0));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            Sprite::new(1, -1, 0, 0, 0),
            Err(RegionError::InvalidBounds { x1: -1, .. })
        ));
        assert!(matches!(
            Sprite::new(-1, 0, 0, 0, 0),
            Err(RegionError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_inverted_rejected() {
        assert!(matches!(
            Sprite::new(1, 5, 0, 2, 0),
            Err(RegionError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Sprite::new(1, 0, 3, 0, 2),
            Err(RegionError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_too_large_rejected() {
        assert!(matches!(
            Sprite::new(1, 0, 0, u32::MAX as i64 + 1, 0),
            Err(RegionError::InvalidBounds { .. })
        ));
        assert!(matches!(
            Sprite::new(1, 0, 0, u32::MAX as i64, 0),
            Err(RegionError::InvalidBounds { .. })
        ));
        let widest = Sprite::new(u32::MAX as i64, 0, 0, u32::MAX as i64 - 1, 0).unwrap();
        assert_eq!(widest.width(), u32::MAX);
    }

    #[test]
    fn test_pixel_count_bounds() {
        let s = Sprite::with_pixel_count(1, 0, 0, 2, 2, 5).unwrap();
        assert_eq!(s.pixel_count(), 5);
        assert!((s.density() - 5.0 / 9.0).abs() < 1e-12);

        assert!(matches!(
            Sprite::with_pixel_count(1, 0, 0, 2, 2, 0),
            Err(RegionError::InvalidParameters(_))
        ));
        assert!(matches!(
            Sprite::with_pixel_count(1, 0, 0, 2, 2, 10),
            Err(RegionError::InvalidParameters(_))
        ));
    }
}
