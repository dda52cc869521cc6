//! Inclusive bounding boxes
//!
//! Unlike an `(x, y, w, h)` rectangle, a [`BoundingBox`] stores both
//! corners inclusively, which is how sprite extents are reported.

/// Axis-aligned box with inclusive corners.
///
/// Invariant: `x1 <= x2` and `y1 <= y2`, both below `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Leftmost column
    pub x1: u32,
    /// Topmost row
    pub y1: u32,
    /// Rightmost column
    pub x2: u32,
    /// Bottommost row
    pub y2: u32,
}

impl BoundingBox {
    /// Create a box from two corners in any order.
    pub fn from_corners(xa: u32, ya: u32, xb: u32, yb: u32) -> Self {
        Self {
            x1: xa.min(xb),
            y1: ya.min(yb),
            x2: xa.max(xb),
            y2: ya.max(yb),
        }
    }

    /// Box covering a single pixel.
    pub const fn point(x: u32, y: u32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x,
            y2: y,
        }
    }

    /// Number of columns covered
    #[inline]
    pub fn width(&self) -> u32 {
        self.x2 - self.x1 + 1
    }

    /// Number of rows covered
    #[inline]
    pub fn height(&self) -> u32 {
        self.y2 - self.y1 + 1
    }

    /// Number of pixels covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if a pixel lies inside the box
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Check if two boxes share at least one pixel
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x1 <= other.x2 && other.x1 <= self.x2 && self.y1 <= other.y2 && other.y1 <= self.y2
    }

    /// Smallest box enclosing both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Grow the box to include a pixel
    #[inline]
    pub fn extend_to(&mut self, x: u32, y: u32) {
        self.x1 = self.x1.min(x);
        self.y1 = self.y1.min(y);
        self.x2 = self.x2.max(x);
        self.y2 = self.y2.max(y);
    }
}
