//! Label maps and per-label aggregation
//!
//! This module turns the canonical per-pixel labels produced by the raster
//! pass into the two results handed to callers: a dense [`LabelMap`] and
//! one [`Sprite`] per surviving label.

use crate::error::{RegionError, RegionResult};
use crate::sprite::Sprite;
use crate::unionfind::Label;
use log::debug;
use spriteseg_core::BoundingBox;
use std::collections::BTreeMap;
use std::fmt;

/// Per-pixel canonical labels of an image, 0 for background.
///
/// Same dimensions as the source image; read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    data: Vec<Label>,
}

impl LabelMap {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Label at (x, y), or `None` out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<Label> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// One row of labels
    pub fn row(&self, y: u32) -> Option<&[Label]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.data[start..start + self.width as usize])
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Label]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Copy into nested rows (`height` rows of `width` labels)
    pub fn to_rows(&self) -> Vec<Vec<Label>> {
        self.rows().map(<[Label]>::to_vec).collect()
    }

    /// Row-major labels
    pub fn as_slice(&self) -> &[Label] {
        &self.data
    }

    /// Sorted distinct non-zero labels
    pub fn labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self.data.iter().copied().filter(|&l| l != 0).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }

    /// Number of pixels carrying `label`
    pub fn count_label(&self, label: Label) -> usize {
        self.data.iter().filter(|&&l| l == label).count()
    }
}

impl fmt::Display for LabelMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|l| l.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Build the label map from row-major canonical labels.
///
/// # Errors
///
/// Returns [`RegionError::EmptyImage`] for zero dimensions and
/// [`RegionError::InvalidParameters`] if `labels` does not hold exactly
/// `width * height` entries.
pub fn build_label_map(width: u32, height: u32, labels: Vec<Label>) -> RegionResult<LabelMap> {
    if width == 0 || height == 0 {
        return Err(RegionError::EmptyImage);
    }
    let expected = width as usize * height as usize;
    if labels.len() != expected {
        return Err(RegionError::InvalidParameters(format!(
            "label grid holds {} entries, expected {}x{} = {}",
            labels.len(),
            width,
            height,
            expected
        )));
    }
    Ok(LabelMap {
        width,
        height,
        data: labels,
    })
}

/// Compute one sprite per label present in `label_map`.
///
/// Each sprite gets the minimal box enclosing every pixel carrying its
/// label, and the count of those pixels. Labels absorbed into another
/// class never appear.
///
/// # Errors
///
/// Returns [`RegionError::InternalInvariantViolation`] if the accumulated
/// bounds cannot form a valid sprite.
pub fn sprites_from_labels(label_map: &LabelMap) -> RegionResult<BTreeMap<Label, Sprite>> {
    struct Accum {
        bounds: BoundingBox,
        count: u64,
    }

    let mut stats: BTreeMap<Label, Accum> = BTreeMap::new();

    for (y, row) in label_map.rows().enumerate() {
        for (x, &label) in row.iter().enumerate() {
            if label == 0 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            stats
                .entry(label)
                .and_modify(|acc| {
                    acc.bounds.extend_to(x, y);
                    acc.count += 1;
                })
                .or_insert(Accum {
                    bounds: BoundingBox::point(x, y),
                    count: 1,
                });
        }
    }

    let mut sprites = BTreeMap::new();
    for (label, acc) in stats {
        let b = acc.bounds;
        let sprite = Sprite::with_pixel_count(
            label as i64,
            b.x1 as i64,
            b.y1 as i64,
            b.x2 as i64,
            b.y2 as i64,
            acc.count,
        )
        .map_err(|e| RegionError::InternalInvariantViolation(format!("label {label}: {e}")))?;
        sprites.insert(label, sprite);
    }

    debug!("aggregated {} sprites", sprites.len());
    Ok(sprites)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_label_map_shape() {
        let map = build_label_map(3, 2, vec![0, 1, 1, 0, 0, 4]).unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert_eq!(map.to_rows(), vec![vec![0, 1, 1], vec![0, 0, 4]]);
        assert_eq!(map.get(2, 1), Some(4));
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.row(1), Some(&[0, 0, 4][..]));
        assert_eq!(map.row(2), None);
        assert_eq!(map.labels(), vec![1, 4]);
        assert_eq!(map.count_label(1), 2);
        assert_eq!(map.to_string(), "0 1 1\n0 0 4\n");
    }

    #[test]
    fn test_build_label_map_errors() {
        assert!(matches!(
            build_label_map(2, 2, vec![0; 3]),
            Err(RegionError::InvalidParameters(_))
        ));
        assert!(matches!(
            build_label_map(0, 2, vec![]),
            Err(RegionError::EmptyImage)
        ));
    }

    #[test]
    fn test_sprites_from_labels() {
        #[rustfmt::skip]
        let labels = vec![
            1, 1, 0, 0,
            0, 1, 0, 3,
            0, 0, 0, 3,
        ];
        let map = build_label_map(4, 3, labels).unwrap();
        let sprites = sprites_from_labels(&map).unwrap();
        assert_eq!(sprites.len(), 2);

        let s1 = &sprites[&1];
        assert_eq!(s1.top_left(), (0, 0));
        assert_eq!(s1.bottom_right(), (1, 1));
        assert_eq!(s1.pixel_count(), 3);

        let s3 = &sprites[&3];
        assert_eq!(s3.top_left(), (3, 1));
        assert_eq!(s3.bottom_right(), (3, 2));
        assert_eq!(s3.width(), 1);
        assert_eq!(s3.height(), 2);
    }

    #[test]
    fn test_all_background_has_no_sprites() {
        let map = build_label_map(2, 2, vec![0; 4]).unwrap();
        assert!(sprites_from_labels(&map).unwrap().is_empty());
        assert!(map.labels().is_empty());
    }
}
