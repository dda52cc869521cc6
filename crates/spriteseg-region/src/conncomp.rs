//! Connected component labeling
//!
//! This module implements the raster pass of sprite labeling. Foreground
//! pixels are visited in row-major order; each one looks only at the
//! neighbors that were already visited (its forward neighborhood), takes
//! the smallest provisional label found there, and records every other
//! label it touches as equivalent in a [`LabelEquivalence`].
//!
//! A single rewrite pass through [`ProvisionalLabels::canonicalize`] then
//! replaces each provisional label by the minimum of its class.

use crate::background::is_foreground;
use crate::error::{RegionError, RegionResult};
use crate::unionfind::{Label, LabelEquivalence};
use log::{debug, trace};
use spriteseg_core::{Color, PixelSource};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Offsets `(dx, dy)` of the already-visited neighbors, in the order
    /// they are inspected.
    pub fn forward_offsets(self) -> &'static [(i64, i64)] {
        match self {
            ConnectivityType::FourWay => &[(-1, 0), (0, -1)],
            ConnectivityType::EightWay => &[(-1, 0), (-1, -1), (0, -1), (1, -1)],
        }
    }
}

/// Result of the raster pass: a provisional label per pixel plus the
/// equivalences discovered between those labels.
#[derive(Debug, Clone)]
pub struct ProvisionalLabels {
    width: u32,
    height: u32,
    /// Row-major, 0 for background
    labels: Vec<Label>,
    equivalence: LabelEquivalence,
    merges: usize,
}

impl ProvisionalLabels {
    /// Width of the labeled image
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the labeled image
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Provisional labels, row-major
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Number of provisional labels handed out
    pub fn provisional_count(&self) -> usize {
        self.equivalence.len()
    }

    /// Number of unions that joined two previously separate classes
    pub fn merge_count(&self) -> usize {
        self.merges
    }

    /// Replace every provisional label by its canonical label.
    ///
    /// Returns the row-major canonical grid; background stays 0.
    pub fn canonicalize(mut self) -> Vec<Label> {
        let table = self.equivalence.resolve_all();
        for label in self.labels.iter_mut() {
            *label = table[*label as usize];
        }
        self.labels
    }
}

/// Run the raster pass over `source`.
///
/// # Arguments
///
/// * `source` - Image to label
/// * `background` - Color that is not part of any sprite; must be of the
///   image's color kind
/// * `connectivity` - Which already-visited neighbors connect
///
/// # Errors
///
/// Returns [`RegionError::EmptyImage`] for zero-area images and
/// [`RegionError::IncompatibleBackground`] if the background color kind
/// differs from the image mode.
pub fn assign_provisional_labels<S: PixelSource + ?Sized>(
    source: &S,
    background: Color,
    connectivity: ConnectivityType,
) -> RegionResult<ProvisionalLabels> {
    let width = source.width();
    let height = source.height();
    if width == 0 || height == 0 {
        return Err(RegionError::EmptyImage);
    }
    if background.mode() != source.mode() {
        return Err(RegionError::IncompatibleBackground {
            mode: source.mode(),
            color: background,
        });
    }

    let w = width as usize;
    let offsets = connectivity.forward_offsets();
    let mut labels: Vec<Label> = vec![0; w * height as usize];
    let mut equivalence = LabelEquivalence::new();
    let mut merges = 0usize;

    // Distinct neighbor labels of the current pixel
    let mut found = [0 as Label; 4];

    for y in 0..height {
        for x in 0..width {
            if !is_foreground(source.pixel(x, y), background) {
                continue;
            }

            let mut n = 0;
            for &(dx, dy) in offsets {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 {
                    continue;
                }
                let neighbor = labels[ny as usize * w + nx as usize];
                if neighbor != 0 && !found[..n].contains(&neighbor) {
                    found[n] = neighbor;
                    n += 1;
                }
            }

            let label = match found[..n].iter().min() {
                None => equivalence.new_class(),
                Some(&min) => {
                    for &other in &found[..n] {
                        if other != min && equivalence.union(min, other) {
                            trace!("({x}, {y}): label {other} joins {min}");
                            merges += 1;
                        }
                    }
                    min
                }
            };
            labels[y as usize * w + x as usize] = label;
        }
    }

    debug!(
        "raster pass over {}x{}: {} provisional labels, {} merges",
        width,
        height,
        equivalence.len(),
        merges
    );

    Ok(ProvisionalLabels {
        width,
        height,
        labels,
        equivalence,
        merges,
    })
}
