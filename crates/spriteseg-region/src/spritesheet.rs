//! Sprite sheet segmentation
//!
//! Ties the pipeline together: background resolution, the raster labeling
//! pass, canonicalization, label map construction and sprite aggregation.
//!
//! [`find_sprites`] is the stateless entry point. [`SpriteSheet`] wraps an
//! image with its background color and keeps the result after the first
//! call.

use crate::background::resolve_background;
use crate::conncomp::{ConnectivityType, assign_provisional_labels};
use crate::error::RegionResult;
use crate::label::{LabelMap, build_label_map, sprites_from_labels};
use crate::sprite::Sprite;
use crate::unionfind::Label;
use log::debug;
use spriteseg_core::{Color, PixelSource};
use std::collections::BTreeMap;

/// Options for sprite segmentation
#[derive(Debug, Clone, Default)]
pub struct SpriteSheetOptions {
    /// Background color; inferred as the most common color when `None`
    pub background: Option<Color>,
    /// Connectivity type (8-way by default)
    pub connectivity: ConnectivityType,
}

impl SpriteSheetOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit background color
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Sprites found in an image together with its label map.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    background: Color,
    sprites: BTreeMap<Label, Sprite>,
    label_map: LabelMap,
}

impl Segmentation {
    /// Background color the segmentation was computed against
    pub fn background(&self) -> Color {
        self.background
    }

    /// Sprites keyed by canonical label, in label order
    pub fn sprites(&self) -> &BTreeMap<Label, Sprite> {
        &self.sprites
    }

    /// Per-pixel labels
    pub fn label_map(&self) -> &LabelMap {
        &self.label_map
    }

    /// Split into `(sprites, label_map)`
    pub fn into_parts(self) -> (BTreeMap<Label, Sprite>, LabelMap) {
        (self.sprites, self.label_map)
    }
}

/// Find every sprite of an image.
///
/// # Errors
///
/// Fails on a zero-area image, on a background color that does not match
/// the image mode, or if labeling bookkeeping is inconsistent. No partial
/// result is returned.
///
/// # Examples
///
/// ```
/// use spriteseg_core::PixelGrid;
/// use spriteseg_region::{SpriteSheetOptions, find_sprites};
///
/// // Two single-pixel sprites on a black row
/// let grid = PixelGrid::from_gray(5, 1, &[255, 0, 0, 0, 255]).unwrap();
/// let seg = find_sprites(&grid, &SpriteSheetOptions::new()).unwrap();
/// assert_eq!(seg.sprites().len(), 2);
/// assert_eq!(seg.label_map().to_rows(), vec![vec![1, 0, 0, 0, 2]]);
/// ```
pub fn find_sprites<S: PixelSource + ?Sized>(
    source: &S,
    options: &SpriteSheetOptions,
) -> RegionResult<Segmentation> {
    let background = resolve_background(source, options.background)?;
    segment(source, background, options.connectivity)
}

fn segment<S: PixelSource + ?Sized>(
    source: &S,
    background: Color,
    connectivity: ConnectivityType,
) -> RegionResult<Segmentation> {
    debug!(
        "segmenting {}x{} {} image against background {}",
        source.width(),
        source.height(),
        source.mode(),
        background
    );

    let provisional = assign_provisional_labels(source, background, connectivity)?;
    let (width, height) = (provisional.width(), provisional.height());
    let label_map = build_label_map(width, height, provisional.canonicalize())?;
    let sprites = sprites_from_labels(&label_map)?;

    Ok(Segmentation {
        background,
        sprites,
        label_map,
    })
}

/// An image to be split into sprites.
///
/// The background color is fixed at construction. The segmentation is
/// computed on the first call to [`SpriteSheet::find_sprites`] and reused
/// afterwards.
#[derive(Debug)]
pub struct SpriteSheet<S> {
    source: S,
    background: Color,
    connectivity: ConnectivityType,
    cache: Option<Segmentation>,
}

impl<S: PixelSource> SpriteSheet<S> {
    /// Wrap an image, inferring its background color.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegionError::EmptyImage`] for a zero-area image.
    pub fn new(source: S) -> RegionResult<Self> {
        Self::with_options(source, SpriteSheetOptions::default())
    }

    /// Wrap an image with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RegionError::EmptyImage`] for a zero-area image and
    /// [`crate::RegionError::IncompatibleBackground`] if the supplied
    /// background does not fit the image mode.
    pub fn with_options(source: S, options: SpriteSheetOptions) -> RegionResult<Self> {
        let background = resolve_background(&source, options.background)?;
        Ok(Self {
            source,
            background,
            connectivity: options.connectivity,
            cache: None,
        })
    }

    /// Background color used for segmentation
    pub fn background_color(&self) -> Color {
        self.background
    }

    /// Connectivity used for segmentation
    pub fn connectivity(&self) -> ConnectivityType {
        self.connectivity
    }

    /// The wrapped image
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Sprites and label map of the image, computed once.
    pub fn find_sprites(&mut self) -> RegionResult<&Segmentation> {
        let segmentation = match self.cache.take() {
            Some(cached) => cached,
            None => segment(&self.source, self.background, self.connectivity)?,
        };
        Ok(&*self.cache.insert(segmentation))
    }

    /// Release the image
    pub fn into_source(self) -> S {
        self.source
    }
}
