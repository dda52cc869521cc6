//! spriteseg-region - Sprite segmentation for sprite sheets
//!
//! This crate splits an image made of disjoint sprites drawn over a
//! uniform background into connected regions:
//!
//! - **Background detection** - Most frequent color, or a supplied one
//! - **Connected component labeling** - Single raster pass with label
//!   equivalences kept in a union-find forest
//! - **Label maps** - Per-pixel canonical labels, 0 for background
//! - **Sprites** - Label, bounding box and pixel statistics per region
//!
//! # Examples
//!
//! ```
//! use spriteseg_core::{Color, PixelGrid};
//! use spriteseg_region::{SpriteSheet, SpriteSheetOptions};
//!
//! // A 3x3 "plus" on black
//! let grid = PixelGrid::from_gray(3, 3, &[0, 9, 0, 9, 9, 9, 0, 9, 0]).unwrap();
//! let options = SpriteSheetOptions::new().with_background(Color::Gray(0));
//! let mut sheet = SpriteSheet::with_options(grid, options).unwrap();
//!
//! let seg = sheet.find_sprites().unwrap();
//! assert_eq!(seg.sprites().len(), 1);
//! let sprite = seg.sprites().values().next().unwrap();
//! assert_eq!(sprite.top_left(), (0, 0));
//! assert_eq!(sprite.bottom_right(), (2, 2));
//! assert_eq!(sprite.pixel_count(), 5);
//! ```

pub mod background;
pub mod conncomp;
pub mod error;
pub mod label;
pub mod sprite;
pub mod spritesheet;
pub mod unionfind;

// Re-export core types
pub use spriteseg_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use background::{conform_background, find_most_common_color, is_foreground, resolve_background};
pub use conncomp::{ConnectivityType, ProvisionalLabels, assign_provisional_labels};
pub use label::{LabelMap, build_label_map, sprites_from_labels};
pub use sprite::Sprite;
pub use spritesheet::{Segmentation, SpriteSheet, SpriteSheetOptions, find_sprites};
pub use unionfind::{Label, LabelEquivalence};
