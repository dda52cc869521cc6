//! Spriteseg - Sprite sheet segmentation for Rust
//!
//! Splits an image made of disjoint sprites over a uniform background into
//! labeled connected regions with bounding boxes.
//!
//! # Example
//!
//! ```
//! use spriteseg::{PixelGrid, region::{SpriteSheetOptions, find_sprites}};
//!
//! // Two sprites on a white 5x1 strip
//! let grid = PixelGrid::from_gray(5, 1, &[0, 255, 255, 255, 7]).unwrap();
//! let (sprites, label_map) = find_sprites(&grid, &SpriteSheetOptions::new())
//!     .unwrap()
//!     .into_parts();
//! assert_eq!(sprites.len(), 2);
//! assert_eq!(label_map.height(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use spriteseg_core::*;

// Re-export the segmentation crate as a module to avoid name conflicts
pub use spriteseg_region as region;
