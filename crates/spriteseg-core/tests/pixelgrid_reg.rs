//! PixelGrid regression test
//!
//! Tests grid construction from raw samples and decoded images, pixel
//! access, and the packed color representation.
//!
//! Run with:
//! ```
//! cargo test -p spriteseg-core --test pixelgrid_reg
//! ```

use image::{DynamicImage, ImageBuffer, Luma, Rgb, Rgba};
use spriteseg_core::{BoundingBox, Color, ColorMode, Error, PixelGrid, PixelSource};
use spriteseg_test::RegParams;

#[test]
fn pixelgrid_reg() {
    let mut rp = RegParams::new("pixelgrid");

    // --- Test 1: raw grayscale samples, row-major ---
    let gray = PixelGrid::from_gray(3, 2, &[0, 1, 2, 3, 4, 5]).expect("gray grid");
    rp.compare_values(3.0, gray.width() as f64, 0.0);
    rp.compare_values(2.0, gray.height() as f64, 0.0);
    rp.compare_values(6.0, gray.pixel_count() as f64, 0.0);
    for y in 0..2 {
        for x in 0..3 {
            let expected = Color::Gray((y * 3 + x) as u8);
            rp.compare_values(1.0, (gray.pixel(x, y) == expected) as u8 as f64, 0.0);
        }
    }

    // --- Test 2: RGB samples ---
    let rgb = PixelGrid::from_rgb(2, 1, &[10, 20, 30, 40, 50, 60]).expect("rgb grid");
    rp.compare_values(
        1.0,
        (rgb.pixel(1, 0) == Color::Rgb(40, 50, 60)) as u8 as f64,
        0.0,
    );
    rp.compare_values(1.0, (rgb.mode() == ColorMode::Rgb) as u8 as f64, 0.0);

    // --- Test 3: decoded images keep their mode ---
    let luma = DynamicImage::ImageLuma8(ImageBuffer::from_fn(4, 4, |x, y| {
        Luma([if x == y { 255 } else { 0 }])
    }));
    let grid = PixelGrid::from_dynamic_image(&luma).expect("luma grid");
    rp.compare_values(1.0, (grid.mode() == ColorMode::Grayscale) as u8 as f64, 0.0);
    rp.compare_values(
        1.0,
        (grid.pixel(2, 2) == Color::Gray(255) && grid.pixel(1, 2) == Color::Gray(0)) as u8 as f64,
        0.0,
    );

    let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(2, 3, Rgba([1, 2, 3, 4])));
    let grid = PixelGrid::from_dynamic_image(&rgba).expect("rgba grid");
    rp.compare_values(
        1.0,
        (grid.pixel(1, 2) == Color::Rgba(1, 2, 3, 4)) as u8 as f64,
        0.0,
    );

    let rgb = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(1, 1, Rgb([9, 9, 9])));
    let grid = PixelGrid::try_from(&rgb).expect("rgb grid");
    rp.compare_values(1.0, (grid.pixel(0, 0) == Color::Rgb(9, 9, 9)) as u8 as f64, 0.0);

    // --- Test 4: unsupported modes are rejected ---
    let wide = DynamicImage::ImageLuma16(ImageBuffer::from_pixel(2, 2, Luma([1000u16])));
    let err = PixelGrid::from_dynamic_image(&wide).unwrap_err();
    rp.compare_values(
        1.0,
        matches!(err, Error::UnsupportedImageMode(_)) as u8 as f64,
        0.0,
    );

    // --- Test 5: bounding boxes ---
    let a = BoundingBox::from_corners(0, 0, 1, 1);
    let b = BoundingBox::from_corners(4, 3, 6, 4);
    rp.compare_values(0.0, a.overlaps(&b) as u8 as f64, 0.0);
    rp.compare_values(6.0, b.area() as f64, 0.0);
    let u = a.union(&b);
    rp.compare_values(7.0, u.width() as f64, 0.0);
    rp.compare_values(5.0, u.height() as f64, 0.0);

    assert!(rp.cleanup(), "pixelgrid regression test failed");
}
