//! Test fixtures and constants.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Palette configs written to disk by tests
pub mod configs {
    /// One unit each of pure red and pure blue at 2x2
    pub const RED_BLUE_2X2: &str = r##"
resolution: 2
scale: 1
palette:
  - name: Red
    color: "#FF0000"
    stock: 1
  - name: Blue
    color: "#0000FF"
    stock: 1
"##;

    /// Plenty of black and white at 4x4, written at scale 3
    pub const MONO_4X4: &str = r##"
resolution: 4
scale: 3
palette:
  - name: Black
    color: "#000000"
    stock: 100
  - name: White
    color: [255, 255, 255]
    stock: 100
"##;

    /// Fails palette validation
    pub const NEGATIVE_STOCK: &str = r##"
palette:
  - name: Red
    color: "#FF0000"
    stock: -1
"##;

    /// Fails YAML parsing
    pub const MALFORMED: &str = "palette: [ { name: Red, color: ";
}

/// The 2x2 red/blue scenario image:
/// (255,0,0) (0,0,255) / (250,5,5) (0,0,0)
pub fn red_blue_scenario() -> RgbImage {
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([0, 0, 255]));
    img.put_pixel(0, 1, Rgb([250, 5, 5]));
    img.put_pixel(1, 1, Rgb([0, 0, 0]));
    img
}

/// Left half white, right half black
pub fn half_and_half(size: u32) -> RgbImage {
    RgbImage::from_fn(size, size, |x, _| {
        if x < size / 2 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    })
}

/// Encode an image as PNG bytes
pub fn png_bytes(img: &RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
