//! Background removal
//!
//! Near-white pixels are made fully transparent so the favicon sits cleanly
//! on any page background. Color channels are left untouched.

use image::RgbaImage;

/// Channel threshold for treating a pixel as background.
///
/// A pixel is background only when red, green, and blue all exceed this value
/// (strictly greater-than, 0-255 scale). A pixel at exactly (200, 200, 200)
/// is kept opaque.
pub const WHITE_THRESHOLD: u8 = 200;

/// Zero the alpha channel of every near-white pixel, in place.
///
/// Dimensions and color channels are unchanged. Returns the number of pixels
/// made transparent.
pub fn remove_background(pixels: &mut RgbaImage) -> usize {
    let mut cleared = 0;

    for pixel in pixels.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD {
            pixel.0[3] = 0;
            cleared += 1;
        }
    }

    cleared
}
