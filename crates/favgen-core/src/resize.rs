//! Favicon resampling

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Favicon edge length in pixels
pub const FAVICON_SIZE: u32 = 32;

/// Resample an image to the fixed favicon canvas.
///
/// Uses Lanczos3 so the alpha channel produced by background removal is
/// interpolated along with the color channels. Returns a new image; the
/// source is left untouched.
pub fn resize_to_favicon(pixels: &RgbaImage) -> RgbaImage {
    imageops::resize(pixels, FAVICON_SIZE, FAVICON_SIZE, FilterType::Lanczos3)
}
