//! Favicon processing pipeline
//!
//! Straight-line pipeline: background removal followed by the favicon
//! resample. Decode and export live in `decoders` and `exporters`; this
//! module owns the in-memory stages between them.

use image::RgbaImage;

use crate::decoders::DecodedImage;
use crate::matte;
use crate::resize;

/// Result of the processing pipeline
pub struct ProcessedFavicon {
    /// Favicon pixel grid, always `FAVICON_SIZE` x `FAVICON_SIZE` RGBA
    pub pixels: RgbaImage,

    /// Source image width before resampling
    pub source_width: u32,

    /// Source image height before resampling
    pub source_height: u32,

    /// Number of source pixels made transparent by background removal
    pub transparent_pixels: usize,
}

/// Execute the in-memory pipeline stages
///
/// Consumes the decoded source: the background matte mutates it in place and
/// the resample replaces it with the favicon-sized result.
pub fn process_image(image: DecodedImage) -> ProcessedFavicon {
    let source_width = image.width();
    let source_height = image.height();

    let mut pixels = image.pixels;
    let transparent_pixels = matte::remove_background(&mut pixels);
    let favicon = resize::resize_to_favicon(&pixels);

    ProcessedFavicon {
        pixels: favicon,
        source_width,
        source_height,
        transparent_pixels,
    }
}
