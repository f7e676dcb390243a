//! Image decoders for favicon sources
//!
//! Support for JPEG and PNG input, normalized to 8-bit RGBA.

use std::path::Path;

use image::RgbaImage;

/// Decoded image data
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// RGBA pixel grid at the source dimensions (8 bits per channel)
    pub pixels: RgbaImage,

    /// Whether the source file carried its own alpha channel.
    /// When false, a fully opaque alpha channel was synthesized during decode.
    pub source_has_alpha: bool,
}

impl DecodedImage {
    /// Source image width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Source image height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "jpg" | "jpeg" => decode_rgba(path, "JPEG"),
        "png" => decode_rgba(path, "PNG"),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}

/// Decode a file and normalize it to 8-bit RGBA.
///
/// Sources without an alpha channel (JPEG, opaque PNG) get an alpha channel
/// synthesized at full opacity for every pixel.
fn decode_rgba(path: &Path, format_name: &str) -> Result<DecodedImage, String> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| format!("Failed to open {} file: {}", format_name, e))?;

    let decoded = reader
        .decode()
        .map_err(|e| format!("Failed to decode {} file: {}", format_name, e))?;

    let source_has_alpha = decoded.color().has_alpha();

    Ok(DecodedImage {
        pixels: decoded.to_rgba8(),
        source_has_alpha,
    })
}
