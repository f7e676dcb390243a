//! Favicon exporters
//!
//! Export the processed favicon as PNG (lossless, alpha-capable).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

/// Export an RGBA image to PNG
///
/// The parent directory must already exist; it is not created here.
pub fn export_png<P: AsRef<Path>>(pixels: &RgbaImage, path: P) -> Result<(), String> {
    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let mut writer = BufWriter::new(file);

    pixels
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| format!("Failed to write PNG image: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_export_png_success() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([40, 50, 60, 70]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("favicon.png");

        let result = export_png(&img, &path);

        assert!(result.is_ok(), "PNG export should succeed: {:?}", result);
        assert!(path.exists(), "PNG file should exist");

        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0, "PNG file should not be empty");
    }

    #[test]
    fn test_export_png_round_trips_alpha() {
        let img = RgbaImage::from_pixel(32, 32, Rgba([40, 50, 60, 70]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("favicon.png");

        export_png(&img, &path).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(reloaded.dimensions(), (32, 32));
        assert_eq!(
            reloaded.get_pixel(0, 0),
            &Rgba([40, 50, 60, 70]),
            "PNG is lossless; pixels must round-trip exactly"
        );
    }

    #[test]
    fn test_export_png_missing_directory() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let dir = tempdir().unwrap();
        // Parent directories are not created by the exporter
        let path = dir.path().join("missing").join("favicon.png");

        let result = export_png(&img, &path);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to create PNG file"));
        assert!(!path.exists());
    }
}
