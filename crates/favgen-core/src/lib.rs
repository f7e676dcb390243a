//! Favgen Core Library
//!
//! Core functionality for turning a logo image into a transparent favicon.

pub mod decoders;
pub mod exporters;
pub mod matte;
pub mod pipeline;
pub mod resize;

// Re-export commonly used types
pub use decoders::DecodedImage;
pub use matte::WHITE_THRESHOLD;
pub use pipeline::{process_image, ProcessedFavicon};
pub use resize::FAVICON_SIZE;
