use favgen_core::{decoders, exporters, pipeline, FAVICON_SIZE};

/// Source logo image. JPEG as shipped, though PNG works too.
const INPUT_PATH: &str = "src/images/images.jpeg";

/// Favicon destination. The directory must already exist.
const OUTPUT_PATH: &str = "public/favicon.png";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    println!("Generating favicon from {}...", INPUT_PATH);

    println!("Decoding image...");
    let decoded = decoders::decode_image(INPUT_PATH)?;
    println!("  Image: {}x{}", decoded.width(), decoded.height());
    if !decoded.source_has_alpha {
        println!("  Alpha channel synthesized (fully opaque)");
    }

    println!("Removing background...");
    let processed = pipeline::process_image(decoded);
    println!("  Cleared {} near-white pixels", processed.transparent_pixels);
    println!("  Resized to {}x{}", FAVICON_SIZE, FAVICON_SIZE);

    exporters::export_png(&processed.pixels, OUTPUT_PATH)?;

    println!("Transparent favicon created: {}", OUTPUT_PATH);
    Ok(())
}
