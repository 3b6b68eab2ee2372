use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageError, RgbaImage};

use crate::error::{DeflickerError, Result};

/// JPEG encode quality for corrected frames.
const JPEG_QUALITY: u8 = 95;

/// Decode an image file into RGBA pixels.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| DeflickerError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgba8())
}

/// Encode a corrected frame, choosing the codec from the file extension.
///
/// JPEG is written at quality 95 and PNG with the fastest compression;
/// both settings are part of the output contract.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => save_jpeg(image, path),
        _ => save_png(image, path),
    }
    .map_err(|e| DeflickerError::Save {
        path: path.to_path_buf(),
        source: e,
    })
}

fn save_jpeg(image: &RgbaImage, path: &Path) -> std::result::Result<(), ImageError> {
    // JPEG has no alpha channel; flatten to RGB first.
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let file = File::create(path)?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY);
    encoder.encode_image(&rgb)?;
    Ok(())
}

fn save_png(image: &RgbaImage, path: &Path) -> std::result::Result<(), ImageError> {
    let file = File::create(path)?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Fast,
        FilterType::NoFilter,
    );
    image.write_with_encoder(encoder)?;
    Ok(())
}
