#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};

use deflicker_core::histogram::Histogram;

/// Build a uniform-color RGBA image.
pub fn uniform_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

/// Build a histogram with counts at the given (bucket, count) pairs.
pub fn histogram_with(entries: &[(usize, u32)]) -> Histogram {
    let mut histogram = Histogram::zeroed();
    for &(bucket, count) in entries {
        histogram.counts[bucket] = count;
    }
    histogram
}

/// Write an image as PNG under `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    image
        .save_with_format(&path, ImageFormat::Png)
        .expect("write test image");
    path
}

/// Create a temp directory that lives as long as the returned handle.
pub fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}
