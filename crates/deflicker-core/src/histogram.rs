use image::RgbaImage;

/// Number of luminance buckets; intensities are 8-bit.
pub const BUCKETS: usize = 256;

/// Luminance distribution of a single image.
///
/// One counter per 8-bit luminance bucket. Fully transparent pixels are
/// not counted, so the total equals the number of visible pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Histogram {
    /// Pixel count per luminance bucket.
    pub counts: [u32; BUCKETS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Histogram {
    pub fn zeroed() -> Self {
        Self {
            counts: [0; BUCKETS],
        }
    }

    /// Count every pixel with nonzero alpha into its luminance bucket.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut histogram = Self::zeroed();
        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            if a > 0 {
                histogram.counts[luminance(r, g, b) as usize] += 1;
            }
        }
        histogram
    }

    /// Total number of counted pixels.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| count as u64).sum()
    }

    /// Cumulative distribution, normalized by the total count.
    ///
    /// All zeros for an empty histogram; callers that cannot tolerate
    /// that check `total` first.
    pub fn cdf(&self) -> [f64; BUCKETS] {
        let total = self.total();
        let mut cdf = [0.0; BUCKETS];
        if total == 0 {
            return cdf;
        }
        let mut running = 0u64;
        for (value, &count) in cdf.iter_mut().zip(&self.counts) {
            running += count as u64;
            *value = running as f64 / total as f64;
        }
        cdf
    }
}

/// Integer Rec.601 luma of an RGB triple.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}
