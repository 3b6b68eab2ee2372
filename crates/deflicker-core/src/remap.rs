use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::histogram::luminance;
use crate::lut::Lut;

/// How a remapping table is applied to a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemapMode {
    /// Map R, G and B independently through the table. Matches the
    /// reference behavior; may shift color balance.
    #[default]
    PerChannel,
    /// Map the luminance only and rescale the channels to follow it,
    /// preserving hue.
    Luminance,
}

/// Apply a LUT to an image, producing the corrected image.
///
/// Alpha is never touched; fully transparent pixels keep whatever RGB
/// they carry (they were never counted, so the table says nothing useful
/// about them either way).
pub fn apply_lut(image: &RgbaImage, lut: &Lut, mode: RemapMode) -> RgbaImage {
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = match mode {
            RemapMode::PerChannel => [lut.map(r), lut.map(g), lut.map(b), a],
            RemapMode::Luminance => remap_luminance(r, g, b, a, lut),
        };
    }
    output
}

/// Rescale all channels by the ratio of mapped to original luminance.
fn remap_luminance(r: u8, g: u8, b: u8, a: u8, lut: &Lut) -> [u8; 4] {
    let y = luminance(r, g, b);
    let mapped = lut.map(y);
    if y == 0 {
        // Nothing to scale from black; take the mapped value directly.
        return [mapped, mapped, mapped, a];
    }
    let scale = mapped as f32 / y as f32;
    let rescale = |channel: u8| ((channel as f32 * scale).round() as u32).min(255) as u8;
    [rescale(r), rescale(g), rescale(b), a]
}
