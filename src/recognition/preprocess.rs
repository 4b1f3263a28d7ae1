//! Image preparation ahead of text recognition.

use image::{DynamicImage, GrayImage, Luma};

/// Contrast factor used when nothing else is configured.
pub const DEFAULT_CONTRAST: f32 = 1.5;

/// Convert to 8-bit grayscale and stretch contrast around mid-gray.
///
/// Each pixel becomes `contrast * v + (0.5 - 0.5 * contrast) * 255`, clamped
/// to `0..=255`. Thin pen strokes separate better from the background this way.
pub fn preprocess(image: &DynamicImage, contrast: f32) -> GrayImage {
    let offset = (0.5 - 0.5 * contrast) * 255.0;
    let mut gray = image.to_luma8();

    for Luma([value]) in gray.pixels_mut() {
        let stretched = contrast * f32::from(*value) + offset;
        *value = stretched.round().clamp(0.0, 255.0) as u8;
    }

    gray
}
