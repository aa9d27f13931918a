use crate::config::LightingThresholds;
use crate::pipeline::domain::features::LightingDescriptor;
use image::RgbImage;

/// Mean luminance over every pixel, normalized to [0, 1].
///
/// Every pixel is visited exactly once, accumulated in integers, so the
/// score is identical across runs on the same buffer.
pub fn brightness_score(pixels: &RgbImage) -> f32 {
    let count = pixels.width() as u64 * pixels.height() as u64;
    if count == 0 {
        return 0.0;
    }

    let mut sum: u64 = 0;
    for pixel in pixels.pixels() {
        let [r, g, b] = pixel.0;
        sum += r as u64 + g as u64 + b as u64;
    }

    (sum as f64 / (count as f64 * 3.0 * 255.0)) as f32
}

pub fn analyze_lighting(pixels: &RgbImage, thresholds: &LightingThresholds) -> LightingDescriptor {
    let score = brightness_score(pixels);
    if score < thresholds.dim_below {
        LightingDescriptor::Dim
    } else if score > thresholds.bright_above {
        LightingDescriptor::Bright
    } else {
        LightingDescriptor::Normal
    }
}
