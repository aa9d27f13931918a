use crate::pipeline::domain::features::ColorDescriptor;
use image::RgbImage;

/// Mean intensity of each channel across the whole buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMeans {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

pub fn channel_means(pixels: &RgbImage) -> ChannelMeans {
    let count = pixels.width() as u64 * pixels.height() as u64;
    if count == 0 {
        return ChannelMeans {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        };
    }

    let mut sums = [0u64; 3];
    for pixel in pixels.pixels() {
        let [r, g, b] = pixel.0;
        sums[0] += r as u64;
        sums[1] += g as u64;
        sums[2] += b as u64;
    }

    ChannelMeans {
        r: sums[0] as f64 / count as f64,
        g: sums[1] as f64 / count as f64,
        b: sums[2] as f64 / count as f64,
    }
}

/// Tone bucket from the dominant channel. Rules are evaluated in order
/// and require strict dominance; any tie lands on Balanced.
pub fn analyze_color(pixels: &RgbImage) -> ColorDescriptor {
    let means = channel_means(pixels);
    if means.r > means.g && means.r > means.b {
        ColorDescriptor::Warm
    } else if means.b > means.r && means.b > means.g {
        ColorDescriptor::Cool
    } else if means.g > means.r && means.g > means.b {
        ColorDescriptor::Natural
    } else {
        ColorDescriptor::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn uniform(r: u8, g: u8, b: u8) -> RgbImage {
        ImageBuffer::from_pixel(16, 16, Rgb([r, g, b]))
    }

    #[test]
    fn red_dominant_buffer_is_warm() {
        assert_eq!(analyze_color(&uniform(200, 50, 50)), ColorDescriptor::Warm);
    }

    #[test]
    fn blue_dominant_buffer_is_cool() {
        assert_eq!(analyze_color(&uniform(50, 50, 200)), ColorDescriptor::Cool);
    }

    #[test]
    fn green_dominant_buffer_is_natural() {
        assert_eq!(
            analyze_color(&uniform(50, 200, 50)),
            ColorDescriptor::Natural
        );
    }

    #[test]
    fn equal_channels_are_balanced() {
        assert_eq!(
            analyze_color(&uniform(120, 120, 120)),
            ColorDescriptor::Balanced
        );
    }

    #[test]
    fn two_way_tie_is_balanced() {
        // Red and green tie at the top; no channel strictly dominates.
        assert_eq!(
            analyze_color(&uniform(200, 200, 50)),
            ColorDescriptor::Balanced
        );
    }
}
