use crate::config::WeatherThresholds;
use crate::pipeline::domain::features::WeatherDescriptor;
use image::RgbImage;

/// Sky impression from the top quarter of the frame. A very dark band
/// reads as dusk, a blue-dominant band as clear sky, anything else as
/// overcast. Display-only; the recommender never reads it.
pub fn analyze_weather(pixels: &RgbImage, thresholds: &WeatherThresholds) -> WeatherDescriptor {
    let height = pixels.height();
    let width = pixels.width();
    if height == 0 || width == 0 {
        return WeatherDescriptor::Overcast;
    }

    // Frames shorter than four rows fall back to the full frame.
    let band_rows = (height / 4).max(1);

    let mut sums = [0u64; 3];
    for y in 0..band_rows {
        for x in 0..width {
            let [r, g, b] = pixels.get_pixel(x, y).0;
            sums[0] += r as u64;
            sums[1] += g as u64;
            sums[2] += b as u64;
        }
    }

    let count = (band_rows as u64 * width as u64) as f64;
    let r = sums[0] as f64 / count;
    let g = sums[1] as f64 / count;
    let b = sums[2] as f64 / count;
    let luma = ((r + g + b) / (3.0 * 255.0)) as f32;

    if luma < thresholds.dusk_below {
        WeatherDescriptor::Dusk
    } else if b > r && b > g {
        WeatherDescriptor::Clear
    } else {
        WeatherDescriptor::Overcast
    }
}
