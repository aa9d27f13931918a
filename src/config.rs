/// Tunable parameters for the feature analyzers.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub lighting: LightingThresholds,
    pub weather: WeatherThresholds,
    /// Constant confidence reported on every feature set.
    pub reported_confidence: f32,
}

/// Brightness buckets for the lighting analyzer, on a [0, 1] score.
#[derive(Debug, Clone)]
pub struct LightingThresholds {
    pub dim_below: f32,
    pub bright_above: f32,
}

/// Sky-band cutoffs for the weather analyzer.
#[derive(Debug, Clone)]
pub struct WeatherThresholds {
    pub dusk_below: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lighting: LightingThresholds {
                dim_below: 0.3,
                bright_above: 0.7,
            },
            weather: WeatherThresholds { dusk_below: 0.25 },
            reported_confidence: 0.87,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), String> {
        let LightingThresholds {
            dim_below,
            bright_above,
        } = self.lighting;
        if !(0.0..=1.0).contains(&dim_below) || !(0.0..=1.0).contains(&bright_above) {
            return Err("lighting thresholds must lie in [0, 1]".to_string());
        }
        if dim_below >= bright_above {
            return Err("dim threshold must sit below the bright threshold".to_string());
        }
        if !(0.0..=1.0).contains(&self.weather.dusk_below) {
            return Err("dusk threshold must lie in [0, 1]".to_string());
        }
        if !(0.0..=1.0).contains(&self.reported_confidence) {
            return Err("reported confidence must lie in [0, 1]".to_string());
        }
        Ok(())
    }
}
