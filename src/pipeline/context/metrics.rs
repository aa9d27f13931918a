use std::time::Duration;

/// Timings collected while a photo moves through the pipeline.
#[derive(Debug, Clone, Default)]
pub struct AnalysisMetrics {
    analysis_duration: Option<Duration>,
    recommendation_duration: Option<Duration>,
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_analysis_duration(&mut self, duration: Duration) {
        self.analysis_duration = Some(duration);
    }

    pub fn record_recommendation_duration(&mut self, duration: Duration) {
        self.recommendation_duration = Some(duration);
    }

    pub fn analysis_duration(&self) -> Option<Duration> {
        self.analysis_duration
    }

    pub fn recommendation_duration(&self) -> Option<Duration> {
        self.recommendation_duration
    }
}
