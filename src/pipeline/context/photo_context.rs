use crate::common::photo::Photo;
use crate::pipeline::context::metrics::AnalysisMetrics;
use crate::pipeline::context::state::{AnalyzedState, CapturedState, RecommendedState};
use crate::pipeline::domain::features::FeatureSet;
use crate::pipeline::domain::settings::{CameraSettings, Recommendation};
use std::sync::Arc;
use std::time::{Duration, Instant};

// PhotoContext with compile-time stage tracking via the state parameter
pub struct PhotoContext<S> {
    photo: Arc<Photo>,
    metrics: AnalysisMetrics,
    processing_start: Instant,
    state: S,
}

impl<S> PhotoContext<S> {
    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    pub fn metrics(&self) -> &AnalysisMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }
}

impl PhotoContext<CapturedState> {
    pub fn new(photo: Photo) -> Self {
        Self {
            photo: Arc::new(photo),
            metrics: AnalysisMetrics::new(),
            processing_start: Instant::now(),
            state: CapturedState,
        }
    }

    pub fn into_analyzed(mut self, features: FeatureSet) -> PhotoContext<AnalyzedState> {
        self.metrics.record_analysis_duration(self.elapsed());
        PhotoContext::<AnalyzedState> {
            photo: self.photo,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: AnalyzedState { features },
        }
    }
}

impl PhotoContext<AnalyzedState> {
    pub fn features(&self) -> &FeatureSet {
        &self.state.features
    }

    pub fn into_recommended(mut self, settings: CameraSettings) -> PhotoContext<RecommendedState> {
        self.metrics.record_recommendation_duration(self.elapsed());
        PhotoContext::<RecommendedState> {
            photo: self.photo,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: RecommendedState {
                features: self.state.features,
                settings,
            },
        }
    }
}

impl PhotoContext<RecommendedState> {
    pub fn features(&self) -> &FeatureSet {
        &self.state.features
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.state.settings
    }

    pub fn into_recommendation(self) -> Recommendation {
        Recommendation {
            features: self.state.features,
            settings: self.state.settings,
        }
    }
}
