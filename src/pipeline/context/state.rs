use crate::pipeline::domain::features::FeatureSet;
use crate::pipeline::domain::settings::CameraSettings;

// Markers tracking how far a photo has moved through the pipeline
pub struct CapturedState;
pub struct AnalyzedState {
    pub(super) features: FeatureSet,
}
pub struct RecommendedState {
    pub(super) features: FeatureSet,
    pub(super) settings: CameraSettings,
}

pub trait PipelineState: 'static {
    fn state_name() -> &'static str;
}

impl PipelineState for CapturedState {
    fn state_name() -> &'static str {
        "Captured"
    }
}

impl PipelineState for AnalyzedState {
    fn state_name() -> &'static str {
        "Analyzed"
    }
}

impl PipelineState for RecommendedState {
    fn state_name() -> &'static str {
        "Recommended"
    }
}
