pub mod metrics;
pub mod photo_context;
pub mod state;

pub use metrics::AnalysisMetrics;
pub use photo_context::PhotoContext;
pub use state::{AnalyzedState, CapturedState, PipelineState, RecommendedState};
