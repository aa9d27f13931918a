pub mod aggregator;
pub mod analyzers;
pub mod context;
pub mod domain;
pub mod recommend;
pub mod service;

pub use aggregator::FeatureAggregator;
pub use domain::{CameraSettings, FeatureSet, Recommendation};
pub use recommend::recommend;
pub use service::{RecommendationBuilder, RecommendationService};
