pub mod capability;
pub mod common;
pub mod config;
pub mod error;
pub mod pipeline;

pub use capability::{
    FaceDetector, FaceRegion, ImageClassifier, LabelScore, OfflineClassifier, OfflineFaceDetector,
};
pub use common::Photo;
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, AppError, CapabilityError};
pub use pipeline::{
    recommend, CameraSettings, FeatureAggregator, FeatureSet, Recommendation,
    RecommendationBuilder, RecommendationService,
};
