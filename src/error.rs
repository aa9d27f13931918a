use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Analysis Error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Capability Error: {0}")]
    Capability(#[from] CapabilityError),
    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Fatal pipeline conditions, surfaced to the caller.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("The captured buffer has no pixels to analyze.")]
    EmptyBuffer,
    #[error("Analysis was cancelled before all features reported.")]
    Cancelled,
}

// External capability outages. These are recovered inside the owning
// analyzer by falling back to the feature's default; they never reach
// the caller as failures.
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("Image classifier unavailable: {0}")]
    ClassifierUnavailable(String),
    #[error("Face detector unavailable: {0}")]
    FaceDetectorUnavailable(String),
}
