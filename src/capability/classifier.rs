use crate::common::photo::Photo;
use crate::error::CapabilityError;
use async_trait::async_trait;

/// One entry of a ranked classification result, best first.
#[derive(Debug, Clone)]
pub struct LabelScore {
    pub label: String,
    pub confidence: f32,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// External image classification capability.
///
/// Implementations wrap whatever model backend is available; the pipeline
/// only depends on the ranked labels coming back.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, photo: &Photo) -> Result<Vec<LabelScore>, CapabilityError>;
}
