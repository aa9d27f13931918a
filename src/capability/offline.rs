use crate::common::photo::Photo;
use crate::error::CapabilityError;
use async_trait::async_trait;

use super::classifier::{ImageClassifier, LabelScore};
use super::face::{FaceDetector, FaceRegion};

/// Classifier stand-in for runs without an ML backend. Reports an empty
/// ranking, which drives the subject to its default.
pub struct OfflineClassifier;

#[async_trait]
impl ImageClassifier for OfflineClassifier {
    async fn classify(&self, _photo: &Photo) -> Result<Vec<LabelScore>, CapabilityError> {
        Ok(Vec::new())
    }
}

/// Face-detector stand-in for runs without an ML backend.
pub struct OfflineFaceDetector;

#[async_trait]
impl FaceDetector for OfflineFaceDetector {
    async fn detect(&self, _photo: &Photo) -> Result<Vec<FaceRegion>, CapabilityError> {
        Ok(Vec::new())
    }
}
