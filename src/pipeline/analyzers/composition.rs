use crate::capability::face::FaceDetector;
use crate::common::photo::Photo;
use crate::pipeline::domain::features::CompositionDescriptor;
use std::sync::Arc;
use tracing::{debug, error};

/// Buckets face presence into a compositional class.
#[derive(Clone)]
pub struct CompositionAnalyzer {
    faces: Arc<dyn FaceDetector>,
}

impl CompositionAnalyzer {
    pub fn new(faces: Arc<dyn FaceDetector>) -> Self {
        Self { faces }
    }

    /// A detector outage falls back to rule-of-thirds framing.
    pub async fn analyze(&self, photo: &Photo) -> CompositionDescriptor {
        match self.faces.detect(photo).await {
            Ok(faces) if !faces.is_empty() => {
                debug!("{} face(s) detected", faces.len());
                CompositionDescriptor::PortraitComposition
            }
            Ok(_) => CompositionDescriptor::RuleOfThirds,
            Err(e) => {
                error!("Face detector unavailable, defaulting composition: {}", e);
                CompositionDescriptor::RuleOfThirds
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::face::FaceRegion;
    use crate::error::CapabilityError;
    use async_trait::async_trait;
    use image::{ImageBuffer, Rgb};

    struct StaticFaceDetector {
        faces: Vec<FaceRegion>,
    }

    #[async_trait]
    impl FaceDetector for StaticFaceDetector {
        async fn detect(&self, _photo: &Photo) -> Result<Vec<FaceRegion>, CapabilityError> {
            Ok(self.faces.clone())
        }
    }

    struct BrokenFaceDetector;

    #[async_trait]
    impl FaceDetector for BrokenFaceDetector {
        async fn detect(&self, _photo: &Photo) -> Result<Vec<FaceRegion>, CapabilityError> {
            Err(CapabilityError::FaceDetectorUnavailable(
                "detector offline".to_string(),
            ))
        }
    }

    fn photo() -> Photo {
        Photo::new(ImageBuffer::from_pixel(8, 8, Rgb([128, 128, 128])))
    }

    #[tokio::test]
    async fn any_face_means_portrait_composition() {
        let analyzer = CompositionAnalyzer::new(Arc::new(StaticFaceDetector {
            faces: vec![
                FaceRegion::new(0, 0, 4, 4),
                FaceRegion::new(4, 4, 4, 4),
            ],
        }));
        assert_eq!(
            analyzer.analyze(&photo()).await,
            CompositionDescriptor::PortraitComposition
        );
    }

    #[tokio::test]
    async fn no_faces_means_rule_of_thirds() {
        let analyzer = CompositionAnalyzer::new(Arc::new(StaticFaceDetector { faces: vec![] }));
        assert_eq!(
            analyzer.analyze(&photo()).await,
            CompositionDescriptor::RuleOfThirds
        );
    }

    #[tokio::test]
    async fn detector_outage_means_rule_of_thirds() {
        let analyzer = CompositionAnalyzer::new(Arc::new(BrokenFaceDetector));
        assert_eq!(
            analyzer.analyze(&photo()).await,
            CompositionDescriptor::RuleOfThirds
        );
    }
}
