use crate::capability::classifier::ImageClassifier;
use crate::capability::face::FaceDetector;
use crate::common::photo::Photo;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::pipeline::analyzers::{
    analyze_color, analyze_lighting, analyze_weather, CompositionAnalyzer, SubjectClassifier,
};
use crate::pipeline::domain::features::{
    ColorDescriptor, CompositionDescriptor, FeatureSet, LightingDescriptor, WeatherDescriptor,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Runs the feature analyzers concurrently and joins them into one
/// FeatureSet.
///
/// The analyzers have no data dependency on each other, so completion
/// order is unconstrained; the join is the only synchronization point.
pub struct FeatureAggregator {
    subject: SubjectClassifier,
    composition: CompositionAnalyzer,
    config: AnalyzerConfig,
}

impl FeatureAggregator {
    pub fn new(classifier: Arc<dyn ImageClassifier>, faces: Arc<dyn FaceDetector>) -> Self {
        Self::with_config(classifier, faces, AnalyzerConfig::default())
    }

    pub fn with_config(
        classifier: Arc<dyn ImageClassifier>,
        faces: Arc<dyn FaceDetector>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            subject: SubjectClassifier::new(classifier),
            composition: CompositionAnalyzer::new(faces),
            config,
        }
    }

    /// Analyzes one photo. Fails fast on an empty buffer, and with
    /// `Cancelled` if the token fires before every analyzer has
    /// reported. Analyzer tasks abandoned by cancellation run to
    /// completion in the background and their results are discarded.
    pub async fn aggregate(
        &self,
        photo: &Photo,
        cancel: &CancellationToken,
    ) -> Result<FeatureSet, AnalysisError> {
        if photo.is_empty() {
            return Err(AnalysisError::EmptyBuffer);
        }

        let subject_task = tokio::spawn({
            let subject = self.subject.clone();
            let photo = photo.clone();
            async move { subject.classify(&photo).await }
        });
        let composition_task = tokio::spawn({
            let composition = self.composition.clone();
            let photo = photo.clone();
            async move { composition.analyze(&photo).await }
        });
        let lighting_task = tokio::spawn({
            let pixels = photo.shared_pixels();
            let thresholds = self.config.lighting.clone();
            async move { analyze_lighting(&pixels, &thresholds) }
        });
        let color_task = tokio::spawn({
            let pixels = photo.shared_pixels();
            async move { analyze_color(&pixels) }
        });
        let weather_task = tokio::spawn({
            let pixels = photo.shared_pixels();
            let thresholds = self.config.weather.clone();
            async move { analyze_weather(&pixels, &thresholds) }
        });

        let joined = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Cancellation observed while analyzers were in flight");
                return Err(AnalysisError::Cancelled);
            }
            joined = async {
                tokio::join!(
                    subject_task,
                    lighting_task,
                    color_task,
                    composition_task,
                    weather_task
                )
            } => joined,
        };

        // Checked once more at the join point: results from a cancelled
        // call are discarded unconditionally.
        if cancel.is_cancelled() {
            return Err(AnalysisError::Cancelled);
        }

        let (subject, lighting, color, composition, weather) = joined;

        // A panicked analyzer task degrades to that feature's default.
        let features = FeatureSet {
            subject: subject.unwrap_or_default(),
            lighting: lighting.unwrap_or(LightingDescriptor::Normal),
            color: color.unwrap_or(ColorDescriptor::Balanced),
            composition: composition.unwrap_or(CompositionDescriptor::RuleOfThirds),
            weather: weather.unwrap_or(WeatherDescriptor::Overcast),
            confidence: self.config.reported_confidence,
        };

        info!(photo_id = %photo.id(), "Feature analysis complete: {:?}", features);
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::classifier::LabelScore;
    use crate::capability::face::FaceRegion;
    use crate::capability::offline::{OfflineClassifier, OfflineFaceDetector};
    use crate::error::CapabilityError;
    use crate::pipeline::domain::features::SubjectCategory;
    use async_trait::async_trait;
    use image::{ImageBuffer, Rgb};

    struct BrokenClassifier;

    #[async_trait]
    impl ImageClassifier for BrokenClassifier {
        async fn classify(&self, _photo: &Photo) -> Result<Vec<LabelScore>, CapabilityError> {
            Err(CapabilityError::ClassifierUnavailable(
                "model not loaded".to_string(),
            ))
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

    struct StalledClassifier;

    #[async_trait]
    impl ImageClassifier for StalledClassifier {
        async fn classify(&self, _photo: &Photo) -> Result<Vec<LabelScore>, CapabilityError> {
            futures::future::pending::<()>().await;
            Ok(Vec::new())
        }
    }

    fn gray_photo() -> Photo {
        Photo::new(ImageBuffer::from_pixel(16, 16, Rgb([128, 128, 128])))
    }

    #[tokio::test]
    async fn empty_buffer_fails_fast() {
        let aggregator =
            FeatureAggregator::new(Arc::new(OfflineClassifier), Arc::new(OfflineFaceDetector));
        let photo = Photo::new(ImageBuffer::new(0, 0));
        let result = aggregator.aggregate(&photo, &CancellationToken::new()).await;
        assert!(matches!(result, Err(AnalysisError::EmptyBuffer)));
    }

    #[tokio::test]
    async fn capability_outages_degrade_to_defaults() {
        let aggregator =
            FeatureAggregator::new(Arc::new(BrokenClassifier), Arc::new(BrokenFaceDetector));
        let features = aggregator
            .aggregate(&gray_photo(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(features.subject, SubjectCategory::Landscape);
        assert_eq!(features.composition, CompositionDescriptor::RuleOfThirds);
        assert_eq!(features.lighting, LightingDescriptor::Normal);
        assert_eq!(features.color, ColorDescriptor::Balanced);
    }

    #[tokio::test]
    async fn reported_confidence_comes_from_config() {
        let aggregator =
            FeatureAggregator::new(Arc::new(OfflineClassifier), Arc::new(OfflineFaceDetector));
        let features = aggregator
            .aggregate(&gray_photo(), &CancellationToken::new())
            .await
            .unwrap();
        assert!((features.confidence - 0.87).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn cancellation_while_in_flight_yields_cancelled() {
        let aggregator =
            FeatureAggregator::new(Arc::new(StalledClassifier), Arc::new(OfflineFaceDetector));
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = aggregator.aggregate(&gray_photo(), &cancel).await;
        assert!(matches!(result, Err(AnalysisError::Cancelled)));
    }

    #[tokio::test]
    async fn cancellation_wins_even_when_analyzers_finish() {
        // All analyzers complete instantly; the join-point check still
        // discards the results.
        let aggregator =
            FeatureAggregator::new(Arc::new(OfflineClassifier), Arc::new(OfflineFaceDetector));
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = aggregator.aggregate(&gray_photo(), &cancel).await;
        assert!(matches!(result, Err(AnalysisError::Cancelled)));
    }
}
