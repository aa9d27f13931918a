use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::common::photo::Photo;
use crate::pipeline::aggregator::FeatureAggregator;
use crate::pipeline::context::photo_context::PhotoContext;
use crate::pipeline::domain::settings::Recommendation;
use crate::pipeline::recommend::recommend;
use futures::task::Context;
use futures::task::Poll;
use futures::Future;
use tokio_util::sync::CancellationToken;
use tower::timeout::TimeoutLayer;
use tower::util::BoxService;
use tower::Service;
use tower::ServiceBuilder;

pub type ServiceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Tower front door for the pipeline: one photo in, one recommendation
/// out. Cancelling the token aborts in-flight calls.
#[derive(Clone)]
pub struct RecommendationService {
    aggregator: Arc<FeatureAggregator>,
    cancel: CancellationToken,
}

impl RecommendationService {
    pub fn new(aggregator: FeatureAggregator) -> Self {
        Self::with_cancellation(aggregator, CancellationToken::new())
    }

    pub fn with_cancellation(aggregator: FeatureAggregator, cancel: CancellationToken) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            cancel,
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Service<Photo> for RecommendationService {
    type Response = Recommendation;
    type Error = ServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, photo: Photo) -> Self::Future {
        let aggregator = Arc::clone(&self.aggregator);
        let cancel = self.cancel.clone();

        Box::pin(async move {
            let context = PhotoContext::new(photo);
            let features = aggregator.aggregate(context.photo(), &cancel).await?;
            let context = context.into_analyzed(features);
            let settings = recommend(context.features());
            let context = context.into_recommended(settings);
            Ok(context.into_recommendation())
        })
    }
}

/// Builds the service, optionally behind a timeout layer. The caller
/// treats an elapsed timeout the same way it treats cancellation.
pub struct RecommendationBuilder {
    aggregator: FeatureAggregator,
    cancel: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl RecommendationBuilder {
    pub fn new(aggregator: FeatureAggregator) -> Self {
        Self {
            aggregator,
            cancel: None,
            timeout: None,
        }
    }

    pub fn cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> BoxService<Photo, Recommendation, ServiceError> {
        let cancel = self.cancel.unwrap_or_else(CancellationToken::new);
        let service = RecommendationService::with_cancellation(self.aggregator, cancel);

        BoxService::new(
            ServiceBuilder::new()
                .option_layer(self.timeout.map(TimeoutLayer::new))
                .service(service),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::offline::{OfflineClassifier, OfflineFaceDetector};
    use crate::error::AnalysisError;
    use image::{ImageBuffer, Rgb};

    fn offline_aggregator() -> FeatureAggregator {
        FeatureAggregator::new(Arc::new(OfflineClassifier), Arc::new(OfflineFaceDetector))
    }

    #[tokio::test]
    async fn white_photo_gets_bright_overrides_on_the_baseline() {
        let mut service = RecommendationService::new(offline_aggregator());
        let photo = Photo::new(ImageBuffer::from_pixel(100, 100, Rgb([255, 255, 255])));

        let recommendation = service.call(photo).await.unwrap();
        assert_eq!(recommendation.settings.iso, 100);
        assert_eq!(recommendation.settings.shutter_speed, "1/500s");
        assert_eq!(recommendation.settings.aperture, "f/8.0");
        assert_eq!(recommendation.settings.focus_mode, "single-point");
    }

    #[tokio::test]
    async fn cancelled_service_call_surfaces_the_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut service =
            RecommendationService::with_cancellation(offline_aggregator(), cancel);
        let photo = Photo::new(ImageBuffer::from_pixel(8, 8, Rgb([0, 0, 0])));

        let error = service.call(photo).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::Cancelled)
        ));
    }

    #[tokio::test]
    async fn builder_with_timeout_still_completes_fast_calls() {
        let mut service = RecommendationBuilder::new(offline_aggregator())
            .timeout(Duration::from_secs(5))
            .build();
        let photo = Photo::new(ImageBuffer::from_pixel(16, 16, Rgb([128, 128, 128])));

        let recommendation = service.call(photo).await.unwrap();
        assert_eq!(recommendation.settings.iso, 200);
    }
}
