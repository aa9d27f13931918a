use shotcoach_rust::error::AppError;
use shotcoach_rust::{
    FeatureAggregator, OfflineClassifier, OfflineFaceDetector, Photo, Recommendation,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::Level;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: shotcoach-rust <image-path>");
        return Ok(());
    };

    let pixels = image::open(&path)?.to_rgb8();
    let photo = Photo::new(pixels);

    // Offline capability stand-ins; wire a real classifier and face
    // detector here to get non-default subject and composition.
    let aggregator =
        FeatureAggregator::new(Arc::new(OfflineClassifier), Arc::new(OfflineFaceDetector));

    let cancel = CancellationToken::new();
    let features = aggregator.aggregate(&photo, &cancel).await?;
    let settings = shotcoach_rust::recommend(&features);

    let recommendation = Recommendation { features, settings };
    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}
