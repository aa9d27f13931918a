use chrono::{DateTime, Utc};
use image::RgbImage;
use std::sync::Arc;
use uuid::Uuid;

/// A captured photograph handed to the pipeline by the capture layer.
/// The pixel data is shared, never copied, and only read.
#[derive(Clone)]
pub struct Photo {
    id: Uuid,
    pixels: Arc<RgbImage>,
    captured_at: DateTime<Utc>,
}

impl Photo {
    pub fn new(pixels: RgbImage) -> Self {
        Self::with_metadata(Uuid::new_v4(), pixels, Utc::now())
    }

    pub fn with_metadata(id: Uuid, pixels: RgbImage, captured_at: DateTime<Utc>) -> Self {
        Self {
            id,
            pixels: Arc::new(pixels),
            captured_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    pub fn shared_pixels(&self) -> Arc<RgbImage> {
        Arc::clone(&self.pixels)
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.width() == 0 || self.pixels.height() == 0
    }
}
