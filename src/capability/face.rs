use crate::common::photo::Photo;
use crate::error::CapabilityError;
use async_trait::async_trait;

/// Axis-aligned box around a detected face, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> u32 {
        self.width * self.height
    }
}

/// External face detection capability.
#[async_trait]
pub trait FaceDetector: Send + Sync {
    async fn detect(&self, photo: &Photo) -> Result<Vec<FaceRegion>, CapabilityError>;
}
