pub mod classifier;
pub mod face;
pub mod offline;

pub use classifier::{ImageClassifier, LabelScore};
pub use face::{FaceDetector, FaceRegion};
pub use offline::{OfflineClassifier, OfflineFaceDetector};
