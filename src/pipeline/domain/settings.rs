use serde::{Deserialize, Serialize};

use super::features::FeatureSet;

/// Recommended camera parameters for one photograph. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub aperture: String,
    pub shutter_speed: String,
    pub iso: u32,
    pub focus_mode: String,
    pub metering_mode: String,
    pub white_balance: String,
    pub advice: String,
}

/// What the pipeline hands back to the presentation layer: the settings
/// record plus the feature set it was derived from, for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub features: FeatureSet,
    pub settings: CameraSettings,
}
