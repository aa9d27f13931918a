pub mod features;
pub mod settings;

pub use features::{
    ColorDescriptor, CompositionDescriptor, FeatureSet, LightingDescriptor, SubjectCategory,
    WeatherDescriptor,
};
pub use settings::{CameraSettings, Recommendation};
