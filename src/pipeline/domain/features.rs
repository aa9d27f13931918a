use serde::{Deserialize, Serialize};

/// Coarse subject category for a photograph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectCategory {
    Landscape,
    Portrait,
    Architecture,
    Food,
    Vehicle,
    Animal,
    Unknown,
}

impl Default for SubjectCategory {
    // Landscape when classification is absent or unmapped
    fn default() -> Self {
        SubjectCategory::Landscape
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightingDescriptor {
    Dim,
    Normal,
    Bright,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorDescriptor {
    Warm,
    Cool,
    Natural,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositionDescriptor {
    PortraitComposition,
    RuleOfThirds,
}

/// Sky impression shown on the result card. Never consulted by the
/// recommender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherDescriptor {
    Clear,
    Overcast,
    Dusk,
}

/// Combined output of the feature analyzers for one photograph.
///
/// Only assembled once every analyzer has reported; a failed analyzer
/// contributes its default rather than leaving a slot unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub subject: SubjectCategory,
    pub lighting: LightingDescriptor,
    pub color: ColorDescriptor,
    pub composition: CompositionDescriptor,
    pub weather: WeatherDescriptor,
    pub confidence: f32,
}
