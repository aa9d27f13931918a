use crate::pipeline::domain::features::{FeatureSet, LightingDescriptor, SubjectCategory};
use crate::pipeline::domain::settings::CameraSettings;

const LANDSCAPE_ADVICE: &str = "Landscape scene: a narrow aperture deepens the depth of field \
     while a fast shutter keeps the frame sharp.";
const PORTRAIT_ADVICE: &str = "Portrait scene: open the aperture to lift the subject off the \
     background and let face-detect focus hold the eyes.";
const ARCHITECTURE_ADVICE: &str = "Architecture scene: stop well down for edge-to-edge \
     sharpness and keep the verticals straight.";
const FOOD_ADVICE: &str = "Food scene: a moderate aperture keeps the dish in focus while \
     softly blurring the table.";

/// The settings every recommendation starts from.
pub fn baseline() -> CameraSettings {
    CameraSettings {
        aperture: "f/8.0".to_string(),
        shutter_speed: "1/250s".to_string(),
        iso: 200,
        focus_mode: "single-point".to_string(),
        metering_mode: "matrix".to_string(),
        white_balance: "auto".to_string(),
        advice: LANDSCAPE_ADVICE.to_string(),
    }
}

/// Subject overrides. Applied first; the lighting pass may later
/// overwrite the shutter it sets.
fn apply_subject_rules(mut settings: CameraSettings, subject: SubjectCategory) -> CameraSettings {
    match subject {
        SubjectCategory::Portrait => {
            settings.aperture = "f/2.8".to_string();
            settings.shutter_speed = "1/125s".to_string();
            settings.focus_mode = "face-detect".to_string();
            settings.advice = PORTRAIT_ADVICE.to_string();
        }
        SubjectCategory::Architecture => {
            settings.aperture = "f/11".to_string();
            settings.shutter_speed = "1/60s".to_string();
            settings.advice = ARCHITECTURE_ADVICE.to_string();
        }
        SubjectCategory::Food => {
            settings.aperture = "f/4.0".to_string();
            settings.shutter_speed = "1/100s".to_string();
            settings.advice = FOOD_ADVICE.to_string();
        }
        SubjectCategory::Landscape
        | SubjectCategory::Vehicle
        | SubjectCategory::Animal
        | SubjectCategory::Unknown => {}
    }
    settings
}

/// Lighting overrides. Dim and bright rewrite ISO and shutter; focus,
/// aperture and advice are never touched here.
fn apply_lighting_rules(
    mut settings: CameraSettings,
    lighting: LightingDescriptor,
) -> CameraSettings {
    match lighting {
        LightingDescriptor::Dim => {
            settings.iso = 800;
            settings.shutter_speed = "1/60s".to_string();
        }
        LightingDescriptor::Bright => {
            settings.iso = 100;
            settings.shutter_speed = "1/500s".to_string();
        }
        LightingDescriptor::Normal => {}
    }
    settings
}

/// Deterministic, total mapping from features to settings.
///
/// Two ordered override passes over the baseline: subject first, then
/// lighting. A dim portrait therefore keeps face-detect focus but ends
/// at 1/60s, since the lighting pass runs last. Color and weather are
/// display-only and never consulted.
pub fn recommend(features: &FeatureSet) -> CameraSettings {
    let settings = baseline();
    let settings = apply_subject_rules(settings, features.subject);
    apply_lighting_rules(settings, features.lighting)
}
