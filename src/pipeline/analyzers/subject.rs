use crate::capability::classifier::ImageClassifier;
use crate::common::photo::Photo;
use crate::pipeline::domain::features::SubjectCategory;
use std::sync::Arc;
use tracing::{debug, error};

/// Keyword sets per category, checked in this order against the top
/// label. The position is the tie-break: a label matching several sets
/// resolves to the first one.
const CATEGORY_KEYWORDS: [(SubjectCategory, &[&str]); 6] = [
    (SubjectCategory::Portrait, &["person", "people"]),
    (SubjectCategory::Architecture, &["building", "architecture"]),
    (SubjectCategory::Food, &["food", "meal"]),
    (SubjectCategory::Vehicle, &["car", "vehicle"]),
    (SubjectCategory::Animal, &["animal", "pet"]),
    (SubjectCategory::Landscape, &["landscape", "nature"]),
];

/// Maps a ranked classification onto a coarse subject category.
#[derive(Clone)]
pub struct SubjectClassifier {
    classifier: Arc<dyn ImageClassifier>,
}

impl SubjectClassifier {
    pub fn new(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self { classifier }
    }

    /// A classifier outage or an empty ranking is not an error here; the
    /// subject falls back to Landscape and the pipeline moves on.
    pub async fn classify(&self, photo: &Photo) -> SubjectCategory {
        let ranked = match self.classifier.classify(photo).await {
            Ok(ranked) => ranked,
            Err(e) => {
                error!("Classifier unavailable, defaulting subject: {}", e);
                return SubjectCategory::Landscape;
            }
        };

        let Some(top) = ranked.first() else {
            debug!("Classifier returned an empty ranking");
            return SubjectCategory::Landscape;
        };

        let category = map_label(&top.label);
        debug!(
            "Top label {:?} ({:.2}) mapped to {:?}",
            top.label, top.confidence, category
        );
        category
    }
}

fn map_label(label: &str) -> SubjectCategory {
    let label = label.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| label.contains(keyword)) {
            return category;
        }
    }
    SubjectCategory::Landscape
}
