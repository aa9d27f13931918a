pub mod color;
pub mod composition;
pub mod lighting;
pub mod subject;
pub mod weather;

pub use color::analyze_color;
pub use composition::CompositionAnalyzer;
pub use lighting::analyze_lighting;
pub use subject::SubjectClassifier;
pub use weather::analyze_weather;
