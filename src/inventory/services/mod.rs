mod field_extractor;
mod html_navigation;
mod software_classifier;

pub use field_extractor::{ExtractionLabels, FieldExtractor};
pub use software_classifier::SoftwareClassifier;
