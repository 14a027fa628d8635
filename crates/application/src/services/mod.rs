pub mod response_classifier;

pub use response_classifier::ResponseClassifier;
