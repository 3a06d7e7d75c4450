// Résumé analysis engine: normalize → classify role → detect skills → score → derive artifacts.
// Every stage is a pure function of its inputs; randomness and the current date are injected.

pub mod analyzer;
pub mod companies;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod roadmap;
pub mod role_classifier;
pub mod salary;
pub mod scorer;
pub mod skill_detector;
pub mod taxonomy;

use thiserror::Error;

/// Message returned when no résumé text could be recovered.
pub const EXTRACTION_FAILURE_MESSAGE: &str =
    "Could not extract text from resume. Please ensure it is a valid PDF.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{}", EXTRACTION_FAILURE_MESSAGE)]
    Extraction,
}
