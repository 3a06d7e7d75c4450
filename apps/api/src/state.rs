use std::sync::Arc;

use crate::analysis::analyzer::CareerData;
use crate::analysis::extractor::TextExtractor;
use crate::config::Config;
use crate::profiles::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Profile store. PostgreSQL when configured, in-memory otherwise.
    pub store: Arc<dyn ProfileStore>,
    /// Résumé text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Taxonomy and lookup tables, validated at startup and read-only afterwards.
    pub career: Arc<CareerData>,
    pub config: Config,
}
