use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::reference::resources::{rank_topics, RankedTopic};
use crate::reference::visas::{visa_pathway, VisaPathway};
use crate::reference::SUPPORTED_COUNTRIES;

#[derive(Deserialize)]
pub struct ResourceQuery {
    /// Comma-separated missing skills.
    pub skills: Option<String>,
}

/// GET /api/v1/reference/countries
pub async fn handle_list_countries() -> Json<&'static [&'static str]> {
    Json(SUPPORTED_COUNTRIES)
}

/// GET /api/v1/reference/visas/:country
pub async fn handle_get_visa(
    Path(country): Path<String>,
) -> Result<Json<&'static VisaPathway>, AppError> {
    visa_pathway(&country)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No visa pathway for {country}")))
}

/// GET /api/v1/reference/resources
pub async fn handle_get_resources(Query(params): Query<ResourceQuery>) -> Json<Vec<RankedTopic>> {
    let skills: Vec<&str> = params
        .skills
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    Json(rank_topics(&skills))
}
