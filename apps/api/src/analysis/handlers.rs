use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::analyzer::{analyze_profile, AnalysisRequest};
use crate::analysis::extractor::{PlainTextExtractor, TextExtractor};
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::profiles::auth::normalize_email;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub job_title: String,
    pub country: String,
    pub resume_text: String,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// Whether the result was stored as the user's latest profile.
    pub saved: bool,
}

/// Form fields collected from a multipart upload.
#[derive(Default)]
struct UploadForm {
    job_title: Option<String>,
    country: Option<String>,
    email: Option<String>,
    resume: Option<Bytes>,
    /// The résumé part was sent as `text/plain` rather than a PDF.
    resume_is_text: bool,
}

/// POST /api/v1/analysis
///
/// Multipart form: `job_title`, `country`, `resume` (PDF, or `text/plain`), optional `email`.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_title") => form.job_title = Some(field.text().await?),
            Some("country") => form.country = Some(field.text().await?),
            Some("email") => form.email = Some(field.text().await?),
            Some("resume") => {
                form.resume_is_text = field
                    .content_type()
                    .is_some_and(|ct| ct.starts_with("text/plain"));
                form.resume = Some(field.bytes().await?);
            }
            _ => {}
        }
    }

    let job_title = required(form.job_title, "job_title")?;
    let country = required(form.country, "country")?;
    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("resume file is required".into()))?;
    info!("Received {} byte resume for '{job_title}'", resume.len());

    let extractor: Arc<dyn TextExtractor> = if form.resume_is_text {
        Arc::new(PlainTextExtractor)
    } else {
        Arc::clone(&state.extractor)
    };
    let resume_text = tokio::task::spawn_blocking(move || extractor.extract_text(&resume))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
        })?;

    let response = run_analysis(&state, &job_title, &country, &resume_text, form.email).await;
    Ok(Json(response))
}

/// POST /api/v1/analysis/text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let job_title = required(Some(req.job_title), "job_title")?;
    let country = required(Some(req.country), "country")?;
    let response = run_analysis(&state, &job_title, &country, &req.resume_text, req.email).await;
    Ok(Json(response))
}

fn required(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("{name} cannot be empty")))
}

async fn run_analysis(
    state: &AppState,
    job_title: &str,
    country: &str,
    resume_text: &str,
    email: Option<String>,
) -> AnalyzeResponse {
    let mut rng = company_rng(state.config.company_sample_seed);
    let result = analyze_profile(
        &state.career,
        AnalysisRequest {
            job_title,
            resume_text,
            country,
        },
        &mut rng,
        Utc::now().date_naive(),
    );

    let email = email
        .map(|e| normalize_email(&e))
        .filter(|e| !e.is_empty());
    let saved = match email {
        Some(email) if result.is_success() => {
            match state.store.save_profile(&email, &result).await {
                Ok(()) => {
                    info!("Saved analysis for {email}");
                    true
                }
                Err(e) => {
                    warn!("Could not save analysis for {email}: {e}");
                    false
                }
            }
        }
        _ => false,
    };

    AnalyzeResponse { result, saved }
}

fn company_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}
