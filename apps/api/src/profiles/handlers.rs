use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::models::{AnalysisReport, AnalysisResult, SkillCategory, SkillMatrixEntry};
use crate::errors::AppError;
use crate::profiles::auth::{self, normalize_email};
use crate::profiles::progress::{self, ReadinessSummary};
use crate::profiles::StoreError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    fn validate(&self) -> Result<(), AppError> {
        if self.email.trim().is_empty() {
            return Err(AppError::Validation("email cannot be empty".into()));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("password cannot be empty".into()));
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub email: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub email: String,
    /// Latest stored analysis, `null` for accounts that never saved one.
    pub profile: Option<AnalysisResult>,
}

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    pub summary: ReadinessSummary,
    pub skills: Vec<SkillMatrixEntry>,
}

impl From<&AnalysisReport> for ProgressResponse {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            summary: progress::readiness(&report.all_required_skills),
            skills: report.all_required_skills.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct SkillStatusUpdate {
    pub email: String,
    pub skill: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CustomSkillRequest {
    pub email: String,
    pub skill: String,
    pub category: SkillCategory,
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    req.validate()?;
    auth::register(state.store.as_ref(), &req.email, &req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            email: normalize_email(&req.email),
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()?;
    let profile = auth::login(state.store.as_ref(), &req.email, &req.password).await?;
    Ok(Json(LoginResponse {
        email: normalize_email(&req.email),
        profile,
    }))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<AnalysisResult>, AppError> {
    let email = normalize_email(&params.email);
    let profile = state
        .store
        .load_profile(&email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No saved profile for {email}")))?;
    Ok(Json(profile))
}

/// GET /api/v1/profile/progress
pub async fn handle_get_progress(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<ProgressResponse>, AppError> {
    let email = normalize_email(&params.email);
    let report = state
        .store
        .load_profile(&email)
        .await?
        .and_then(AnalysisResult::into_report)
        .ok_or(StoreError::NoAnalysis(email))?;
    Ok(Json(ProgressResponse::from(&report)))
}

/// PATCH /api/v1/profile/skills
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Json(req): Json<SkillStatusUpdate>,
) -> Result<Json<ProgressResponse>, AppError> {
    let email = normalize_email(&req.email);
    let SkillStatusUpdate {
        skill, completed, ..
    } = req;
    let report = state
        .store
        .update_report(
            &email,
            Box::new(move |report: &mut AnalysisReport| {
                progress::set_skill_status(report, &skill, completed)
            }),
        )
        .await?;
    Ok(Json(ProgressResponse::from(&report)))
}

/// POST /api/v1/profile/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(req): Json<CustomSkillRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let email = normalize_email(&req.email);
    let CustomSkillRequest {
        skill, category, ..
    } = req;
    let report = state
        .store
        .update_report(
            &email,
            Box::new(move |report: &mut AnalysisReport| {
                progress::add_custom_skill(report, &skill, category)
            }),
        )
        .await?;
    Ok(Json(ProgressResponse::from(&report)))
}
