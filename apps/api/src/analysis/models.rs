//! Result types produced by the analysis pipeline.
//!
//! These are the units persisted to the profile store and returned to callers,
//! so their serialized field names are part of the public contract.

use serde::{Deserialize, Serialize};

/// Priority of a taxonomy skill, and severity of its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

/// A skill the résumé does not evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFinding {
    pub skill: String,
    pub severity: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillStatus {
    Completed,
    #[serde(rename = "To Do")]
    ToDo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    Language,
}

/// One row of the progress matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatrixEntry {
    pub skill: String,
    pub category: SkillCategory,
    pub priority: Priority,
    pub status: SkillStatus,
}

/// Salary band as `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange(pub i64, pub i64);

impl SalaryRange {
    pub fn low(&self) -> i64 {
        self.0
    }

    pub fn high(&self) -> i64 {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringCompany {
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseStatus {
    Computed,
    Pending,
    Future,
    #[serde(rename = "In Progress")]
    InProgress,
}

/// One dated stage of the learning plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub stage: String,
    pub status: PhaseStatus,
    pub date: String,
    pub topics: Vec<String>,
    pub action: String,
}

/// Full output of a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub match_score: u8,
    pub missing_skills: Vec<SkillFinding>,
    pub all_required_skills: Vec<SkillMatrixEntry>,
    pub job_title: String,
    pub detected_role: String,
    pub target_country: String,
    pub salary_range: SalaryRange,
    pub market_demand_score: u8,
    pub hiring_companies: Vec<HiringCompany>,
    pub roadmap: Vec<RoadmapPhase>,
}

/// Uniform failure payload, e.g. when no text could be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub success: bool,
    pub error: String,
}

/// `{success: true, ...report}` or `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Success(AnalysisReport),
    Failure(AnalysisFailure),
}

impl AnalysisResult {
    pub fn failure(error: impl Into<String>) -> Self {
        AnalysisResult::Failure(AnalysisFailure {
            success: false,
            error: error.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        self.report().is_some()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisResult::Success(report) => Some(report),
            AnalysisResult::Failure(_) => None,
        }
    }

    pub fn into_report(self) -> Option<AnalysisReport> {
        match self {
            AnalysisResult::Success(report) => Some(report),
            AnalysisResult::Failure(_) => None,
        }
    }
}
