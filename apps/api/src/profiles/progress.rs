//! Progress tracker over a stored analysis: readiness summary and skill edits.
//!
//! Edits keep `missing_skills` consistent with the matrix: a skill is Completed
//! exactly when it has no finding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::models::{
    AnalysisReport, Priority, SkillCategory, SkillFinding, SkillMatrixEntry, SkillStatus,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("Skill '{0}' is not in the progress matrix")]
    UnknownSkill(String),

    #[error("Skill '{0}' is already in the progress matrix")]
    DuplicateSkill(String),

    #[error("Skill name cannot be empty")]
    EmptySkill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessSummary {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// completed / total, 0.0 for an empty matrix
    pub readiness: f64,
    pub ready: bool,
}

pub fn readiness(matrix: &[SkillMatrixEntry]) -> ReadinessSummary {
    let total = matrix.len();
    let completed = matrix
        .iter()
        .filter(|e| e.status == SkillStatus::Completed)
        .count();
    ReadinessSummary {
        total,
        completed,
        remaining: total - completed,
        readiness: if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        },
        ready: total > 0 && completed == total,
    }
}

/// Marks a matrix skill (matched case-insensitively) as Completed or To Do.
pub fn set_skill_status(
    report: &mut AnalysisReport,
    skill: &str,
    completed: bool,
) -> Result<(), ProgressError> {
    let entry = report
        .all_required_skills
        .iter_mut()
        .find(|e| e.skill.eq_ignore_ascii_case(skill.trim()))
        .ok_or_else(|| ProgressError::UnknownSkill(skill.trim().to_string()))?;

    let name = entry.skill.clone();
    if completed {
        entry.status = SkillStatus::Completed;
        report.missing_skills.retain(|f| f.skill != name);
    } else {
        entry.status = SkillStatus::ToDo;
        let severity = entry.priority;
        if !report.missing_skills.iter().any(|f| f.skill == name) {
            report.missing_skills.push(SkillFinding {
                skill: name,
                severity,
            });
        }
    }
    Ok(())
}

/// Appends a user-defined skill as a Medium-priority To Do item.
pub fn add_custom_skill(
    report: &mut AnalysisReport,
    skill: &str,
    category: SkillCategory,
) -> Result<(), ProgressError> {
    let skill = skill.trim();
    if skill.is_empty() {
        return Err(ProgressError::EmptySkill);
    }
    if report
        .all_required_skills
        .iter()
        .any(|e| e.skill.eq_ignore_ascii_case(skill))
    {
        return Err(ProgressError::DuplicateSkill(skill.to_string()));
    }

    report.all_required_skills.push(SkillMatrixEntry {
        skill: skill.to_string(),
        category,
        priority: Priority::Medium,
        status: SkillStatus::ToDo,
    });
    report.missing_skills.push(SkillFinding {
        skill: skill.to_string(),
        severity: Priority::Medium,
    });
    Ok(())
}
