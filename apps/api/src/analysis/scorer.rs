//! Scoring: turns per-skill detection outcomes into a bounded match score,
//! the missing-skill list and the progress matrix.

use crate::analysis::models::{Priority, SkillCategory, SkillFinding, SkillMatrixEntry, SkillStatus};
use crate::analysis::taxonomy::RoleSkills;

/// Lowest score ever shown for a role with critical skills.
pub const MIN_MATCH_SCORE: u8 = 18;
/// Highest score ever shown; a perfect résumé still has room to grow.
pub const MAX_MATCH_SCORE: u8 = 98;
/// Score used when a role defines no critical skills.
pub const NO_CRITICAL_SKILLS_SCORE: u8 = 70;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillAssessment {
    pub match_score: u8,
    pub matched_critical: usize,
    pub total_critical: usize,
    /// Missing critical skills (High) first, then missing nice-to-haves (Medium).
    pub missing_skills: Vec<SkillFinding>,
    /// One entry per taxonomy skill, critical first.
    pub skill_matrix: Vec<SkillMatrixEntry>,
}

/// `matched / total` as a truncated percentage clamped to
/// `[MIN_MATCH_SCORE, MAX_MATCH_SCORE]`.
pub fn match_score(matched_critical: usize, total_critical: usize) -> u8 {
    if total_critical == 0 {
        return NO_CRITICAL_SKILLS_SCORE;
    }
    let raw = matched_critical.min(total_critical) * 100 / total_critical;
    raw.clamp(MIN_MATCH_SCORE as usize, MAX_MATCH_SCORE as usize) as u8
}

/// Assesses every skill of `role` with `is_present`, called once per skill.
pub fn assess_role<F>(role: &RoleSkills, mut is_present: F) -> SkillAssessment
where
    F: FnMut(&str) -> bool,
{
    let mut missing_skills = Vec::new();
    let mut skill_matrix = Vec::with_capacity(role.critical.len() + role.nice_to_have.len());
    let mut matched_critical = 0;

    let tiers = [
        (&role.critical, Priority::High),
        (&role.nice_to_have, Priority::Medium),
    ];
    for (skills, priority) in tiers {
        for skill in skills {
            let present = is_present(skill);
            if present {
                if priority == Priority::High {
                    matched_critical += 1;
                }
            } else {
                missing_skills.push(SkillFinding {
                    skill: skill.clone(),
                    severity: priority,
                });
            }
            skill_matrix.push(SkillMatrixEntry {
                skill: skill.clone(),
                category: SkillCategory::Technical,
                priority,
                status: if present {
                    SkillStatus::Completed
                } else {
                    SkillStatus::ToDo
                },
            });
        }
    }

    let total_critical = role.critical.len();
    SkillAssessment {
        match_score: match_score(matched_critical, total_critical),
        matched_critical,
        total_critical,
        missing_skills,
        skill_matrix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devops() -> RoleSkills {
        RoleSkills::new(
            "DevOps Engineer",
            &["Linux", "Docker", "Kubernetes", "CI/CD"],
            &["Terraform", "Ansible"],
        )
    }

    #[test]
    fn test_half_matched_scores_fifty() {
        assert_eq!(match_score(5, 10), 50);
    }

    #[test]
    fn test_zero_matched_clamps_to_floor() {
        assert_eq!(match_score(0, 10), MIN_MATCH_SCORE);
    }

    #[test]
    fn test_all_matched_clamps_to_ceiling() {
        assert_eq!(match_score(8, 8), MAX_MATCH_SCORE);
    }

    #[test]
    fn test_fraction_truncates() {
        assert_eq!(match_score(2, 3), 66);
    }

    #[test]
    fn test_no_critical_skills_uses_fixed_score() {
        assert_eq!(match_score(0, 0), NO_CRITICAL_SKILLS_SCORE);
    }

    #[test]
    fn test_score_bounded_and_monotonic() {
        for total in 1..=12 {
            let mut previous = 0;
            for matched in 0..=total {
                let score = match_score(matched, total);
                assert!((MIN_MATCH_SCORE..=MAX_MATCH_SCORE).contains(&score));
                assert!(score >= previous, "{matched}/{total} decreased");
                previous = score;
            }
        }
    }

    #[test]
    fn test_assessment_severity_follows_source_list() {
        let role = devops();
        let assessment = assess_role(&role, |s| s == "Docker" || s == "Ansible");

        assert_eq!(assessment.matched_critical, 1);
        assert_eq!(assessment.total_critical, 4);
        assert_eq!(assessment.match_score, 25);

        let missing: Vec<(&str, Priority)> = assessment
            .missing_skills
            .iter()
            .map(|f| (f.skill.as_str(), f.severity))
            .collect();
        assert_eq!(
            missing,
            vec![
                ("Linux", Priority::High),
                ("Kubernetes", Priority::High),
                ("CI/CD", Priority::High),
                ("Terraform", Priority::Medium),
            ]
        );
    }

    #[test]
    fn test_matrix_status_mirrors_missing_list() {
        let role = devops();
        let assessment = assess_role(&role, |s| s.len() > 5);

        assert_eq!(assessment.skill_matrix.len(), 6);
        for entry in &assessment.skill_matrix {
            let missing = assessment.missing_skills.iter().any(|f| f.skill == entry.skill);
            assert_eq!(entry.status == SkillStatus::Completed, !missing);
            assert_eq!(entry.category, SkillCategory::Technical);
        }
    }

    #[test]
    fn test_nice_to_have_matches_do_not_raise_score() {
        let role = devops();
        let without = assess_role(&role, |_| false);
        let with_extras = assess_role(&role, |s| s == "Terraform" || s == "Ansible");
        assert_eq!(without.match_score, with_extras.match_score);
    }

    #[test]
    fn test_role_without_critical_skills() {
        let role = RoleSkills::new("Intern", &[], &["Git"]);
        let assessment = assess_role(&role, |_| true);
        assert_eq!(assessment.match_score, NO_CRITICAL_SKILLS_SCORE);
        assert!(assessment.missing_skills.is_empty());
    }
}
