//! Learning roadmap: a quarter-by-quarter plan derived from the missing skills.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::analysis::models::{PhaseStatus, Priority, RoadmapPhase, SkillFinding};

/// Maximum bullets per phase.
pub const MAX_PHASE_TOPICS: usize = 5;
/// Skills expanded into topics per phase.
const SKILLS_PER_PHASE: usize = 3;
/// Sub-topics taken from each skill.
const TOPICS_PER_SKILL: usize = 2;

/// Topics used in the specialization phase when no skills remain for it.
const FILLER_SKILLS: [&str; 2] = ["System Design", "Cloud Architecture"];

/// A calendar quarter, rendered as `YYYY-Qn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quarter {
    pub year: i32,
    pub quarter: u32,
}

impl Quarter {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            quarter: (date.month() - 1) / 3 + 1,
        }
    }

    pub fn next(self) -> Self {
        if self.quarter >= 4 {
            Self {
                year: self.year + 1,
                quarter: 1,
            }
        } else {
            Self {
                year: self.year,
                quarter: self.quarter + 1,
            }
        }
    }

    pub fn label(&self) -> String {
        format!("{}-Q{}", self.year, self.quarter)
    }
}

/// Skill → ordered sub-topics used to expand roadmap bullets.
#[derive(Debug, Clone, Default)]
pub struct TopicTable {
    topics: HashMap<String, Vec<String>>,
}

impl TopicTable {
    pub fn new(topics: HashMap<String, Vec<String>>) -> Self {
        Self { topics }
    }

    pub fn builtin() -> Self {
        let entries: [(&str, &[&str]); 9] = [
            (
                "Kubernetes",
                &[
                    "Container Orchestration",
                    "Pods & Services",
                    "Deployments",
                    "Helm Charts",
                    "Ingress Controllers",
                ],
            ),
            (
                "Docker",
                &[
                    "Containerization",
                    "Dockerfiles",
                    "Multi-stage Builds",
                    "Docker Compose",
                    "Networking",
                ],
            ),
            (
                "AWS",
                &[
                    "EC2 & S3",
                    "IAM Roles",
                    "VPC Networking",
                    "Lambda Serverless",
                    "CloudWatch",
                ],
            ),
            (
                "CI/CD",
                &[
                    "Pipeline as Code",
                    "GitHub Actions / Jenkins",
                    "Automated Testing",
                    "Blue/Green Deployment",
                ],
            ),
            (
                "Python",
                &[
                    "Scripting",
                    "Automation Libraries (boto3)",
                    "API Development (FastAPI/Flask)",
                    "Data Structures",
                ],
            ),
            (
                "Linux",
                &[
                    "Shell Scripting",
                    "File System Permissions",
                    "Process Management",
                    "Networking commands (curl, netstat)",
                ],
            ),
            (
                "Terraform",
                &["IaC Concepts", "State Management", "Modules", "Providers"],
            ),
            (
                "SQL",
                &["Joins", "Indexing", "Normalization", "Transactions"],
            ),
            (
                "React",
                &[
                    "Components",
                    "Hooks",
                    "State Management (Redux/Context)",
                    "Router",
                ],
            ),
        ];

        Self::new(
            entries
                .into_iter()
                .map(|(skill, subs)| {
                    (
                        skill.to_string(),
                        subs.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    /// The first two sub-topics for `skill`, or two generic ones built from `generic`.
    fn expand(&self, skill: &str, generic: [&str; 2]) -> Vec<String> {
        match self.topics.get(skill) {
            Some(subs) => subs.iter().take(TOPICS_PER_SKILL).cloned().collect(),
            None => generic
                .iter()
                .map(|suffix| format!("{skill} {suffix}"))
                .collect(),
        }
    }

    fn phase_topics<S: AsRef<str>>(&self, skills: &[S], generic: [&str; 2]) -> Vec<String> {
        let mut topics: Vec<String> = skills
            .iter()
            .take(SKILLS_PER_PHASE)
            .flat_map(|skill| self.expand(skill.as_ref(), generic))
            .collect();
        topics.truncate(MAX_PHASE_TOPICS);
        topics
    }
}

/// Builds the roadmap for `missing` skills, dating phases from `today`'s quarter.
///
/// Phase 1 is always the gap analysis. With nothing missing, the plan switches to
/// interview readiness and applications; otherwise phase 2 targets the top High
/// skills and phase 3 whatever remains.
pub fn generate_roadmap(
    missing: &[SkillFinding],
    topics: &TopicTable,
    today: NaiveDate,
) -> Vec<RoadmapPhase> {
    let current = Quarter::containing(today);
    let mut roadmap = vec![RoadmapPhase {
        stage: "Phase 1: Foundation & Analysis".to_string(),
        status: PhaseStatus::Computed,
        date: current.label(),
        topics: strings(&[
            "Profile Gap Analysis",
            "Resume Keyword Optimization",
            "Market Research",
        ]),
        action: "Review identified skill gaps and update resume.".to_string(),
    }];

    if missing.is_empty() {
        roadmap.push(RoadmapPhase {
            stage: "Phase 2: Interview Readiness".to_string(),
            status: PhaseStatus::InProgress,
            date: current.label(),
            topics: strings(&[
                "System Design Mock Interviews",
                "Behavioral Questions (STAR)",
                "LeetCode/HackerRank",
            ]),
            action: "Schedule 3 mock interviews this month.".to_string(),
        });
        roadmap.push(RoadmapPhase {
            stage: "Phase 3: Active Application".to_string(),
            status: PhaseStatus::Pending,
            date: current.next().label(),
            topics: strings(&[
                "Networking on LinkedIn",
                "Salary Negotiation",
                "Company Research",
            ]),
            action: "Apply to 5 high-intent companies per week.".to_string(),
        });
        return roadmap;
    }

    let by_severity = |severity: Priority| -> Vec<&str> {
        missing
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.skill.as_str())
            .collect()
    };
    let high = by_severity(Priority::High);
    let medium = by_severity(Priority::Medium);

    let core_quarter = current.next();
    let focused: Vec<&str> = if high.is_empty() { &medium } else { &high }
        .iter()
        .take(SKILLS_PER_PHASE)
        .copied()
        .collect();
    roadmap.push(RoadmapPhase {
        stage: "Phase 2: Core Skill Build".to_string(),
        status: PhaseStatus::Pending,
        date: core_quarter.label(),
        topics: topics.phase_topics(&focused, ["Fundamentals", "Advanced Patterns"]),
        action: format!(
            "Build a capstone project using {}.",
            focused.iter().take(2).copied().collect::<Vec<_>>().join(", ")
        ),
    });

    let mut secondary: Vec<&str> = high.iter().skip(SKILLS_PER_PHASE).copied().collect();
    secondary.extend(&medium);
    if secondary.is_empty() {
        secondary.extend(FILLER_SKILLS);
    }
    roadmap.push(RoadmapPhase {
        stage: "Phase 3: Deep Dive & Certifications".to_string(),
        status: PhaseStatus::Future,
        date: core_quarter.next().label(),
        topics: topics.phase_topics(&secondary, ["Mastery", "Best Practices"]),
        action: "Obtain relevant certification (e.g., CKA, AWS Solution Architect).".to_string(),
    });

    roadmap
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(skill: &str, severity: Priority) -> SkillFinding {
        SkillFinding {
            skill: skill.to_string(),
            severity,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quarter_from_date() {
        assert_eq!(Quarter::containing(date(2026, 1, 1)).label(), "2026-Q1");
        assert_eq!(Quarter::containing(date(2026, 6, 30)).label(), "2026-Q2");
        assert_eq!(Quarter::containing(date(2026, 10, 19)).label(), "2026-Q4");
    }

    #[test]
    fn test_quarter_wraps_year() {
        let q4 = Quarter::containing(date(2026, 11, 5));
        assert_eq!(q4.next().label(), "2027-Q1");
        assert_eq!(q4.next().next().label(), "2027-Q2");
    }

    #[test]
    fn test_no_missing_skills_gives_interview_plan() {
        let roadmap = generate_roadmap(&[], &TopicTable::builtin(), date(2026, 5, 1));
        let stages: Vec<&str> = roadmap.iter().map(|p| p.stage.as_str()).collect();
        assert_eq!(
            stages,
            vec![
                "Phase 1: Foundation & Analysis",
                "Phase 2: Interview Readiness",
                "Phase 3: Active Application"
            ]
        );
        assert_eq!(roadmap[0].date, "2026-Q2");
        assert_eq!(roadmap[1].status, PhaseStatus::InProgress);
        assert_eq!(roadmap[1].date, "2026-Q2");
        assert_eq!(roadmap[2].date, "2026-Q3");
    }

    #[test]
    fn test_high_severity_skills_drive_core_phase() {
        let missing = vec![
            finding("Kubernetes", Priority::High),
            finding("Docker", Priority::High),
            finding("AWS", Priority::High),
            finding("CI/CD", Priority::High),
            finding("Terraform", Priority::Medium),
        ];
        let roadmap = generate_roadmap(&missing, &TopicTable::builtin(), date(2026, 10, 19));

        assert_eq!(roadmap.len(), 3);
        let core = &roadmap[1];
        assert_eq!(core.stage, "Phase 2: Core Skill Build");
        assert_eq!(core.date, "2027-Q1");
        assert_eq!(
            core.topics,
            vec![
                "Container Orchestration",
                "Pods & Services",
                "Containerization",
                "Dockerfiles",
                "EC2 & S3"
            ]
        );
        assert_eq!(core.action, "Build a capstone project using Kubernetes, Docker.");

        let deep = &roadmap[2];
        assert_eq!(deep.status, PhaseStatus::Future);
        assert_eq!(deep.date, "2027-Q2");
        assert_eq!(
            deep.topics,
            vec![
                "Pipeline as Code",
                "GitHub Actions / Jenkins",
                "IaC Concepts",
                "State Management"
            ]
        );
    }

    #[test]
    fn test_medium_only_falls_back_for_core_phase() {
        let missing = vec![finding("GraphQL", Priority::Medium)];
        let roadmap = generate_roadmap(&missing, &TopicTable::builtin(), date(2026, 2, 1));

        assert_eq!(
            roadmap[1].topics,
            vec!["GraphQL Fundamentals", "GraphQL Advanced Patterns"]
        );
        // GraphQL is still the only secondary skill.
        assert_eq!(
            roadmap[2].topics,
            vec!["GraphQL Mastery", "GraphQL Best Practices"]
        );
    }

    #[test]
    fn test_filler_topics_when_nothing_remains() {
        let missing = vec![finding("Linux", Priority::High)];
        let roadmap = generate_roadmap(&missing, &TopicTable::builtin(), date(2026, 2, 1));
        assert_eq!(
            roadmap[2].topics,
            vec![
                "System Design Mastery",
                "System Design Best Practices",
                "Cloud Architecture Mastery",
                "Cloud Architecture Best Practices"
            ]
        );
    }

    #[test]
    fn test_topics_never_exceed_cap() {
        let missing: Vec<SkillFinding> = ["A", "B", "C", "D", "E", "F", "G", "H"]
            .iter()
            .map(|s| finding(s, Priority::High))
            .collect();
        let roadmap = generate_roadmap(&missing, &TopicTable::builtin(), date(2026, 2, 1));
        assert!(roadmap.iter().all(|p| p.topics.len() <= MAX_PHASE_TOPICS));
        assert_eq!(roadmap[0].stage, "Phase 1: Foundation & Analysis");
    }
}
