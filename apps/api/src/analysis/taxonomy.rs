//! Skill taxonomy and synonym table.
//!
//! Both are immutable once built. `SkillTaxonomy::new` validates the structure so a
//! corrupted table fails at startup instead of skewing every analysis.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// Name of the role used when no specific role matches a job title.
pub const FALLBACK_ROLE: &str = "General";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("role name cannot be empty")]
    EmptyRoleName,

    #[error("duplicate role '{0}'")]
    DuplicateRole(String),

    #[error("fallback role '{FALLBACK_ROLE}' is missing")]
    MissingFallback,

    #[error("role '{role}' contains an empty skill name")]
    EmptySkill { role: String },

    #[error("skill '{skill}' is listed as both critical and nice-to-have for role '{role}'")]
    OverlappingSkill { role: String, skill: String },
}

/// Critical and nice-to-have skills for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSkills {
    pub role: String,
    pub critical: Vec<String>,
    pub nice_to_have: Vec<String>,
}

impl RoleSkills {
    pub fn new(role: &str, critical: &[&str], nice_to_have: &[&str]) -> Self {
        Self {
            role: role.to_string(),
            critical: critical.iter().map(|s| s.to_string()).collect(),
            nice_to_have: nice_to_have.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.role == FALLBACK_ROLE
    }
}

/// Ordered role → skills mapping. Definition order drives role tie-breaking.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    roles: Vec<RoleSkills>,
    fallback: usize,
}

impl SkillTaxonomy {
    pub fn new(roles: Vec<RoleSkills>) -> Result<Self, TaxonomyError> {
        let mut seen = HashSet::new();
        for role in &roles {
            if role.role.trim().is_empty() {
                return Err(TaxonomyError::EmptyRoleName);
            }
            if !seen.insert(role.role.as_str()) {
                return Err(TaxonomyError::DuplicateRole(role.role.clone()));
            }
            validate_role(role)?;
        }
        let fallback = roles
            .iter()
            .position(RoleSkills::is_fallback)
            .ok_or(TaxonomyError::MissingFallback)?;
        Ok(Self { roles, fallback })
    }

    /// The curated taxonomy shipped with the service.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::new(vec![
            RoleSkills::new(
                "DevOps Engineer",
                &[
                    "Linux", "Docker", "Kubernetes", "CI/CD", "Jenkins", "Git", "AWS", "Azure",
                    "Python", "Bash",
                ],
                &["Terraform", "Ansible", "Prometheus", "Grafana", "Go", "Ruby"],
            ),
            RoleSkills::new(
                "Software Engineer",
                &[
                    "Python",
                    "Java",
                    "JavaScript",
                    "SQL",
                    "Git",
                    "Data Structures",
                    "Algorithms",
                    "REST API",
                ],
                &["React", "Node.js", "Docker", "AWS", "GraphQL", "NoSQL"],
            ),
            RoleSkills::new(
                "Data Scientist",
                &[
                    "Python",
                    "SQL",
                    "Pandas",
                    "NumPy",
                    "Scikit-learn",
                    "Machine Learning",
                    "Statistics",
                ],
                &["TensorFlow", "PyTorch", "Spark", "Hadoop", "AWS", "Visualization"],
            ),
            RoleSkills::new(
                "Product Manager",
                &[
                    "Product Strategy",
                    "Agile",
                    "Scrum",
                    "User Research",
                    "Roadmapping",
                    "Communication",
                ],
                &["SQL", "Data Analysis", "Jira", "Figma", "Marketing"],
            ),
            RoleSkills::new(
                FALLBACK_ROLE,
                &[
                    "Communication",
                    "Problem Solving",
                    "Teamwork",
                    "Time Management",
                    "Adaptability",
                ],
                &["Leadership", "Project Management", "Creativity"],
            ),
        ])
    }

    #[cfg(test)]
    pub fn role(&self, name: &str) -> Option<&RoleSkills> {
        self.roles.iter().find(|r| r.role == name)
    }

    pub fn fallback(&self) -> &RoleSkills {
        &self.roles[self.fallback]
    }

    /// Every role except the fallback, in definition order.
    pub fn specific_roles(&self) -> impl Iterator<Item = &RoleSkills> {
        self.roles.iter().filter(|r| !r.is_fallback())
    }

    pub fn roles(&self) -> &[RoleSkills] {
        &self.roles
    }
}

fn validate_role(role: &RoleSkills) -> Result<(), TaxonomyError> {
    if role
        .critical
        .iter()
        .chain(&role.nice_to_have)
        .any(|s| s.trim().is_empty())
    {
        return Err(TaxonomyError::EmptySkill {
            role: role.role.clone(),
        });
    }

    let critical: HashSet<String> = role.critical.iter().map(|s| s.to_lowercase()).collect();
    if let Some(skill) = role
        .nice_to_have
        .iter()
        .find(|s| critical.contains(&s.to_lowercase()))
    {
        return Err(TaxonomyError::OverlappingSkill {
            role: role.role.clone(),
            skill: skill.clone(),
        });
    }
    Ok(())
}

/// Alternate surface forms that also count as evidence of a skill.
/// Keys and forms are stored lower-cased.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(skill, forms)| {
                (
                    skill.as_ref().to_lowercase(),
                    forms.iter().map(|f| f.as_ref().to_lowercase()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            (
                "sql",
                vec![
                    "postgresql", "mysql", "oracle", "mariadb", "sqlite", "t-sql", "nosql",
                    "dynamodb", "mongodb", "pl/sql",
                ],
            ),
            (
                "python",
                vec![
                    "python3", "py3", "django", "flask", "fastapi", "pandas", "numpy",
                    "matplotlib",
                ],
            ),
            (
                "javascript",
                vec![
                    "js", "es6", "typescript", "ts", "node", "react", "nextjs", "vue", "angular",
                ],
            ),
            (
                "aws",
                vec![
                    "amazon web services",
                    "ec2",
                    "s3",
                    "lambda",
                    "cloudfront",
                    "route53",
                ],
            ),
            (
                "ci/cd",
                vec![
                    "cicd",
                    "continuous integration",
                    "continuous deployment",
                    "pipelines",
                    "actions",
                    "github actions",
                    "gitlab ci",
                ],
            ),
            (
                "rest api",
                vec!["restful", "apis", "endpoint", "openapi", "swagger"],
            ),
            (
                "git",
                vec![
                    "github",
                    "gitlab",
                    "bitbucket",
                    "version control",
                    "svn",
                    "mercurial",
                ],
            ),
            (
                "docker",
                vec!["containers", "containerization", "dockerfile", "docker-compose"],
            ),
            (
                "kubernetes",
                vec!["k8s", "orchestration", "helm", "eks", "aks", "gke"],
            ),
            (
                "java",
                vec!["spring", "springboot", "hibernate", "maven", "gradle"],
            ),
        ])
    }

    /// Looks up the alternate forms for a skill, case-insensitively.
    pub fn forms(&self, skill: &str) -> Option<&[String]> {
        self.entries
            .get(&skill.to_lowercase())
            .map(|forms| forms.as_slice())
    }
}
