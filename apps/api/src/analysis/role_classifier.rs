//! Role classification: picks the taxonomy role that best fits a free-text job title.
//!
//! Shared tokens are weighted: domain words ("devops", "data", "software") count far
//! more than role-shape words ("engineer", "senior"), so "Senior Engineer" alone does
//! not tie every engineering role.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::taxonomy::{RoleSkills, SkillTaxonomy};

/// Generic words describing the shape of a role rather than its domain.
const ROLE_SHAPE_WORDS: &[&str] = &[
    "engineer",
    "developer",
    "specialist",
    "manager",
    "lead",
    "senior",
    "junior",
];

const ROLE_SHAPE_WEIGHT: u32 = 1;
const DOMAIN_WEIGHT: u32 = 10;

/// The resolved role and the overlap score that selected it (0 for the fallback).
#[derive(Debug, Clone, Copy)]
pub struct RoleMatch<'a> {
    pub role: &'a RoleSkills,
    pub score: u32,
}

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("static word pattern"))
}

/// Lower-cased word tokens of `text`.
pub fn tokenize(text: &str) -> HashSet<String> {
    word_pattern()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Weighted overlap between two token sets.
pub fn overlap_score(job_tokens: &HashSet<String>, role_tokens: &HashSet<String>) -> u32 {
    job_tokens
        .intersection(role_tokens)
        .map(|token| {
            if ROLE_SHAPE_WORDS.contains(&token.as_str()) {
                ROLE_SHAPE_WEIGHT
            } else {
                DOMAIN_WEIGHT
            }
        })
        .sum()
}

/// Resolves `job_title` to a taxonomy role.
///
/// Only a strictly higher score replaces the current best, so ties keep the role
/// defined first. Nothing scoring above zero resolves to the fallback role.
pub fn classify_role<'a>(job_title: &str, taxonomy: &'a SkillTaxonomy) -> RoleMatch<'a> {
    let job_tokens = tokenize(job_title);
    let mut best = RoleMatch {
        role: taxonomy.fallback(),
        score: 0,
    };

    for role in taxonomy.specific_roles() {
        let score = overlap_score(&job_tokens, &tokenize(&role.role));
        if score > best.score {
            best = RoleMatch { role, score };
        }
    }

    best
}
