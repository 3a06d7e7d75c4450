//! Skill detection: decides whether normalized résumé text evidences a skill.
//!
//! Three tiers, first hit wins:
//!
//! 1. `Literal`: boundary-aware regex on the skill name ("python" also matches "python3").
//! 2. `Synonym`: any alternate form from the synonym table occurs as a substring.
//! 3. `Substring`: for names longer than 3 characters, plain containment.
//!
//! Recall is favoured over precision: résumés are noisy and a missed skill costs the
//! user more than an occasional false positive from tier 3.

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::analysis::taxonomy::SynonymTable;

/// Minimum length (exclusive) for the permissive substring tier.
const SUBSTRING_MIN_LEN: usize = 3;

/// Which tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Literal,
    Synonym,
    Substring,
}

/// Runs the tiers in order against already-normalized `text`.
pub fn detect_skill(skill: &str, text: &str, synonyms: &SynonymTable) -> Option<MatchTier> {
    let skill_lower = skill.trim().to_lowercase();
    if skill_lower.is_empty() {
        return None;
    }

    if literal_match(&skill_lower, text) {
        return Some(MatchTier::Literal);
    }
    if synonym_match(&skill_lower, text, synonyms) {
        return Some(MatchTier::Synonym);
    }
    if substring_match(&skill_lower, text) {
        return Some(MatchTier::Substring);
    }
    None
}

/// Builds the tier-1 pattern for a lower-cased skill name.
///
/// A name ending in punctuation ("c++") is anchored only at its start; one starting
/// with punctuation (".net") only at its end. Plain names need a boundary on both
/// sides and may carry a version suffix.
pub fn literal_pattern(skill_lower: &str) -> String {
    let escaped = regex::escape(skill_lower);
    let first_alnum = skill_lower
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    let last_alnum = skill_lower
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric());

    if !last_alnum {
        format!(r"\b{escaped}")
    } else if !first_alnum {
        format!(r"{escaped}\b")
    } else {
        format!(r"\b{escaped}(?:\d+)?\b")
    }
}

fn literal_match(skill_lower: &str, text: &str) -> bool {
    let pattern = literal_pattern(skill_lower);
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            warn!("Skipping literal match for '{skill_lower}': {e}");
            false
        }
    }
}

fn synonym_match(skill_lower: &str, text: &str, synonyms: &SynonymTable) -> bool {
    synonyms
        .forms(skill_lower)
        .is_some_and(|forms| forms.iter().any(|form| text.contains(form.as_str())))
}

/// Optional non-alphanumeric flanks make this tier equivalent to plain containment.
fn substring_match(skill_lower: &str, text: &str) -> bool {
    skill_lower.chars().count() > SUBSTRING_MIN_LEN && text.contains(skill_lower)
}
