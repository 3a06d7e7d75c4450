//! Text normalization applied to extracted résumé text before any matching.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::AnalysisError;

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static whitespace pattern"))
}

/// Cleans extracted text for matching.
///
/// 1. Empty or whitespace-only input is an extraction failure.
/// 2. Letter-spacing artifacts ("P y t h o n ") are repaired.
/// 3. Whitespace runs collapse to a single space and the text is lower-cased.
pub fn normalize_text(raw: &str) -> Result<String, AnalysisError> {
    if raw.trim().is_empty() {
        return Err(AnalysisError::Extraction);
    }

    let repaired = repair_letter_spacing(raw);
    Ok(whitespace_runs()
        .replace_all(&repaired, " ")
        .to_lowercase())
}

/// Removes a whitespace character when it sits between two ASCII letters and the
/// following letter is itself followed by whitespace.
///
/// Every decision looks at the original text, so consecutive removals in a
/// spaced-out word do not influence each other.
fn repair_letter_spacing(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let spaced_letter = c.is_whitespace()
            && i > 0
            && chars[i - 1].is_ascii_alphabetic()
            && chars.get(i + 1).is_some_and(|n| n.is_ascii_alphabetic())
            && chars.get(i + 2).is_some_and(|n| n.is_whitespace());
        if !spaced_letter {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_extraction_failure() {
        assert_eq!(normalize_text(""), Err(AnalysisError::Extraction));
    }

    #[test]
    fn test_whitespace_only_is_extraction_failure() {
        assert_eq!(normalize_text(" \n\t  "), Err(AnalysisError::Extraction));
    }

    #[test]
    fn test_collapses_whitespace_and_lowercases() {
        let text = normalize_text("Senior   Engineer\n\nKubernetes\tDocker").unwrap();
        assert_eq!(text, "senior engineer kubernetes docker");
    }

    #[test]
    fn test_repairs_letter_spaced_word() {
        let text = normalize_text("Skills: P y t h o n and Go").unwrap();
        assert_eq!(text, "skills: python and go");
    }

    #[test]
    fn test_spaced_word_at_end_keeps_last_gap() {
        // The final letter has no trailing whitespace, so its gap is not a match.
        let text = normalize_text("G i t").unwrap();
        assert_eq!(text, "gi t");
    }

    #[test]
    fn test_ordinary_words_untouched() {
        let text = normalize_text("Built pipelines with Docker").unwrap();
        assert_eq!(text, "built pipelines with docker");
    }

    #[test]
    fn test_non_letters_do_not_trigger_repair() {
        let text = normalize_text("v 1 2 release").unwrap();
        assert_eq!(text, "v 1 2 release");
    }
}
