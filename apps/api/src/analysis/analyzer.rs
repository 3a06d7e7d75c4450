//! Analysis pipeline: wires the stages together over one résumé.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::analysis::companies::CompanyCatalog;
use crate::analysis::models::{AnalysisReport, AnalysisResult};
use crate::analysis::normalizer::normalize_text;
use crate::analysis::roadmap::{generate_roadmap, TopicTable};
use crate::analysis::role_classifier::classify_role;
use crate::analysis::salary::SalaryBands;
use crate::analysis::scorer::assess_role;
use crate::analysis::skill_detector::detect_skill;
use crate::analysis::taxonomy::{SkillTaxonomy, SynonymTable, TaxonomyError};

/// Constant market-demand indicator reported with every analysis.
pub const MARKET_DEMAND_SCORE: u8 = 85;

/// All static career data, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct CareerData {
    pub taxonomy: SkillTaxonomy,
    pub synonyms: SynonymTable,
    pub salaries: SalaryBands,
    pub companies: CompanyCatalog,
    pub topics: TopicTable,
}

impl CareerData {
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Ok(Self {
            taxonomy: SkillTaxonomy::builtin()?,
            synonyms: SynonymTable::builtin(),
            salaries: SalaryBands::builtin(),
            companies: CompanyCatalog::builtin(),
            topics: TopicTable::builtin(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub job_title: &'a str,
    pub resume_text: &'a str,
    pub country: &'a str,
}

/// Runs the full pipeline over already-extracted résumé text.
///
/// Never fails: empty text yields `AnalysisResult::Failure`, unknown countries and
/// unmatched titles fall back to default tables.
pub fn analyze_profile<R>(
    data: &CareerData,
    request: AnalysisRequest<'_>,
    rng: &mut R,
    today: NaiveDate,
) -> AnalysisResult
where
    R: Rng + ?Sized,
{
    let text = match normalize_text(request.resume_text) {
        Ok(text) => text,
        Err(e) => {
            warn!("No usable résumé text for '{}'", request.job_title);
            return AnalysisResult::failure(e.to_string());
        }
    };

    let role_match = classify_role(request.job_title, &data.taxonomy);
    let role = role_match.role;
    debug!(
        "Resolved '{}' to role '{}' (score {})",
        request.job_title, role.role, role_match.score
    );

    let assessment = assess_role(role, |skill| {
        let tier = detect_skill(skill, &text, &data.synonyms);
        debug!("Skill '{skill}': {tier:?}");
        tier.is_some()
    });

    let salary_range = data
        .salaries
        .estimate(request.country, assessment.match_score);
    let hiring_companies = data
        .companies
        .hiring_companies(request.country, &role.role, rng);
    let roadmap = generate_roadmap(&assessment.missing_skills, &data.topics, today);

    info!(
        "Analysis complete: role={} score={} matched={}/{} missing={}",
        role.role,
        assessment.match_score,
        assessment.matched_critical,
        assessment.total_critical,
        assessment.missing_skills.len()
    );

    AnalysisResult::Success(AnalysisReport {
        success: true,
        match_score: assessment.match_score,
        missing_skills: assessment.missing_skills,
        all_required_skills: assessment.skill_matrix,
        job_title: request.job_title.to_string(),
        detected_role: role.role.clone(),
        target_country: request.country.to_string(),
        salary_range,
        market_demand_score: MARKET_DEMAND_SCORE,
        hiring_companies,
        roadmap,
    })
}
