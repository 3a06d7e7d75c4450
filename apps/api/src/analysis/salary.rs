//! Salary banding by target country, nudged upward by the match score.

use std::collections::HashMap;

use crate::analysis::models::SalaryRange;

/// Base band for countries without a curated entry.
pub const DEFAULT_SALARY_RANGE: SalaryRange = SalaryRange(50_000, 100_000);

/// `0.85 + score / 200`: roughly 0.94 at the score floor and 1.34 at the ceiling.
pub fn adjustment_factor(match_score: u8) -> f64 {
    0.85 + f64::from(match_score) / 200.0
}

#[derive(Debug, Clone)]
pub struct SalaryBands {
    bands: HashMap<String, SalaryRange>,
    fallback: SalaryRange,
}

impl SalaryBands {
    pub fn new(bands: HashMap<String, SalaryRange>, fallback: SalaryRange) -> Self {
        Self { bands, fallback }
    }

    /// Annual bands in local currency.
    pub fn builtin() -> Self {
        let bands = [
            ("USA", SalaryRange(90_000, 160_000)),
            ("Canada", SalaryRange(75_000, 130_000)),
            ("Germany", SalaryRange(65_000, 110_000)),
            ("UK", SalaryRange(55_000, 100_000)),
            ("Australia", SalaryRange(80_000, 140_000)),
            ("UAE", SalaryRange(100_000, 150_000)),
            ("India", SalaryRange(500_000, 2_500_000)),
        ]
        .into_iter()
        .map(|(country, range)| (country.to_string(), range))
        .collect();
        Self::new(bands, DEFAULT_SALARY_RANGE)
    }

    pub fn base_range(&self, country: &str) -> SalaryRange {
        self.bands.get(country).copied().unwrap_or(self.fallback)
    }

    /// Scales both bounds of the country's base band, truncating to whole units.
    pub fn estimate(&self, country: &str, match_score: u8) -> SalaryRange {
        let base = self.base_range(country);
        let factor = adjustment_factor(match_score);
        SalaryRange(
            (base.low() as f64 * factor) as i64,
            (base.high() as f64 * factor) as i64,
        )
    }
}
