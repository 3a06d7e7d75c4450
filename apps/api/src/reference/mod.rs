//! Static reference data served alongside analyses: target countries, visa
//! pathways, and curated learning resources.

pub mod handlers;
pub mod resources;
pub mod visas;

/// Countries offered as analysis targets.
pub const SUPPORTED_COUNTRIES: &[&str] =
    &["USA", "Canada", "Germany", "UK", "Australia", "UAE", "India"];
