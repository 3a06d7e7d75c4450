//! Curated hiring-company lists by country and role category.
//!
//! These are static tables, not live job-board data. Sampling goes through a
//! caller-supplied `Rng` so tests can pin the output.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::models::HiringCompany;

/// At most this many companies are returned; longer lists are sampled.
pub const MAX_LISTED_COMPANIES: usize = 8;
pub const EMPLOYER_LABEL: &str = "Top Employer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    DevOps,
    Swe,
    Data,
    General,
}

/// Buckets a role name by substring, checked in DevOps → SWE → Data order.
pub fn categorize_role(role: &str) -> RoleCategory {
    let role = role.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|n| role.contains(n));

    if has(&["devops", "cloud", "sre"]) {
        RoleCategory::DevOps
    } else if has(&["software", "developer", "engineer"]) {
        RoleCategory::Swe
    } else if has(&["data"]) {
        RoleCategory::Data
    } else {
        RoleCategory::General
    }
}

#[derive(Debug, Clone)]
pub struct CompanyCatalog {
    by_country: HashMap<String, HashMap<RoleCategory, Vec<String>>>,
    defaults: Vec<String>,
}

impl CompanyCatalog {
    pub fn new(
        by_country: HashMap<String, HashMap<RoleCategory, Vec<String>>>,
        defaults: Vec<String>,
    ) -> Self {
        Self {
            by_country,
            defaults,
        }
    }

    pub fn builtin() -> Self {
        let by_country = [
            (
                "USA",
                categories(
                    &["Google", "Amazon (AWS)", "Netflix", "Datadog", "HashiCorp", "Cloudflare", "Snowflake"],
                    &["Google", "Meta", "Microsoft", "Stripe", "Airbnb", "Uber", "Salesforce"],
                    &["Databricks", "Palantir", "Snowflake", "Google DeepMind", "OpenAI", "Meta"],
                ),
            ),
            (
                "Germany",
                categories(
                    &["SAP", "Siemens", "Zalando", "Adidas", "BMW Group", "Cloudflare", "Personio"],
                    &["SAP", "Zalando", "N26", "Delivery Hero", "HelloFresh", "SoundCloud", "Wirecard"],
                    &["SAP", "Celonis", "Zalando", "BMW", "Allianz", "Bayer"],
                ),
            ),
            (
                "Canada",
                categories(
                    &["Shopify", "RBC", "Telus", "BlackBerry", "OpenText", "Hootsuite"],
                    &["Shopify", "Wealthsimple", "Lightspeed", "Clio", "Constellation Software", "CGI"],
                    &["Shopify", "Cohere", "Layer 6 AI", "Element AI", "BMO", "TD Bank"],
                ),
            ),
            (
                "UK",
                categories(
                    &["Revolut", "Monzo", "Deliveroo", "Barclays", "Sky", "Arm", "Ocado Technology"],
                    &["DeepMind", "Revolut", "Monzo", "Wise", "Improbable", "Darktrace"],
                    &["DeepMind", "Revolut", "Starling Bank", "AstraZeneca", "HSBC"],
                ),
            ),
            (
                "Australia",
                categories(
                    &["Atlassian", "Canva", "Telstra", "Commonwealth Bank", "Xero", "Afterpay"],
                    &["Atlassian", "Canva", "Xero", "WiseTech Global", "REA Group", "SafetyCulture"],
                    &["Canva", "Atlassian", "Macquarie Group", "Telstra", "Woolworths Group"],
                ),
            ),
            (
                "UAE",
                categories(
                    &["Careem", "Talabat", "Noon", "Etisalat", "G42", "Emirates Group"],
                    &["Careem", "Dubizzle", "Property Finder", "Kitopi", "BitOasis", "Tabby"],
                    &["G42", "Careem", "Noon", "Etisalat", "Dubai Digital Authority"],
                ),
            ),
            (
                "India",
                categories(
                    &["TCS", "Infosys", "Wipro", "HCLTech", "Accenture India", "Zoho", "Freshworks"],
                    &["Google India", "Microsoft India", "Flipkart", "Swiggy", "Zomato", "Paytm", "Ola", "PhonePe"],
                    &["Mu Sigma", "Fractal Analytics", "Tiger Analytics", "Flipkart", "InMobi", "Paytm"],
                ),
            ),
        ]
        .into_iter()
        .map(|(country, lists)| (country.to_string(), lists))
        .collect();

        let defaults = owned(&["Google", "Amazon", "Microsoft", "IBM", "Oracle", "Accenture"]);

        Self::new(by_country, defaults)
    }

    /// The full candidate list for a country and role, before sampling.
    pub fn candidates(&self, country: &str, role: &str) -> &[String] {
        self.by_country
            .get(country)
            .and_then(|categories| categories.get(&categorize_role(role)))
            .unwrap_or(&self.defaults)
    }

    /// Up to `MAX_LISTED_COMPANIES` employers for the role, each labelled with the
    /// requested country. Order is unspecified when the list is sampled.
    pub fn hiring_companies<R>(&self, country: &str, role: &str, rng: &mut R) -> Vec<HiringCompany>
    where
        R: Rng + ?Sized,
    {
        let candidates = self.candidates(country, role);
        let selected: Vec<&String> = if candidates.len() > MAX_LISTED_COMPANIES {
            candidates.choose_multiple(rng, MAX_LISTED_COMPANIES).collect()
        } else {
            candidates.iter().collect()
        };

        selected
            .into_iter()
            .map(|company| HiringCompany {
                company: company.clone(),
                location: country.to_string(),
                kind: EMPLOYER_LABEL.to_string(),
            })
            .collect()
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn categories(
    devops: &[&str],
    swe: &[&str],
    data: &[&str],
) -> HashMap<RoleCategory, Vec<String>> {
    HashMap::from([
        (RoleCategory::DevOps, owned(devops)),
        (RoleCategory::Swe, owned(swe)),
        (RoleCategory::Data, owned(data)),
    ])
}
