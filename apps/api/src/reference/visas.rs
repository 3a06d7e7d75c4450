use serde::Serialize;

/// Work-visa route for tech professionals in one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisaPathway {
    pub country: &'static str,
    pub visa: &'static str,
    pub official_link: &'static str,
    pub fees: &'static str,
    pub timeline: &'static str,
    pub processing_time: &'static str,
    pub requirements: &'static [&'static str],
    pub pros: &'static str,
    pub cons: &'static str,
}

pub const VISA_PATHWAYS: [VisaPathway; 6] = [
    VisaPathway {
        country: "USA",
        visa: "H-1B Specialty Occupation",
        official_link: "https://www.uscis.gov/working-in-the-united-states/h-1b-specialty-occupations",
        fees: "$460 (Petition) + $2,805 (Premium Processing - Optional)",
        timeline: "Electronic Registration: March. Selection: April. Start Date: Oct 1.",
        processing_time: "Regular: 8-10 months | Premium: 15 days",
        requirements: &[
            "Bachelor's Degree",
            "Job Offer from US Employer",
            "Employer Selection in Lottery",
        ],
        pros: "Dual intent (path to Green Card)",
        cons: "Lottery based (approx 25% selection chance)",
    },
    VisaPathway {
        country: "Germany",
        visa: "EU Blue Card (Germany)",
        official_link: "https://www.make-it-in-germany.com/en/visa-residence/types/eu-blue-card",
        fees: "€100 (Issuance fee)",
        timeline: "Apply anytime upon receiving contract.",
        processing_time: "4-6 weeks (varies by embassy)",
        requirements: &[
            "German Recognized Degree",
            "Job Offer with Salary > €45,300 (Bottleneck Professions 2024)",
        ],
        pros: "Fast track to PR (21 months with B1 German)",
        cons: "Strict salary thresholds",
    },
    VisaPathway {
        country: "Canada",
        visa: "Express Entry (Federal Skilled Worker)",
        official_link: "https://www.canada.ca/en/immigration-refugees-citizenship/services/immigrate-canada/express-entry.html",
        fees: "$1,365 CAD (Processing) + $515 CAD (RPRF) = ~$1,880 CAD",
        timeline: "Draws occur every 2 weeks.",
        processing_time: "Standard: 6 months",
        requirements: &[
            "CRS Score cutoff",
            "ECA Report",
            "IELTS/CELPIP Language Test",
        ],
        pros: "Direct Permanent Residence (PR)",
        cons: "High CRS score competition (>500 points recently)",
    },
    VisaPathway {
        country: "UK",
        visa: "Skilled Worker Visa",
        official_link: "https://www.gov.uk/skilled-worker-visa",
        fees: "£719 (up to 3 years) + Immigration Health Surcharge (£1,035/year)",
        timeline: "Apply up to 3 months before work start.",
        processing_time: "3 weeks (Outside UK) | 8 weeks (Inside UK)",
        requirements: &[
            "Sponsorship from licensed employer",
            "Job in eligible list",
            "Salary > £38,700 (standard rate April 2024)",
        ],
        pros: "Flexible 5-year route to ILR",
        cons: "High IHS fees and salary threshold increase",
    },
    VisaPathway {
        country: "UAE",
        visa: "Green Visa (Freelance/Skilled)",
        official_link: "https://u.ae/en/information-and-services/visa-and-emirates-id/residence-visas/residence-visa-for-working-in-the-uae/green-visa",
        fees: "~AED 2,500 + Medical/ID fees",
        timeline: "Apply anytime.",
        processing_time: "5-10 working days",
        requirements: &[
            "Bachelor's Degree",
            "Salary > AED 15,000/month",
            "Valid Employment Contract",
        ],
        pros: "Self-sponsored for 5 years. No employer dependence.",
        cons: "No path to citizenship.",
    },
    VisaPathway {
        country: "Australia",
        visa: "Skills in Demand (Subclass 482)",
        official_link: "https://immi.homeaffairs.gov.au/visas/getting-a-visa/visa-listing/temporary-skill-shortage-482",
        fees: "AUD 3,210 (Medium-term) / AUD 1,495 (Short-term)",
        timeline: "Requires employer nomination first.",
        processing_time: "Specialist: 7 days | Core Skills: 21-47 days",
        requirements: &[
            "Experience > 2 years",
            "English Proficiency (IELTS 5.0+)",
            "Nomination by Approved Sponsor",
        ],
        pros: "Pathway to PR (186 ENS) after 2 years.",
        cons: "High cost of living and sponsorship dependency.",
    },
];

/// Case-insensitive lookup by country name.
pub fn visa_pathway(country: &str) -> Option<&'static VisaPathway> {
    let country = country.trim();
    VISA_PATHWAYS
        .iter()
        .find(|p| p.country.eq_ignore_ascii_case(country))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let pathway = visa_pathway(" germany ").unwrap();
        assert_eq!(pathway.visa, "EU Blue Card (Germany)");
    }

    #[test]
    fn test_unknown_country() {
        assert!(visa_pathway("India").is_none());
        assert!(visa_pathway("").is_none());
    }

    #[test]
    fn test_every_pathway_is_complete() {
        for pathway in &VISA_PATHWAYS {
            assert!(pathway.official_link.starts_with("https://"));
            assert!(!pathway.requirements.is_empty(), "{}", pathway.country);
        }
    }
}
