//! Company profile, audience demographics, and competitive landscape.

use serde_json::Value;

use super::as_share_entries;
use crate::probe::{as_list, as_percentage, as_text, as_text_lenient, first_match};
use crate::types::{DemographicsSection, GenderDistribution, RawProfile};

const COMPANY: &[&str] = &[
    "demographics.company.name",
    "demographics.company",
    "overview.company",
    "meta.company",
];
const COMPANY_EMPLOYEES: &[&str] = &[
    "demographics.company.employees",
    "demographics.companyEmployees",
    "demographics.company_employees",
];
const COMPANY_REVENUE: &[&str] = &[
    "demographics.company.revenue",
    "demographics.company.revenueRange",
    "demographics.companyRevenue",
    "demographics.company_revenue_range",
];
const COMPANY_HEADQUARTERS: &[&str] = &[
    "demographics.company.headquarters",
    "demographics.companyHeadquarters",
    "demographics.company_headquarters",
];
const AGE: &[&str] = &[
    "demographics.ageDistribution",
    "demographics.age_distribution",
    "demographics.age",
];
const GENDER: &[&str] = &[
    "demographics.genderDistribution",
    "demographics.gender_distribution",
    "demographics.gender",
];
const COMPETITORS: &[&str] = &["demographics.competitors", "competitors"];
const TOP_INTERESTED_WEBSITES: &[&str] = &[
    "demographics.topInterestedWebsites",
    "demographics.top_interested_websites",
    "topInterestedWebsites",
];
const TOP_INTERESTED_TOPICS: &[&str] = &[
    "demographics.topInterestedTopics",
    "demographics.top_interested_topics",
    "topInterestedTopics",
];
const TOP_CATEGORIES: &[&str] = &[
    "demographics.topCategories",
    "demographics.top_categories",
    "topCategories",
];
const TOP_COMPETITORS: &[&str] = &[
    "demographics.topCompetitors",
    "demographics.top_competitors",
    "topCompetitors",
];
const INCOMING_REFERRING: &[&str] = &[
    "demographics.incomingReferringDomains",
    "demographics.incoming_referring_domains",
    "incomingReferringDomains",
];
const OUTGOING_REFERRING: &[&str] = &[
    "demographics.outgoingReferringDomains",
    "demographics.outgoing_referring_domains",
    "outgoingReferringDomains",
];
const ADS_NETWORKS: &[&str] = &[
    "demographics.adsNetworks",
    "demographics.ads_networks",
    "adsNetworks",
];
const ADS_SITES: &[&str] = &["demographics.adsSites", "demographics.ads_sites", "adsSites"];
const SOCIAL_NETWORKS: &[&str] = &[
    "demographics.socialNetworks",
    "demographics.social_networks_share",
    "traffic.socialNetworks",
];

/// Extracts the demographics section from a raw profile.
#[must_use]
pub fn build_demographics_section(raw: &RawProfile) -> DemographicsSection {
    DemographicsSection {
        company: first_match(raw, COMPANY, as_text),
        company_employees: first_match(raw, COMPANY_EMPLOYEES, as_text_lenient),
        company_revenue_range: first_match(raw, COMPANY_REVENUE, as_text_lenient),
        company_headquarters: first_match(raw, COMPANY_HEADQUARTERS, as_text),
        age_distribution: first_match(raw, AGE, as_share_entries),
        gender_distribution: first_match(raw, GENDER, as_gender_distribution),
        competitors: first_match(raw, COMPETITORS, as_list),
        top_interested_websites: first_match(raw, TOP_INTERESTED_WEBSITES, as_list),
        top_interested_topics: first_match(raw, TOP_INTERESTED_TOPICS, as_list),
        top_categories: first_match(raw, TOP_CATEGORIES, as_list),
        top_competitors: first_match(raw, TOP_COMPETITORS, as_list),
        incoming_referring_domains: first_match(raw, INCOMING_REFERRING, as_list),
        outgoing_referring_domains: first_match(raw, OUTGOING_REFERRING, as_list),
        ads_networks: first_match(raw, ADS_NETWORKS, as_list),
        ads_sites: first_match(raw, ADS_SITES, as_list),
        social_networks_share: first_match(raw, SOCIAL_NETWORKS, as_share_entries),
    }
}

/// `{"male": 0.59, "female": 0.41}` or a share list labelled male/female.
fn as_gender_distribution(value: &Value) -> Option<GenderDistribution> {
    let split = if value.is_object() {
        GenderDistribution {
            male: first_match(value, &["male", "Male"], as_percentage),
            female: first_match(value, &["female", "Female"], as_percentage),
        }
    } else {
        let entries = as_share_entries(value)?;
        let share_for = |label: &str| {
            entries
                .iter()
                .find(|e| e.label.eq_ignore_ascii_case(label))
                .map(|e| e.share)
        };
        GenderDistribution {
            male: share_for("male"),
            female: share_for("female"),
        }
    };
    (split.male.is_some() || split.female.is_some()).then_some(split)
}

#[cfg(test)]
#[path = "demographics_test.rs"]
mod tests;
