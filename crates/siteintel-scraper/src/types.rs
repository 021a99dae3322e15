//! Normalized section types extracted from a Similarweb-style profile payload.
//!
//! ## Observed payload shapes
//!
//! The API has no fixed schema. The same fact shows up under different keys
//! depending on the endpoint version and on whether the payload came from a
//! live fetch or an offline sample:
//!
//! - Identity lives in `overview` on newer payloads and in `meta` (or at the
//!   top level) on older ones.
//! - Ranks are either plain integers (`"rankGlobal": 3401`) or wrapped
//!   objects (`"globalRank": {"rank": 3401}`).
//! - Visit counts arrive as integers, floats, or display strings such as
//!   `"11.2M"` and `"12,345"`.
//! - Shares arrive either as fractions (`0.42`) or as percentages (`42.0`);
//!   everything here is stored as a 0–100 percentage.
//! - Distributions (age, social networks, countries) are either an object
//!   keyed by label or a list of `{label, share}`-like objects.
//!
//! Every field is optional. `None` means "not present in the source".

use std::collections::BTreeMap;

use serde::Serialize;

/// Raw JSON payload for one domain, as returned by the API or stored as an
/// offline sample. Expected to be an object, but never trusted to be.
pub type RawProfile = serde_json::Value;

/// Visit engagement metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<u64>,
    /// Average visit duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_on_site: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_per_visit: Option<f64>,
    /// Percentage, 0–100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_rate: Option<f64>,
}

impl Engagement {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_none()
            && self.time_on_site.is_none()
            && self.pages_per_visit.is_none()
            && self.bounce_rate.is_none()
    }
}

/// Traffic attributed to one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryTraffic {
    pub country: String,
    /// Percentage of total traffic, 0–100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpc: Option<f64>,
}

/// A labelled percentage, e.g. an age bucket or a social network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry {
    pub label: String,
    pub share: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenderDistribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub male: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub female: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficSection {
    pub url: Option<String>,
    pub domain: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub rank_global: Option<u64>,
    pub country: Option<String>,
    pub country_rank: Option<u64>,
    pub category: Option<String>,
    pub category_rank: Option<u64>,
    pub total_visits: Option<u64>,
    /// Visits keyed by month (`YYYY-MM-DD` or whatever label the source used).
    pub monthly_visits: Option<BTreeMap<String, u64>>,
    pub website_traffic_by_country: Option<Vec<CountryTraffic>>,
    pub engagement: Option<Engagement>,
    pub direct_traffic: Option<f64>,
    pub referral_traffic: Option<f64>,
    pub search_traffic: Option<f64>,
    pub social_traffic: Option<f64>,
    pub mail_traffic: Option<f64>,
    pub country_share: Option<f64>,
    pub preview_desktop: Option<String>,
    pub preview_mobile: Option<String>,
    pub snapshot_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordSection {
    pub top_keywords: Option<Vec<Keyword>>,
    pub total_keywords: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemographicsSection {
    pub company: Option<String>,
    pub company_employees: Option<String>,
    pub company_revenue_range: Option<String>,
    pub company_headquarters: Option<String>,
    pub age_distribution: Option<Vec<ShareEntry>>,
    pub gender_distribution: Option<GenderDistribution>,
    pub competitors: Option<Vec<serde_json::Value>>,
    pub top_interested_websites: Option<Vec<serde_json::Value>>,
    pub top_interested_topics: Option<Vec<serde_json::Value>>,
    pub top_categories: Option<Vec<serde_json::Value>>,
    pub top_competitors: Option<Vec<serde_json::Value>>,
    pub incoming_referring_domains: Option<Vec<serde_json::Value>>,
    pub outgoing_referring_domains: Option<Vec<serde_json::Value>>,
    pub ads_networks: Option<Vec<serde_json::Value>>,
    pub ads_sites: Option<Vec<serde_json::Value>>,
    pub social_networks_share: Option<Vec<ShareEntry>>,
}
