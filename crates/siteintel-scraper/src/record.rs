//! Flat, sparse export record assembled from the three sections.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::Serialize;
use serde_json::Value;

use crate::sections::{build_demographics_section, build_keyword_section, build_traffic_section};
use crate::types::{
    CountryTraffic, DemographicsSection, Engagement, GenderDistribution, Keyword, KeywordSection,
    RawProfile, ShareEntry, TrafficSection,
};

/// One exported row per resolved domain.
///
/// Serializes sparsely: absent fields are omitted, never written as `null`.
/// Key order follows [`Record::column_names`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub data_captured_at: String,
    pub search_url: String,
    pub url: Option<String>,
    pub domain: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub rank_global: Option<u64>,
    pub country: Option<String>,
    pub country_rank: Option<u64>,
    pub category: Option<String>,
    pub category_rank: Option<u64>,
    pub total_visits: Option<u64>,
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
    pub top_keywords: Option<Vec<Keyword>>,
    pub total_keywords: Option<u64>,
    pub company: Option<String>,
    pub company_employees: Option<String>,
    pub company_revenue_range: Option<String>,
    pub company_headquarters: Option<String>,
    pub age_distribution: Option<Vec<ShareEntry>>,
    pub gender_distribution: Option<GenderDistribution>,
    pub competitors: Option<Vec<Value>>,
    pub top_interested_websites: Option<Vec<Value>>,
    pub top_interested_topics: Option<Vec<Value>>,
    pub top_categories: Option<Vec<Value>>,
    pub top_competitors: Option<Vec<Value>>,
    pub incoming_referring_domains: Option<Vec<Value>>,
    pub outgoing_referring_domains: Option<Vec<Value>>,
    pub ads_networks: Option<Vec<Value>>,
    pub ads_sites: Option<Vec<Value>>,
    pub social_networks_share: Option<Vec<ShareEntry>>,
}

/// Default `searchUrl` for a domain when the source does not provide one.
#[must_use]
pub fn default_search_url(domain: &str) -> String {
    format!("https://www.similarweb.com/website/{domain}/")
}

/// Builds a record for `domain` from `raw`, stamped with the current instant.
///
/// `search_url` overrides the synthesized Similarweb URL when given.
#[must_use]
pub fn assemble_record(domain: &str, raw: &RawProfile, search_url: Option<&str>) -> Record {
    assemble_record_at(domain, raw, search_url, Utc::now())
}

/// Like [`assemble_record`] with an explicit capture instant.
#[must_use]
pub fn assemble_record_at(
    domain: &str,
    raw: &RawProfile,
    search_url: Option<&str>,
    captured_at: DateTime<Utc>,
) -> Record {
    let traffic = build_traffic_section(raw);
    let keywords = build_keyword_section(raw);
    let demographics = build_demographics_section(raw);
    Record::from_sections(
        domain,
        search_url,
        captured_at,
        traffic,
        keywords,
        demographics,
    )
}

impl Record {
    /// Merges the three sections field by field.
    #[must_use]
    pub fn from_sections(
        domain: &str,
        search_url: Option<&str>,
        captured_at: DateTime<Utc>,
        traffic: TrafficSection,
        keywords: KeywordSection,
        demographics: DemographicsSection,
    ) -> Self {
        Self {
            data_captured_at: captured_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            search_url: search_url.map_or_else(|| default_search_url(domain), str::to_string),
            url: traffic.url,
            domain: traffic.domain.unwrap_or_else(|| domain.to_string()),
            title: traffic.title,
            description: traffic.description,
            rank_global: traffic.rank_global,
            country: traffic.country,
            country_rank: traffic.country_rank,
            category: traffic.category,
            category_rank: traffic.category_rank,
            total_visits: traffic.total_visits,
            monthly_visits: traffic.monthly_visits,
            website_traffic_by_country: traffic.website_traffic_by_country,
            engagement: traffic.engagement,
            direct_traffic: traffic.direct_traffic,
            referral_traffic: traffic.referral_traffic,
            search_traffic: traffic.search_traffic,
            social_traffic: traffic.social_traffic,
            mail_traffic: traffic.mail_traffic,
            country_share: traffic.country_share,
            preview_desktop: traffic.preview_desktop,
            preview_mobile: traffic.preview_mobile,
            snapshot_date: traffic.snapshot_date,
            top_keywords: keywords.top_keywords,
            total_keywords: keywords.total_keywords,
            company: demographics.company,
            company_employees: demographics.company_employees,
            company_revenue_range: demographics.company_revenue_range,
            company_headquarters: demographics.company_headquarters,
            age_distribution: demographics.age_distribution,
            gender_distribution: demographics.gender_distribution,
            competitors: demographics.competitors,
            top_interested_websites: demographics.top_interested_websites,
            top_interested_topics: demographics.top_interested_topics,
            top_categories: demographics.top_categories,
            top_competitors: demographics.top_competitors,
            incoming_referring_domains: demographics.incoming_referring_domains,
            outgoing_referring_domains: demographics.outgoing_referring_domains,
            ads_networks: demographics.ads_networks,
            ads_sites: demographics.ads_sites,
            social_networks_share: demographics.social_networks_share,
        }
    }

    /// Every exported key paired with its value, present or not, in export
    /// order.
    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("data_captured_at", to_json(Some(&self.data_captured_at))),
            ("searchUrl", to_json(Some(&self.search_url))),
            ("url", to_json(self.url.as_ref())),
            ("domain", to_json(Some(&self.domain))),
            ("title", to_json(self.title.as_ref())),
            ("description", to_json(self.description.as_ref())),
            ("rankGlobal", to_json(self.rank_global.as_ref())),
            ("country", to_json(self.country.as_ref())),
            ("countryRank", to_json(self.country_rank.as_ref())),
            ("category", to_json(self.category.as_ref())),
            ("categoryRank", to_json(self.category_rank.as_ref())),
            ("totalVisits", to_json(self.total_visits.as_ref())),
            ("monthlyVisits", to_json(self.monthly_visits.as_ref())),
            (
                "website_traffic_by_country",
                to_json(self.website_traffic_by_country.as_ref()),
            ),
            ("engagement", to_json(self.engagement.as_ref())),
            ("directTraffic", to_json(self.direct_traffic.as_ref())),
            ("referralTraffic", to_json(self.referral_traffic.as_ref())),
            ("searchTraffic", to_json(self.search_traffic.as_ref())),
            ("socialTraffic", to_json(self.social_traffic.as_ref())),
            ("mailTraffic", to_json(self.mail_traffic.as_ref())),
            ("countryShare", to_json(self.country_share.as_ref())),
            ("previewDesktop", to_json(self.preview_desktop.as_ref())),
            ("previewMobile", to_json(self.preview_mobile.as_ref())),
            ("snapshotDate", to_json(self.snapshot_date.as_ref())),
            ("topKeywords", to_json(self.top_keywords.as_ref())),
            ("total_keywords", to_json(self.total_keywords.as_ref())),
            ("company", to_json(self.company.as_ref())),
            ("company_employees", to_json(self.company_employees.as_ref())),
            (
                "company_revenue_range",
                to_json(self.company_revenue_range.as_ref()),
            ),
            (
                "company_headquarters",
                to_json(self.company_headquarters.as_ref()),
            ),
            ("age_distribution", to_json(self.age_distribution.as_ref())),
            (
                "gender_distribution",
                to_json(self.gender_distribution.as_ref()),
            ),
            ("competitors", to_json(self.competitors.as_ref())),
            (
                "top_interested_websites",
                to_json(self.top_interested_websites.as_ref()),
            ),
            (
                "top_interested_topics",
                to_json(self.top_interested_topics.as_ref()),
            ),
            ("top_categories", to_json(self.top_categories.as_ref())),
            ("top_competitors", to_json(self.top_competitors.as_ref())),
            (
                "incoming_referring_domains",
                to_json(self.incoming_referring_domains.as_ref()),
            ),
            (
                "outgoing_referring_domains",
                to_json(self.outgoing_referring_domains.as_ref()),
            ),
            ("ads_networks", to_json(self.ads_networks.as_ref())),
            ("ads_sites", to_json(self.ads_sites.as_ref())),
            (
                "social_networks_share",
                to_json(self.social_networks_share.as_ref()),
            ),
        ]
    }

    /// All exported keys in export order.
    #[must_use]
    pub fn column_names() -> Vec<&'static str> {
        Record::default()
            .fields()
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    /// The present fields only, in export order. This is the single place
    /// where absent and `null` values are dropped.
    #[must_use]
    pub fn sparse_entries(&self) -> Vec<(&'static str, Value)> {
        self.fields()
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_null()).map(|v| (key, v)))
            .collect()
    }
}

fn to_json<T: Serialize>(value: Option<&T>) -> Option<Value> {
    value.and_then(|v| serde_json::to_value(v).ok())
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let entries = self.sparse_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
