//! Identity, rank, visit, and traffic-source fields.

use std::collections::BTreeMap;

use serde_json::Value;
use siteintel_core::clean_domain;

use crate::probe::{
    as_count, as_duration_secs, as_float, as_percentage, as_snapshot_date, as_text, first_match,
    json_kind,
};
use crate::types::{CountryTraffic, Engagement, RawProfile, TrafficSection};

const URL: &[&str] = &["overview.url", "meta.url"];
const DOMAIN: &[&str] = &["overview.domain", "meta.domain", "domain"];
const TITLE: &[&str] = &["overview.title", "meta.title"];
const DESCRIPTION: &[&str] = &["overview.description", "meta.description"];
const RANK_GLOBAL: &[&str] = &[
    "overview.rankGlobal",
    "overview.globalRank",
    "traffic.rankGlobal",
    "traffic.globalRank.rank",
];
const COUNTRY: &[&str] = &["overview.country", "overview.countryCode", "traffic.topCountry"];
const COUNTRY_RANK: &[&str] = &[
    "overview.countryRank",
    "traffic.countryRank",
    "traffic.countryRank.rank",
];
const CATEGORY: &[&str] = &["overview.category", "meta.category", "traffic.category"];
const CATEGORY_RANK: &[&str] = &[
    "overview.categoryRank",
    "traffic.categoryRank",
    "traffic.categoryRank.rank",
];
const TOTAL_VISITS: &[&str] = &[
    "traffic.totalVisits",
    "overview.totalVisits",
    "traffic.engagement.visits",
    "engagement.visits",
];
const MONTHLY_VISITS: &[&str] = &["traffic.monthlyVisits", "traffic.estimatedMonthlyVisits"];
const BY_COUNTRY: &[&str] = &[
    "traffic.byCountry",
    "traffic.topCountryShares",
    "traffic.countries",
];
const ENGAGEMENT: &[&str] = &["traffic.engagement", "engagement"];
const DIRECT: &[&str] = &[
    "traffic.sources.direct",
    "traffic.trafficSources.Direct",
    "traffic.trafficSources.direct",
    "traffic.directTraffic",
];
const REFERRAL: &[&str] = &[
    "traffic.sources.referral",
    "traffic.trafficSources.Referrals",
    "traffic.trafficSources.Referral",
    "traffic.trafficSources.referral",
    "traffic.referralTraffic",
];
const SEARCH: &[&str] = &[
    "traffic.sources.search",
    "traffic.trafficSources.Search",
    "traffic.trafficSources.search",
    "traffic.searchTraffic",
];
const SOCIAL: &[&str] = &[
    "traffic.sources.social",
    "traffic.trafficSources.Social",
    "traffic.trafficSources.social",
    "traffic.socialTraffic",
];
const MAIL: &[&str] = &[
    "traffic.sources.mail",
    "traffic.trafficSources.Mail",
    "traffic.trafficSources.mail",
    "traffic.mailTraffic",
];
const COUNTRY_SHARE: &[&str] = &["traffic.countryShare", "overview.countryShare"];
const PREVIEW_DESKTOP: &[&str] = &[
    "overview.previewDesktop",
    "meta.previewDesktop",
    "meta.screenshots.desktop",
];
const PREVIEW_MOBILE: &[&str] = &[
    "overview.previewMobile",
    "meta.previewMobile",
    "meta.screenshots.mobile",
];
const SNAPSHOT_DATE: &[&str] = &[
    "overview.snapshotDate",
    "meta.snapshotDate",
    "traffic.snapshotDate",
];

/// Extracts the traffic section from a raw profile.
///
/// `url` falls back to `https://{domain}` when the payload names a domain but
/// no URL.
#[must_use]
pub fn build_traffic_section(raw: &RawProfile) -> TrafficSection {
    let domain = first_match(raw, DOMAIN, as_domain);
    let url = first_match(raw, URL, as_text)
        .or_else(|| domain.as_ref().map(|d| format!("https://{d}")));

    TrafficSection {
        url,
        domain,
        title: first_match(raw, TITLE, as_text),
        description: first_match(raw, DESCRIPTION, as_text),
        rank_global: first_match(raw, RANK_GLOBAL, as_count),
        country: first_match(raw, COUNTRY, as_text),
        country_rank: first_match(raw, COUNTRY_RANK, as_count),
        category: first_match(raw, CATEGORY, as_text),
        category_rank: first_match(raw, CATEGORY_RANK, as_count),
        total_visits: first_match(raw, TOTAL_VISITS, as_count),
        monthly_visits: first_match(raw, MONTHLY_VISITS, as_monthly_visits),
        website_traffic_by_country: first_match(raw, BY_COUNTRY, as_country_traffic),
        engagement: first_match(raw, ENGAGEMENT, as_engagement),
        direct_traffic: first_match(raw, DIRECT, as_percentage),
        referral_traffic: first_match(raw, REFERRAL, as_percentage),
        search_traffic: first_match(raw, SEARCH, as_percentage),
        social_traffic: first_match(raw, SOCIAL, as_percentage),
        mail_traffic: first_match(raw, MAIL, as_percentage),
        country_share: first_match(raw, COUNTRY_SHARE, as_percentage),
        preview_desktop: first_match(raw, PREVIEW_DESKTOP, as_text),
        preview_mobile: first_match(raw, PREVIEW_MOBILE, as_text),
        snapshot_date: first_match(raw, SNAPSHOT_DATE, as_snapshot_date),
    }
}

fn as_domain(value: &Value) -> Option<String> {
    clean_domain(&as_text(value)?).ok()
}

/// `{"2025-08-01": 11020000, ...}` or `[{"date": "2025-08-01", "visits": 11020000}, ...]`.
fn as_monthly_visits(value: &Value) -> Option<BTreeMap<String, u64>> {
    let months: BTreeMap<String, u64> = match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(month, visits)| Some((month.clone(), as_count(visits)?)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                Some((
                    first_match(item, &["date", "month"], as_text)?,
                    first_match(item, &["visits", "value"], as_count)?,
                ))
            })
            .collect(),
        _ => return None,
    };
    (!months.is_empty()).then_some(months)
}

/// `[{"countryCode": "US", "value": 0.26, "visits": 2939000}, ...]` or
/// `{"US": 0.26, ...}`.
fn as_country_traffic(value: &Value) -> Option<Vec<CountryTraffic>> {
    let countries: Vec<CountryTraffic> = match value {
        Value::Object(map) => map
            .iter()
            .map(|(country, share)| CountryTraffic {
                country: country.clone(),
                share: as_percentage(share),
                visits: None,
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let Some(country) =
                    first_match(item, &["country", "countryCode", "code", "name"], as_text)
                else {
                    tracing::debug!(
                        found = json_kind(item),
                        "skipping country entry without a country"
                    );
                    return None;
                };
                Some(CountryTraffic {
                    country,
                    share: first_match(item, &["share", "value", "percentage"], as_percentage),
                    visits: first_match(item, &["visits"], as_count),
                })
            })
            .collect(),
        _ => return None,
    };
    (!countries.is_empty()).then_some(countries)
}

fn as_engagement(value: &Value) -> Option<Engagement> {
    if !value.is_object() {
        return None;
    }
    let engagement = Engagement {
        visits: first_match(value, &["visits", "totalVisits"], as_count),
        time_on_site: first_match(
            value,
            &["timeOnSite", "avgVisitDuration", "time_on_site"],
            as_duration_secs,
        ),
        pages_per_visit: first_match(value, &["pagesPerVisit", "pages_per_visit"], as_float),
        bounce_rate: first_match(value, &["bounceRate", "bounce_rate"], as_percentage),
    };
    (!engagement.is_empty()).then_some(engagement)
}

#[cfg(test)]
#[path = "traffic_test.rs"]
mod tests;
