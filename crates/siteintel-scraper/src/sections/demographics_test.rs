use serde_json::json;

use super::*;
use crate::types::ShareEntry;

#[test]
fn company_fields_from_nested_object() {
    let raw = json!({"demographics": {"company": {
        "name": "Similarweb Ltd.",
        "employees": 1200,
        "revenue": "$200M - $500M",
        "headquarters": "Givatayim, Israel"
    }}});
    let section = build_demographics_section(&raw);
    assert_eq!(section.company.as_deref(), Some("Similarweb Ltd."));
    assert_eq!(section.company_employees.as_deref(), Some("1200"));
    assert_eq!(section.company_revenue_range.as_deref(), Some("$200M - $500M"));
    assert_eq!(section.company_headquarters.as_deref(), Some("Givatayim, Israel"));
}

#[test]
fn company_accepts_plain_string_and_fallbacks() {
    let raw = json!({"demographics": {"company": "Acme", "companyEmployees": "11-50"}});
    let section = build_demographics_section(&raw);
    assert_eq!(section.company.as_deref(), Some("Acme"));
    assert_eq!(section.company_employees.as_deref(), Some("11-50"));

    let raw = json!({"meta": {"company": "From Meta"}});
    assert_eq!(
        build_demographics_section(&raw).company.as_deref(),
        Some("From Meta")
    );
}

#[test]
fn age_distribution_from_object_map() {
    let raw = json!({"demographics": {"ageDistribution": {"18-24": 0.1821, "25-34": 0.3315}}});
    let ages = build_demographics_section(&raw).age_distribution.unwrap();
    assert_eq!(
        ages,
        vec![
            ShareEntry {
                label: "18-24".to_string(),
                share: 18.21
            },
            ShareEntry {
                label: "25-34".to_string(),
                share: 33.15
            },
        ]
    );
}

#[test]
fn gender_distribution_from_object() {
    let raw = json!({"demographics": {"genderDistribution": {"male": 0.5912, "female": 0.4088}}});
    let gender = build_demographics_section(&raw).gender_distribution.unwrap();
    assert_eq!(gender.male, Some(59.12));
    assert_eq!(gender.female, Some(40.88));
}

#[test]
fn gender_distribution_from_labelled_list() {
    let raw = json!({"demographics": {"gender": [
        {"label": "Male", "share": 55.1},
        {"label": "Female", "share": 44.9}
    ]}});
    let gender = build_demographics_section(&raw).gender_distribution.unwrap();
    assert_eq!(gender.male, Some(55.1));
    assert_eq!(gender.female, Some(44.9));
}

#[test]
fn gender_distribution_without_known_labels_is_absent() {
    let raw = json!({"demographics": {"gender": {"other": 1.0}}});
    assert!(build_demographics_section(&raw).gender_distribution.is_none());
}

#[test]
fn list_fields_pass_through_and_accept_snake_case() {
    let raw = json!({"demographics": {
        "topCompetitors": [{"domain": "semrush.com"}],
        "top_interested_topics": ["seo", null, "analytics"],
        "ads_networks": []
    }});
    let section = build_demographics_section(&raw);
    assert_eq!(section.top_competitors, Some(vec![json!({"domain": "semrush.com"})]));
    assert_eq!(
        section.top_interested_topics,
        Some(vec![json!("seo"), json!("analytics")])
    );
    assert!(section.ads_networks.is_none());
}

#[test]
fn list_fields_reject_non_lists() {
    let raw = json!({"demographics": {"competitors": {"a": 1}, "adsSites": "x.com"}});
    let section = build_demographics_section(&raw);
    assert!(section.competitors.is_none());
    assert!(section.ads_sites.is_none());
}

#[test]
fn social_networks_share_is_normalized() {
    let raw = json!({"demographics": {"socialNetworks": [
        {"name": "LinkedIn", "share": 0.4412},
        {"name": "YouTube", "share": 0.2217}
    ]}});
    let social = build_demographics_section(&raw).social_networks_share.unwrap();
    assert_eq!(social[0].label, "LinkedIn");
    assert_eq!(social[0].share, 44.12);
}

#[test]
fn demographics_as_list_is_absent() {
    let raw = json!({"demographics": [1, 2, 3]});
    assert_eq!(build_demographics_section(&raw), DemographicsSection::default());
}
