use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// lookup / first_match
// -----------------------------------------------------------------------

#[test]
fn lookup_follows_nested_objects() {
    let raw = json!({"overview": {"company": {"name": "Acme"}}});
    assert_eq!(
        lookup(&raw, "overview.company.name"),
        Some(&json!("Acme"))
    );
}

#[test]
fn lookup_treats_null_as_absent() {
    let raw = json!({"overview": {"url": null}});
    assert!(lookup(&raw, "overview.url").is_none());
}

#[test]
fn lookup_through_non_object_is_absent() {
    let raw = json!({"overview": ["not", "an", "object"]});
    assert!(lookup(&raw, "overview.url").is_none());

    let raw = json!({"overview": "text"});
    assert!(lookup(&raw, "overview.url").is_none());
}

#[test]
fn lookup_on_null_payload_is_absent() {
    assert!(lookup(&Value::Null, "overview.url").is_none());
}

#[test]
fn first_match_prefers_earlier_candidate() {
    let raw = json!({"overview": {"url": "https://a.com"}, "meta": {"url": "https://b.com"}});
    let url = first_match(&raw, &["overview.url", "meta.url"], as_text);
    assert_eq!(url.as_deref(), Some("https://a.com"));
}

#[test]
fn first_match_falls_through_missing_and_unusable_candidates() {
    let raw = json!({"overview": {"url": ""}, "meta": {"url": "https://b.com"}});
    let url = first_match(&raw, &["missing.url", "overview.url", "meta.url"], as_text);
    assert_eq!(url.as_deref(), Some("https://b.com"));
}

#[test]
fn first_match_never_combines_candidates() {
    let raw = json!({"a": {"x": 1}, "b": {"x": 2}});
    assert_eq!(first_match(&raw, &["a.x", "b.x"], as_count), Some(1));
}

#[test]
fn first_match_returns_none_when_nothing_matches() {
    let raw = json!({"a": {"x": "not a number"}});
    assert_eq!(first_match(&raw, &["a.x"], as_count), None);
}

// -----------------------------------------------------------------------
// normalize_percentage / as_percentage
// -----------------------------------------------------------------------

#[test]
fn normalize_percentage_converges_for_both_conventions() {
    assert_eq!(normalize_percentage(0.42), 42.0);
    assert_eq!(normalize_percentage(42.0), 42.0);
}

#[test]
fn normalize_percentage_treats_one_as_fraction() {
    assert_eq!(normalize_percentage(1.0), 100.0);
    assert_eq!(normalize_percentage(0.0), 0.0);
}

#[test]
fn normalize_percentage_rounds_float_noise() {
    assert_eq!(normalize_percentage(0.57), 57.0);
    assert_eq!(normalize_percentage(0.2615), 26.15);
}

#[test]
fn as_percentage_honours_explicit_percent_sign() {
    assert_eq!(as_percentage(&json!("0.5%")), Some(0.5));
    assert_eq!(as_percentage(&json!(" 42 % ")), Some(42.0));
}

#[test]
fn as_percentage_normalizes_numbers_and_numeric_strings() {
    assert_eq!(as_percentage(&json!(0.25)), Some(25.0));
    assert_eq!(as_percentage(&json!("0.25")), Some(25.0));
    assert_eq!(as_percentage(&json!(74.1)), Some(74.1));
}

#[test]
fn as_percentage_rejects_negative_and_non_numeric() {
    assert_eq!(as_percentage(&json!(-0.3)), None);
    assert_eq!(as_percentage(&json!("n/a")), None);
    assert_eq!(as_percentage(&json!({"value": 0.3})), None);
}

#[test]
fn as_percentage_rejects_values_that_overflow_when_rounded() {
    assert_eq!(as_percentage(&json!(1.7e308)), None);
    assert_eq!(as_percentage(&json!("1.7e308%")), None);
}

// -----------------------------------------------------------------------
// counts, floats, text
// -----------------------------------------------------------------------

#[test]
fn as_count_accepts_display_strings() {
    assert_eq!(as_count(&json!("12,345")), Some(12_345));
    assert_eq!(as_count(&json!("11.2M")), Some(11_200_000));
    assert_eq!(as_count(&json!("850K")), Some(850_000));
    assert_eq!(as_count(&json!("1.3B")), Some(1_300_000_000));
}

#[test]
fn as_count_accepts_numbers() {
    assert_eq!(as_count(&json!(4_350_000_000_u64)), Some(4_350_000_000));
    assert_eq!(as_count(&json!(3401.0)), Some(3401));
}

#[test]
fn as_count_rejects_negative_and_garbage() {
    assert_eq!(as_count(&json!(-5)), None);
    assert_eq!(as_count(&json!("lots")), None);
    assert_eq!(as_count(&json!("")), None);
    assert_eq!(as_count(&json!("12€")), None);
    assert_eq!(as_count(&json!(true)), None);
}

#[test]
fn as_float_strips_thousands_separators() {
    assert_eq!(as_float(&json!("1,024.5")), Some(1024.5));
    assert_eq!(as_float(&json!(4.82)), Some(4.82));
    assert_eq!(as_float(&json!("NaN")), None);
}

#[test]
fn as_text_rejects_blank_and_non_strings() {
    assert_eq!(as_text(&json!("  Acme  ")).as_deref(), Some("Acme"));
    assert_eq!(as_text(&json!("   ")), None);
    assert_eq!(as_text(&json!(12)), None);
}

#[test]
fn as_text_lenient_stringifies_numbers() {
    assert_eq!(as_text_lenient(&json!(250)).as_deref(), Some("250"));
    assert_eq!(as_text_lenient(&json!("1001-5000")).as_deref(), Some("1001-5000"));
    assert_eq!(as_text_lenient(&json!([1])), None);
}

#[test]
fn as_duration_secs_parses_clock_strings() {
    assert_eq!(as_duration_secs(&json!("00:05:12")), Some(312.0));
    assert_eq!(as_duration_secs(&json!("5:12")), Some(312.0));
    assert_eq!(as_duration_secs(&json!(312.4)), Some(312.4));
    assert_eq!(as_duration_secs(&json!("ab:cd")), None);
}

#[test]
fn as_snapshot_date_keeps_strings_and_renders_epochs() {
    assert_eq!(
        as_snapshot_date(&json!("2025-09-01")).as_deref(),
        Some("2025-09-01")
    );
    assert_eq!(
        as_snapshot_date(&json!(1_756_684_800)).as_deref(),
        Some("2025-09-01T00:00:00+00:00")
    );
    assert_eq!(
        as_snapshot_date(&json!(1_756_684_800_000_i64)).as_deref(),
        Some("2025-09-01T00:00:00+00:00")
    );
}

#[test]
fn as_list_drops_nulls_and_rejects_empty() {
    assert_eq!(as_list(&json!(["a", null, "b"])), Some(vec![json!("a"), json!("b")]));
    assert_eq!(as_list(&json!([null])), None);
    assert_eq!(as_list(&json!({"a": 1})), None);
}
