use super::*;

fn client(base_url: &str, api_key: Option<&str>) -> SimilarwebClient {
    SimilarwebClient::new(base_url, api_key.map(str::to_string), 5, "siteintel-test/0.1")
        .expect("failed to build test client")
}

#[test]
fn overview_url_appends_api_path() {
    let url = client("https://data.similarweb.com", None)
        .overview_url("example.com")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://data.similarweb.com/api/v1/website/example.com/overview"
    );
}

#[test]
fn overview_url_tolerates_trailing_slash_and_prefix_path() {
    let url = client("https://proxy.internal/similarweb/", None)
        .overview_url("example.com")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://proxy.internal/similarweb/api/v1/website/example.com/overview"
    );
}

#[test]
fn overview_url_never_contains_api_key() {
    let url = client("https://data.similarweb.com", Some("secret"))
        .overview_url("example.com")
        .unwrap();
    assert!(!url.as_str().contains("secret"));
}

#[test]
fn invalid_base_url_is_reported() {
    let err = client("data.similarweb.com", None)
        .overview_url("example.com")
        .unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidBaseUrl { ref base_url, .. } if base_url == "data.similarweb.com"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn blank_api_key_is_ignored() {
    let client = client("https://data.similarweb.com", Some("   "));
    assert!(client.api_key.is_none());
}

#[test]
fn from_settings_uses_configured_base_url() {
    let mut settings = Settings::default();
    settings.similarweb.base_url = "http://localhost:9000/".to_string();
    let client = SimilarwebClient::from_settings(&settings).unwrap();
    assert_eq!(client.base_url, "http://localhost:9000");
}

#[tokio::test]
async fn invalid_base_url_collapses_to_none() {
    let client = client("not a url", None);
    assert!(client.fetch_raw_profile("example.com").await.is_none());
}
