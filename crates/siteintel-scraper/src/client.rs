//! HTTP client for the Similarweb website overview endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use siteintel_core::Settings;

use crate::error::ScraperError;
use crate::types::RawProfile;

/// Characters of a non-200 body kept for logs.
const BODY_PREVIEW_CHARS: usize = 200;

/// Anything that can resolve a raw profile for a domain.
///
/// `None` means "no data": the source has already logged why.
pub trait ProfileSource {
    fn fetch_raw_profile(&self, domain: &str) -> impl Future<Output = Option<RawProfile>> + Send;
}

/// One GET per domain against `{base_url}/api/v1/website/{domain}/overview`.
///
/// A single underlying `reqwest::Client` is reused for every request of a run.
pub struct SimilarwebClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SimilarwebClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Builds a client from loaded settings.
    ///
    /// # Errors
    ///
    /// See [`SimilarwebClient::new`].
    pub fn from_settings(settings: &Settings) -> Result<Self, ScraperError> {
        Self::new(
            &settings.similarweb.base_url,
            settings.similarweb.api_key.clone(),
            settings.runner.timeout_seconds,
            &settings.similarweb.user_agent,
        )
    }

    /// Overview URL for `domain`, without the API key.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if the configured base URL
    /// does not parse or cannot carry a path.
    pub fn overview_url(&self, domain: &str) -> Result<Url, ScraperError> {
        let invalid = |reason: String| ScraperError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["api", "v1", "website", domain, "overview"]);
        Ok(url)
    }

    /// Fetches the raw overview payload for `domain`.
    ///
    /// A JSON `null` body is returned as `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if the base URL is unusable.
    /// - [`ScraperError::Http`] on network, TLS, or timeout failure.
    /// - [`ScraperError::UnexpectedStatus`] for any non-200 response.
    /// - [`ScraperError::Deserialize`] if the body is not valid JSON.
    pub async fn try_fetch_raw_profile(&self, domain: &str) -> Result<RawProfile, ScraperError> {
        let url = self.overview_url(domain)?;
        let mut request = self.client.get(url.clone());
        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key)]);
        }

        let response = request.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        if status != reqwest::StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body_preview: body.chars().take(BODY_PREVIEW_CHARS).collect(),
            });
        }

        serde_json::from_str::<RawProfile>(&body).map_err(|source| ScraperError::Deserialize {
            context: format!("overview for {domain}"),
            source,
        })
    }
}

impl ProfileSource for SimilarwebClient {
    /// Collapses every failure to `None`, logging each kind distinctly.
    async fn fetch_raw_profile(&self, domain: &str) -> Option<RawProfile> {
        tracing::info!(domain, "fetching overview");
        match self.try_fetch_raw_profile(domain).await {
            Ok(RawProfile::Null) => {
                tracing::warn!(domain, "overview body was null");
                None
            }
            Ok(raw) => Some(raw),
            Err(ScraperError::UnexpectedStatus {
                status,
                url,
                body_preview,
            }) => {
                tracing::warn!(domain, status, %url, body = %body_preview, "non-200 response");
                None
            }
            Err(e @ ScraperError::Deserialize { .. }) => {
                tracing::error!(domain, error = %e, "failed to decode overview JSON");
                None
            }
            Err(e) => {
                tracing::error!(domain, error = %e, "request failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
