//! Locally stored profiles used in place of live fetches.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use siteintel_core::clean_domain;

use crate::error::ScraperError;
use crate::probe::{as_text, first_match, json_kind};
use crate::types::RawProfile;

/// Offline profiles keyed by normalized domain.
pub type OfflineSamples = HashMap<String, RawProfile>;

const SAMPLE_DOMAIN: &[&str] = &["overview.domain", "domain", "meta.domain"];

/// Loads offline samples, logging and returning an empty map on any failure.
#[must_use]
pub fn load_offline_samples(path: &Path) -> OfflineSamples {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "offline samples file not found");
        return OfflineSamples::new();
    }
    match try_load_offline_samples(path) {
        Ok(samples) => {
            tracing::info!(
                path = %path.display(),
                count = samples.len(),
                "loaded offline samples"
            );
            samples
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load offline samples");
            OfflineSamples::new()
        }
    }
}

/// Reads and indexes an offline samples file.
///
/// # Errors
///
/// Returns [`ScraperError::SamplesIo`] if the file cannot be read and
/// [`ScraperError::SamplesParse`] if it is not valid JSON.
pub fn try_load_offline_samples(path: &Path) -> Result<OfflineSamples, ScraperError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScraperError::SamplesIo {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&contents).map_err(|source| ScraperError::SamplesParse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(index_samples(value))
}

/// Indexes a single profile object or a list of them by domain.
///
/// Later profiles for the same domain replace earlier ones.
#[must_use]
pub fn index_samples(value: Value) -> OfflineSamples {
    let profiles = match value {
        Value::Array(items) => items,
        Value::Object(_) => vec![value],
        other => {
            tracing::debug!(found = json_kind(&other), "offline samples are not a list or object");
            return OfflineSamples::new();
        }
    };

    let mut samples = OfflineSamples::with_capacity(profiles.len());
    for profile in profiles {
        if !profile.is_object() {
            tracing::debug!(found = json_kind(&profile), "skipping non-object offline sample");
            continue;
        }
        match sample_domain(&profile) {
            Some(domain) => {
                samples.insert(domain, profile);
            }
            None => tracing::debug!("skipping offline sample without a usable domain"),
        }
    }
    samples
}

fn sample_domain(profile: &Value) -> Option<String> {
    first_match(profile, SAMPLE_DOMAIN, |v| clean_domain(&as_text(v)?).ok())
}

/// `meta.searchUrl` of an offline sample, if it carries one.
#[must_use]
pub fn sample_search_url(profile: &RawProfile) -> Option<String> {
    first_match(profile, &["meta.searchUrl"], as_text)
}
