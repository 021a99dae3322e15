//! Sequential per-domain resolution: offline sample, then live fetch.

use siteintel_core::Settings;
use tracing::Instrument;

use crate::client::{ProfileSource, SimilarwebClient};
use crate::offline::{sample_search_url, OfflineSamples};
use crate::record::{assemble_record, Record};

/// Resolves and assembles one record per domain, in input order.
///
/// An offline sample always wins over a live fetch. Live fetches happen only
/// when `offline_only` is false. Domains that resolve to nothing are logged
/// and skipped; nothing here is fatal.
pub async fn process_domains(
    domains: &[String],
    settings: &Settings,
    offline_samples: Option<&OfflineSamples>,
    offline_only: bool,
) -> Vec<Record> {
    let client = if offline_only {
        None
    } else {
        match SimilarwebClient::from_settings(settings) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!(error = %e, "failed to build HTTP client; live fetches disabled");
                None
            }
        }
    };
    process_domains_with(domains, offline_samples, client.as_ref()).await
}

/// [`process_domains`] over any [`ProfileSource`]. `source = None` means
/// offline only.
pub async fn process_domains_with<S: ProfileSource>(
    domains: &[String],
    offline_samples: Option<&OfflineSamples>,
    source: Option<&S>,
) -> Vec<Record> {
    let mut records = Vec::with_capacity(domains.len());
    for domain in domains {
        let span = tracing::info_span!("domain", domain = %domain);
        if let Some(record) = resolve_domain(domain, offline_samples, source)
            .instrument(span)
            .await
        {
            records.push(record);
        }
    }
    tracing::info!(
        requested = domains.len(),
        resolved = records.len(),
        "finished processing domains"
    );
    records
}

async fn resolve_domain<S: ProfileSource>(
    domain: &str,
    offline_samples: Option<&OfflineSamples>,
    source: Option<&S>,
) -> Option<Record> {
    if let Some(sample) = offline_samples.and_then(|samples| samples.get(domain)) {
        tracing::info!("using offline sample");
        let search_url = sample_search_url(sample);
        return Some(assemble_record(domain, sample, search_url.as_deref()));
    }

    let raw = match source {
        Some(source) => source.fetch_raw_profile(domain).await,
        None => None,
    };
    match raw {
        Some(raw) => Some(assemble_record(domain, &raw, None)),
        None => {
            tracing::error!("No data available");
            None
        }
    }
}
