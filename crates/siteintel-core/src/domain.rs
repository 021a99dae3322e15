//! Canonical bare-domain normalization.
//!
//! Input may be a bare domain (`"Example.com"`), a full URL
//! (`"https://www.example.com/path?q=1#top"`) or anything in between. The
//! output is always a lowercase host with no scheme, credentials, port, path,
//! query, fragment, leading `www.` labels or surrounding dots.

use crate::DomainError;

/// Normalizes `raw` into a canonical lowercase bare domain.
///
/// Idempotent: `clean_domain(&clean_domain(x)?)? == clean_domain(x)?`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDomain`] when nothing host-like remains,
/// e.g. for `""`, `"   "` or `"https://"`.
pub fn clean_domain(raw: &str) -> Result<String, DomainError> {
    let lowered = raw.trim().to_lowercase();

    let without_scheme = lowered
        .split_once("://")
        .map_or(lowered.as_str(), |(_, rest)| rest);

    // Everything from the first path, query, or fragment delimiter onward is dropped.
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host);
    let host = host_port
        .split_once(':')
        .map_or(host_port, |(host, _)| host)
        .trim();

    let host = strip_www_and_dots(host);
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidDomain(raw.to_string()));
    }

    Ok(host.to_string())
}

/// Repeatedly removes surrounding dots and a leading `www.` until neither
/// applies, so the result is a fixed point.
fn strip_www_and_dots(mut host: &str) -> &str {
    loop {
        let trimmed = host.trim_matches('.');
        match trimmed.strip_prefix("www.") {
            Some(rest) => host = rest,
            None => return trimmed,
        }
    }
}

#[cfg(test)]
#[path = "domain_test.rs"]
mod tests;
