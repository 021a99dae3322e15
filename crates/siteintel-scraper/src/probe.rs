//! Field probing and value coercion over loosely-typed JSON payloads.
//!
//! Section parsers describe each output field as an ordered list of dotted
//! candidate paths (`"overview.url"`, `"meta.url"`) plus a converter. The
//! first candidate that exists, is not `null`, and converts successfully
//! wins. Candidates are never combined.
//!
//! Nothing here returns an error: malformed structure is logged at `debug`
//! and treated as absent.

use serde_json::Value;

/// Resolves a dotted object path inside `raw`.
///
/// Returns `None` when any segment is missing, when the final value is
/// `null`, or when an intermediate value is not an object.
pub(crate) fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = raw;
    for key in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(key)?,
            Value::Null => return None,
            other => {
                tracing::debug!(
                    path,
                    found = json_kind(other),
                    "expected an object while probing; treating as absent"
                );
                return None;
            }
        }
    }
    (!current.is_null()).then_some(current)
}

/// Probes `candidates` in order and returns the first value that `convert`
/// accepts.
pub(crate) fn first_match<T, F>(raw: &Value, candidates: &[&str], convert: F) -> Option<T>
where
    F: Fn(&Value) -> Option<T>,
{
    candidates.iter().find_map(|path| {
        let value = lookup(raw, path)?;
        let converted = convert(value);
        if converted.is_none() {
            tracing::debug!(
                path,
                found = json_kind(value),
                "unusable value at candidate path; probing next"
            );
        }
        converted
    })
}

/// Short type name of a JSON value for log fields.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts a 0–1 fraction or a 0–100 percentage to a 0–100 percentage.
///
/// Values `<= 1.0` are read as fractions and scaled by 100; larger values are
/// assumed to be percentages already. The result is rounded to four decimal
/// places so that `0.42` maps to exactly `42.0`.
///
/// The boundary is a heuristic: a genuine `0.5%` share is indistinguishable
/// from a `0.5` fraction and comes out as `50.0`. Use [`as_percentage`] with
/// a `"0.5%"` string to force the percentage reading.
#[must_use]
pub fn normalize_percentage(value: f64) -> f64 {
    let percent = if value <= 1.0 { value * 100.0 } else { value };
    round4(percent)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Non-empty, trimmed string. Other JSON types are rejected.
pub(crate) fn as_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Like [`as_text`], but numbers and booleans are stringified.
pub(crate) fn as_text_lenient(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => as_text(other),
    }
}

/// Finite float from a number or a numeric string (`"4.82"`, `"1,024.5"`).
pub(crate) fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Non-negative integer count.
///
/// Accepts integers, integral-ish floats (rounded), and display strings such
/// as `"12,345"`, `"11.2M"`, `"850K"` or `"1.3B"`.
pub(crate) fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(float_to_count)),
        Value::String(s) => parse_count(s),
        _ => None,
    }
}

fn parse_count(raw: &str) -> Option<u64> {
    let cleaned = raw.trim().replace([',', ' '], "");
    let multiplier = match cleaned.chars().last()? {
        'k' | 'K' => Some(1e3),
        'm' | 'M' => Some(1e6),
        'b' | 'B' => Some(1e9),
        _ => None,
    };
    match multiplier {
        // The suffix is ASCII, so dropping its single byte stays on a char boundary.
        Some(multiplier) => {
            let digits = &cleaned[..cleaned.len() - 1];
            float_to_count(digits.parse::<f64>().ok()? * multiplier)
        }
        None => cleaned
            .parse::<u64>()
            .ok()
            .or_else(|| cleaned.parse::<f64>().ok().and_then(float_to_count)),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn float_to_count(value: f64) -> Option<u64> {
    // u64::MAX as f64 rounds up to 2^64, so compare strictly.
    (value.is_finite() && value >= 0.0 && value < u64::MAX as f64).then(|| value.round() as u64)
}

/// Percentage on the 0–100 scale.
///
/// Strings carrying an explicit `%` sign (`"42%"`, `"0.5 %"`) are taken as
/// percentages verbatim. Everything else goes through
/// [`normalize_percentage`]. Negative values are rejected.
pub(crate) fn as_percentage(value: &Value) -> Option<f64> {
    if let Some(s) = value.as_str() {
        if let Some(stripped) = s.trim().strip_suffix('%') {
            let explicit = stripped.trim().parse::<f64>().ok()?;
            return (explicit >= 0.0)
                .then(|| round4(explicit))
                .filter(|v| v.is_finite());
        }
    }
    as_float(value)
        .filter(|v| *v >= 0.0)
        .map(normalize_percentage)
        .filter(|v| v.is_finite())
}

/// Duration in seconds from a number or an `"HH:MM:SS"` / `"MM:SS"` string.
pub(crate) fn as_duration_secs(value: &Value) -> Option<f64> {
    if let Some(s) = value.as_str() {
        if s.contains(':') {
            return s.trim().split(':').try_fold(0.0_f64, |acc, part| {
                let part = part.trim().parse::<f64>().ok()?;
                (part.is_finite() && part >= 0.0).then_some(acc * 60.0 + part)
            });
        }
    }
    as_float(value).filter(|v| *v >= 0.0)
}

/// Snapshot date as text.
///
/// Strings are kept verbatim. Integer epochs are rendered as RFC 3339 UTC;
/// values above `10^11` are read as milliseconds, the rest as seconds.
pub(crate) fn as_snapshot_date(value: &Value) -> Option<String> {
    if let Some(text) = as_text(value) {
        return Some(text);
    }
    let epoch = value.as_i64()?;
    let datetime = if epoch.abs() > 100_000_000_000 {
        chrono::DateTime::from_timestamp_millis(epoch)
    } else {
        chrono::DateTime::from_timestamp(epoch, 0)
    }?;
    Some(datetime.to_rfc3339_opts(chrono::SecondsFormat::Secs, false))
}

/// Non-empty JSON list with `null` items removed.
pub(crate) fn as_list(value: &Value) -> Option<Vec<Value>> {
    let items: Vec<Value> = value
        .as_array()?
        .iter()
        .filter(|item| !item.is_null())
        .cloned()
        .collect();
    (!items.is_empty()).then_some(items)
}

#[cfg(test)]
#[path = "probe_test.rs"]
mod tests;
