//! Top organic keywords.

use serde_json::Value;

use crate::probe::{as_count, as_float, as_text, first_match, json_kind};
use crate::types::{Keyword, KeywordSection, RawProfile};

const TOP_KEYWORDS: &[&str] = &["keywords.topKeywords", "keywords.top", "topKeywords"];
const TOTAL_KEYWORDS: &[&str] = &[
    "keywords.total",
    "keywords.totalKeywords",
    "keywords.total_keywords",
];

/// Extracts the keyword section from a raw profile.
#[must_use]
pub fn build_keyword_section(raw: &RawProfile) -> KeywordSection {
    KeywordSection {
        top_keywords: first_match(raw, TOP_KEYWORDS, as_keywords),
        total_keywords: first_match(raw, TOTAL_KEYWORDS, as_count),
    }
}

fn as_keywords(value: &Value) -> Option<Vec<Keyword>> {
    let keywords: Vec<Keyword> = value
        .as_array()?
        .iter()
        .filter_map(|item| {
            let keyword = as_keyword(item);
            if keyword.is_none() {
                tracing::debug!(found = json_kind(item), "skipping unusable keyword entry");
            }
            keyword
        })
        .collect();
    (!keywords.is_empty()).then_some(keywords)
}

/// A keyword entry is either a bare string or an object with a name.
fn as_keyword(item: &Value) -> Option<Keyword> {
    if let Some(name) = as_text(item) {
        return Some(Keyword {
            name,
            estimated_value: None,
            volume: None,
            cpc: None,
        });
    }
    Some(Keyword {
        name: first_match(item, &["name", "keyword", "term"], as_text)?,
        estimated_value: first_match(item, &["estimatedValue", "value", "traffic"], as_count),
        volume: first_match(item, &["volume", "searchVolume"], as_count),
        cpc: first_match(item, &["cpc", "CPC"], as_float),
    })
}
