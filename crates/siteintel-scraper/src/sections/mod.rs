//! Section parsers: `RawProfile -> Section`.
//!
//! Each parser is a pure function over the raw payload. They share no state,
//! so the order in which a record assembler invokes them cannot affect the
//! result.

mod demographics;
mod keywords;
mod traffic;

pub use demographics::build_demographics_section;
pub use keywords::build_keyword_section;
pub use traffic::build_traffic_section;

use serde_json::Value;

use crate::probe::{as_percentage, as_text, first_match, json_kind};
use crate::types::ShareEntry;

const ENTRY_LABEL_KEYS: &[&str] = &["label", "name", "range", "key", "age"];
const ENTRY_SHARE_KEYS: &[&str] = &["share", "value", "percentage", "percent"];

/// Labelled shares from either `{"18-24": 0.18, ...}` or
/// `[{"label": "18-24", "share": 0.18}, ...]`.
///
/// Entries without a usable label or share are skipped. An empty result is
/// `None`.
pub(crate) fn as_share_entries(value: &Value) -> Option<Vec<ShareEntry>> {
    let entries: Vec<ShareEntry> = match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(label, share)| {
                let label = label.trim();
                if label.is_empty() {
                    return None;
                }
                Some(ShareEntry {
                    label: label.to_string(),
                    share: as_percentage(share)?,
                })
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let entry = share_entry_from_object(item);
                if entry.is_none() {
                    tracing::debug!(found = json_kind(item), "skipping unusable share entry");
                }
                entry
            })
            .collect(),
        _ => return None,
    };
    (!entries.is_empty()).then_some(entries)
}

fn share_entry_from_object(item: &Value) -> Option<ShareEntry> {
    Some(ShareEntry {
        label: first_match(item, ENTRY_LABEL_KEYS, as_text)?,
        share: first_match(item, ENTRY_SHARE_KEYS, as_percentage)?,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn share_entries_from_object_map() {
        let entries = as_share_entries(&json!({"18-24": 0.25, "25-34": 40})).unwrap();
        assert_eq!(
            entries,
            vec![
                ShareEntry {
                    label: "18-24".to_string(),
                    share: 25.0
                },
                ShareEntry {
                    label: "25-34".to_string(),
                    share: 40.0
                },
            ]
        );
    }

    #[test]
    fn share_entries_from_list_with_alternate_keys() {
        let entries = as_share_entries(&json!([
            {"name": "LinkedIn", "value": 0.44},
            {"label": "YouTube", "share": "22%"},
            {"name": "missing share"},
            "not an object"
        ]))
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "LinkedIn");
        assert_eq!(entries[0].share, 44.0);
        assert_eq!(entries[1].share, 22.0);
    }

    #[test]
    fn share_entries_reject_scalars_and_empty() {
        assert!(as_share_entries(&json!(0.5)).is_none());
        assert!(as_share_entries(&json!([])).is_none());
        assert!(as_share_entries(&json!({"": 0.5})).is_none());
    }
}
