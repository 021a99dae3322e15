use chrono::TimeZone;
use serde_json::json;

use super::*;
use crate::record::assemble_record_at;

fn captured_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 14, 8, 30, 5)
        .single()
        .expect("valid instant")
}

fn sample_records() -> Vec<Record> {
    vec![
        assemble_record_at(
            "example.com",
            &json!({"meta": {"title": "Example, Inc."}, "overview": {"globalRank": 12}}),
            None,
            captured_at(),
        ),
        assemble_record_at(
            "foo.org",
            &json!({"keywords": {"topKeywords": ["foo"]}}),
            None,
            captured_at(),
        ),
    ]
}

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("siteintel-export-{}", uuid::Uuid::new_v4()))
}

#[test]
fn default_output_path_uses_timestamp_and_extension() {
    let path = default_output_path(Path::new("data"), OutputFormat::Csv, captured_at());
    assert_eq!(path, PathBuf::from("data/similarweb_20250914_083005.csv"));
}

#[test]
fn json_export_is_a_sparse_array() {
    let mut buffer = Vec::new();
    write_json(&sample_records(), &mut buffer).unwrap();

    let parsed: Value = serde_json::from_slice(&buffer).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], json!("Example, Inc."));
    assert!(rows[1].get("title").is_none());
    assert!(rows[0].get("topKeywords").is_none());
}

#[test]
fn json_export_of_nothing_is_empty_array() {
    let mut buffer = Vec::new();
    write_json(&[], &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "[]");
}

#[test]
fn csv_header_is_union_of_present_keys_in_record_order() {
    let mut buffer = Vec::new();
    write_csv(&sample_records(), &mut buffer).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let header: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(
        header,
        vec![
            "data_captured_at",
            "searchUrl",
            "domain",
            "title",
            "rankGlobal",
            "topKeywords"
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "example.com");
    assert_eq!(&rows[0][3], "Example, Inc.");
    assert_eq!(&rows[0][4], "12");
    assert_eq!(&rows[0][5], "");
    assert_eq!(&rows[1][5], r#"[{"name":"foo"}]"#);
}

#[test]
fn csv_export_of_nothing_is_empty() {
    let mut buffer = Vec::new();
    write_csv(&[], &mut buffer).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn export_records_creates_parent_directories() {
    let dir = temp_dir();
    let path = dir.join("nested").join("out.json");

    export_records(&sample_records(), OutputFormat::Json, &path).unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written.as_array().map(Vec::len), Some(2));

    std::fs::remove_dir_all(&dir).ok();
}
