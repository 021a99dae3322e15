//! JSON and CSV writers for the collected records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Value;
use siteintel_core::OutputFormat;

use crate::error::ScraperError;
use crate::record::Record;

/// `{output_dir}/similarweb_{YYYYMMDD_HHMMSS}.{ext}` for a run started at `now`.
#[must_use]
pub fn default_output_path(output_dir: &Path, format: OutputFormat, now: DateTime<Utc>) -> PathBuf {
    output_dir.join(format!(
        "similarweb_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    ))
}

/// Writes `records` to `path` in `format`, creating parent directories.
///
/// # Errors
///
/// Returns [`ScraperError::ExportIo`] on filesystem failures and
/// [`ScraperError::ExportJson`] / [`ScraperError::ExportCsv`] on
/// serialization failures.
pub fn export_records(
    records: &[Record],
    format: OutputFormat,
    path: &Path,
) -> Result<(), ScraperError> {
    let io_err = |source: std::io::Error| ScraperError::ExportIo {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Json => write_json(records, &mut writer)?,
        OutputFormat::Csv => write_csv(records, &mut writer)?,
    }
    writer.flush().map_err(io_err)?;
    tracing::info!(path = %path.display(), count = records.len(), %format, "exported records");
    Ok(())
}

/// Pretty-printed JSON array of sparse records.
///
/// # Errors
///
/// Returns [`ScraperError::ExportJson`] if serialization or the write fails.
pub fn write_json<W: Write>(records: &[Record], writer: W) -> Result<(), ScraperError> {
    serde_json::to_writer_pretty(writer, records).map_err(ScraperError::ExportJson)
}

/// CSV with one column per key present in any record, in record key order.
///
/// No records means no header and an empty file.
///
/// # Errors
///
/// Returns [`ScraperError::ExportCsv`] if a row cannot be written.
pub fn write_csv<W: Write>(records: &[Record], writer: W) -> Result<(), ScraperError> {
    let rows: Vec<Vec<(&'static str, Value)>> = records.iter().map(Record::sparse_entries).collect();
    let header: Vec<&'static str> = Record::column_names()
        .into_iter()
        .filter(|column| rows.iter().flatten().any(|(key, _)| key == column))
        .collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    if !header.is_empty() {
        csv_writer.write_record(&header)?;
    }
    for row in &rows {
        let cells = header.iter().map(|column| {
            row.iter()
                .find(|(key, _)| key == column)
                .map_or_else(String::new, |(_, value)| render_cell(value))
        });
        csv_writer.write_record(cells)?;
    }
    csv_writer.flush().map_err(|e| ScraperError::ExportCsv(e.into()))?;
    Ok(())
}

/// Strings verbatim, other scalars as their JSON text, nested values as
/// compact JSON.
fn render_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
