//! One end-to-end run: read domains, resolve profiles, export.
//!
//! Only a missing or unreadable input file and export failures abort the run.
//! Per-domain failures are logged and skipped inside the processing loop.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use siteintel_core::{OutputFormat, Settings};

#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub(crate) input: PathBuf,
    pub(crate) output: Option<PathBuf>,
    /// Overrides `runner.output_format` when set.
    pub(crate) format: Option<OutputFormat>,
    pub(crate) samples: PathBuf,
    /// Live fetches with offline samples ignored.
    pub(crate) online: bool,
}

#[derive(Debug)]
pub(crate) struct RunSummary {
    pub(crate) record_count: usize,
    pub(crate) output_path: PathBuf,
}

/// Explicit `output` wins; otherwise a timestamped file under `output_dir`.
pub(crate) fn resolve_output_path(
    output: Option<&Path>,
    output_dir: &Path,
    format: OutputFormat,
    now: DateTime<Utc>,
) -> PathBuf {
    output.map_or_else(
        || siteintel_scraper::default_output_path(output_dir, format, now),
        Path::to_path_buf,
    )
}

/// # Errors
///
/// Returns an error if the input file is missing or unreadable, or if the
/// export cannot be written.
pub(crate) async fn run(settings: &Settings, options: &RunOptions) -> anyhow::Result<RunSummary> {
    let format = options.format.unwrap_or(settings.runner.output_format);

    let domains = siteintel_core::load_domains_from_file(&options.input)
        .context("failed to read input domains")?;
    tracing::info!(
        path = %options.input.display(),
        count = domains.len(),
        online = options.online,
        "loaded input domains"
    );

    let samples = if options.online {
        None
    } else {
        Some(siteintel_scraper::load_offline_samples(&options.samples))
    };

    let records = siteintel_scraper::process_domains(
        &domains,
        settings,
        samples.as_ref(),
        !options.online,
    )
    .await;

    let output_path = resolve_output_path(
        options.output.as_deref(),
        &settings.runner.output_dir,
        format,
        Utc::now(),
    );
    siteintel_scraper::export_records(&records, format, &output_path)
        .with_context(|| format!("failed to export records to {}", output_path.display()))?;

    Ok(RunSummary {
        record_count: records.len(),
        output_path,
    })
}
