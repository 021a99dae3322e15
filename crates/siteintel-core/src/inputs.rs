use std::path::Path;

use crate::{clean_domain, ConfigError};

/// Load the domain list from a plain-text input file.
///
/// # Errors
///
/// Returns [`ConfigError::InputFileMissing`] if `path` does not exist and
/// [`ConfigError::InputFileIo`] if it cannot be read.
pub fn load_domains_from_file(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::InputFileMissing {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::InputFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(parse_domain_lines(content.lines()))
}

/// Turn raw input lines into normalized domains.
///
/// Blank lines and lines starting with `#` are skipped before normalization.
/// Lines that still fail to normalize are logged and dropped. Order and
/// duplicates are preserved.
pub fn parse_domain_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match clean_domain(line) {
            Ok(domain) => Some(domain),
            Err(e) => {
                tracing::warn!(line, error = %e, "skipping unusable input line");
                None
            }
        })
        .collect()
}
