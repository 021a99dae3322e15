use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://data.similarweb.com";
pub const DEFAULT_USER_AGENT: &str = "SimilarwebScraper/1.0 (+https://bitbash.dev)";
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    /// File extension used for exported files in this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// The `similarweb` block of the settings file.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimilarwebSettings {
    pub base_url: String,
    /// An empty string in the file is treated as "no key".
    #[serde(deserialize_with = "empty_string_as_none")]
    pub api_key: Option<String>,
    pub user_agent: String,
}

impl Default for SimilarwebSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl std::fmt::Debug for SimilarwebSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarwebSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// The `runner` block of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    pub output_format: OutputFormat,
    pub output_dir: PathBuf,
    /// Accepts `30` or `"30"`.
    #[serde(deserialize_with = "u64_or_numeric_string")]
    pub timeout_seconds: u64,
    pub log_level: String,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Run settings. Every key is optional; absent keys take the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub similarweb: SimilarwebSettings,
    pub runner: RunnerSettings,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

fn u64_or_numeric_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
