use std::path::{Path, PathBuf};

use crate::settings::Settings;
use crate::ConfigError;

/// Load run settings from a JSON file, then apply `SITEINTEL_*` env overrides.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// Never fails: a missing file is logged at `warn`, an unreadable or malformed
/// file at `error`, and in both cases the defaults are used. An invalid env
/// override is logged and the file settings are kept as-is.
pub fn load_settings(path: &Path) -> Settings {
    dotenvy::dotenv().ok();
    load_settings_from_env(path)
}

/// Like [`load_settings`] but does NOT load `.env` files. Useful for testing
/// or when the caller manages env setup.
pub fn load_settings_from_env(path: &Path) -> Settings {
    let settings = if path.exists() {
        try_load_settings(path).unwrap_or_else(|e| {
            tracing::error!(error = %e, "settings file unusable; using defaults");
            Settings::default()
        })
    } else {
        tracing::warn!(path = %path.display(), "settings file not found; using defaults");
        Settings::default()
    };

    match apply_env_overrides(settings.clone(), |key| std::env::var(key)) {
        Ok(overridden) => overridden,
        Err(e) => {
            tracing::error!(error = %e, "ignoring env overrides");
            settings
        }
    }
}

/// Read and parse a settings file without any fallback.
///
/// # Errors
///
/// Returns [`ConfigError::SettingsIo`] if the file cannot be read and
/// [`ConfigError::SettingsParse`] if it is not a valid settings object.
pub fn try_load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SettingsIo {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::SettingsParse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Apply env-var overrides using the provided lookup function.
///
/// Decoupled from the actual environment so it can be tested with a pure
/// `HashMap` lookup. All values are validated before any field is changed.
fn apply_env_overrides<F>(mut settings: Settings, lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let timeout_seconds = non_empty("SITEINTEL_TIMEOUT_SECONDS")
        .map(|raw| {
            raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: "SITEINTEL_TIMEOUT_SECONDS".to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()?;

    if let Some(base_url) = non_empty("SITEINTEL_BASE_URL") {
        settings.similarweb.base_url = base_url;
    }
    if let Some(api_key) = non_empty("SITEINTEL_API_KEY") {
        settings.similarweb.api_key = Some(api_key);
    }
    if let Some(output_dir) = non_empty("SITEINTEL_OUTPUT_DIR") {
        settings.runner.output_dir = PathBuf::from(output_dir);
    }
    if let Some(log_level) = non_empty("SITEINTEL_LOG_LEVEL") {
        settings.runner.log_level = log_level;
    }
    if let Some(timeout_seconds) = timeout_seconds {
        settings.runner.timeout_seconds = timeout_seconds;
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
