use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("input file not found: {path}")]
    InputFileMissing { path: String },

    #[error("failed to read input file {path}: {source}")]
    InputFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read settings file {path}: {source}")]
    SettingsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings JSON at {path}: {source}")]
    SettingsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid domain: {0:?}")]
    InvalidDomain(String),
}
