use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}: {body_preview}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body_preview: String,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("failed to read offline samples {path}: {source}")]
    SamplesIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse offline samples {path}: {source}")]
    SamplesParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write export {path}: {source}")]
    ExportIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON export error: {0}")]
    ExportJson(#[source] serde_json::Error),

    #[error("CSV export error: {0}")]
    ExportCsv(#[from] csv::Error),
}
