pub mod config;
pub mod domain;
pub mod error;
pub mod inputs;
pub mod settings;

pub use config::{load_settings, load_settings_from_env, try_load_settings};
pub use domain::clean_domain;
pub use error::{ConfigError, DomainError};
pub use inputs::{load_domains_from_file, parse_domain_lines};
pub use settings::{OutputFormat, RunnerSettings, Settings, SimilarwebSettings};
