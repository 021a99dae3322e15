pub mod client;
pub mod error;
pub mod export;
pub mod offline;
pub mod pipeline;
pub(crate) mod probe;
pub mod record;
pub mod sections;
pub mod types;

pub use client::{ProfileSource, SimilarwebClient};
pub use error::ScraperError;
pub use export::{default_output_path, export_records, write_csv, write_json};
pub use offline::{index_samples, load_offline_samples, try_load_offline_samples, OfflineSamples};
pub use pipeline::{process_domains, process_domains_with};
pub use probe::normalize_percentage;
pub use record::{assemble_record, assemble_record_at, default_search_url, Record};
pub use types::{
    CountryTraffic, DemographicsSection, Engagement, GenderDistribution, Keyword, KeywordSection,
    RawProfile, ShareEntry, TrafficSection,
};
