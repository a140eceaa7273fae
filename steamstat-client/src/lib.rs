//! HTTP client for the steamstat backend API.

pub mod client;
pub mod config;
pub mod error;
pub mod load;
pub mod types;

pub use client::SteamStatClient;
pub use config::{
    ApiConfig, ConfigSource, ConfigSources, DEFAULT_API_URL, config_path, config_sources,
    save_base_url, save_to_file,
};
pub use error::{ClientError, Resource};
pub use load::{ReportData, load_report};
pub use types::{PriceOverview, StoreGame};
