pub(crate) mod config;
pub(crate) mod parse;
pub(crate) mod report;
pub(crate) mod store;

use steamstat_client::{ApiConfig, SteamStatClient};

use crate::error::CliError;

/// Build a client from the resolved API config.
pub(crate) fn connect(api_url: Option<String>) -> Result<SteamStatClient, CliError> {
    let config = ApiConfig::load(api_url)?;
    log::debug!(
        "Using API at {} (timeout {}s)",
        config.base_url,
        config.timeout.as_secs()
    );
    Ok(SteamStatClient::new(config)?)
}

/// Run a future to completion on a fresh runtime.
pub(crate) fn block_on<F: std::future::Future>(fut: F) -> Result<F::Output, CliError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    Ok(rt.block_on(fut))
}
