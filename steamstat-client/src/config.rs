use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ClientError;

/// Backend address used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_API_URL: &str = "STEAMSTAT_API_URL";
const ENV_TIMEOUT_SECS: &str = "STEAMSTAT_TIMEOUT_SECS";

/// Where the steamstat backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed on the command line.
    Flag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Hard-coded default value.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug)]
pub struct ConfigSources {
    pub base_url: ConfigSource,
    pub timeout: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub(crate) struct ConfigFile {
    pub(crate) api: Option<ApiSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub(crate) struct ApiSection {
    pub(crate) base_url: Option<String>,
    pub(crate) timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Resolve the API config.
    ///
    /// Priority: `flag_url` > env vars > config file > defaults.
    pub fn load(flag_url: Option<String>) -> Result<Self, ClientError> {
        let file = config_path().and_then(|p| read_config_file(&p));
        Self::resolve(flag_url, |var| std::env::var(var).ok(), file.as_ref())
    }

    pub(crate) fn resolve(
        flag_url: Option<String>,
        env: impl Fn(&str) -> Option<String>,
        file: Option<&ApiSection>,
    ) -> Result<Self, ClientError> {
        let base_url = flag_url
            .or_else(|| env(ENV_API_URL))
            .or_else(|| file.and_then(|f| f.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_base_url(&base_url)?;

        let timeout_secs = match env(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    ClientError::config(format!(
                        "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                Some(secs)
            }
            None => file.and_then(|f| f.timeout_secs),
        };

        Ok(Self {
            base_url,
            timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    /// Full URL for an API path, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn validate_base_url(url: &str) -> Result<(), ClientError> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| ClientError::config(format!("Invalid API URL '{url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ClientError::config(format!(
            "Invalid API URL '{url}': unsupported scheme '{other}'"
        ))),
    }
}

/// Return the path to the config file: `~/.config/steamstat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("steamstat").join("config.toml"))
}

/// Save the API config to the default config file.
///
/// Returns the path the file was written to.
pub fn save_to_file(config: &ApiConfig) -> Result<PathBuf, ClientError> {
    let path = config_path()
        .ok_or_else(|| ClientError::config("Could not determine config directory"))?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Write the `[api]` table to `path`, creating parent directories as needed.
///
/// Fields equal to their defaults are left out of the file.
pub fn save_to_path(config: &ApiConfig, path: &Path) -> Result<(), ClientError> {
    validate_base_url(&config.base_url)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = ConfigFile {
        api: Some(ApiSection {
            base_url: Some(config.base_url.clone()),
            timeout_secs: (config.timeout != DEFAULT_TIMEOUT).then(|| config.timeout.as_secs()),
        }),
    };

    let toml_str = toml::to_string_pretty(&file)
        .map_err(|e| ClientError::config(format!("Failed to serialize config: {}", e)))?;

    // Write atomically
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, toml_str)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Point the config file at a new backend, keeping any saved timeout.
pub fn save_base_url(url: &str) -> Result<PathBuf, ClientError> {
    let path = config_path()
        .ok_or_else(|| ClientError::config("Could not determine config directory"))?;
    let timeout = read_config_file(&path)
        .and_then(|f| f.timeout_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);
    let config = ApiConfig {
        base_url: url.to_string(),
        timeout,
    };
    save_to_path(&config, &path)?;
    Ok(path)
}

/// Determine where each config field is coming from.
pub fn config_sources(flag_url: bool) -> ConfigSources {
    let file = config_path().and_then(|p| read_config_file(&p));
    sources_from(flag_url, |var| std::env::var(var).is_ok(), file.as_ref())
}

pub(crate) fn sources_from(
    flag_url: bool,
    env_set: impl Fn(&str) -> bool,
    file: Option<&ApiSection>,
) -> ConfigSources {
    let base_url = if flag_url {
        ConfigSource::Flag
    } else if env_set(ENV_API_URL) {
        ConfigSource::EnvVar(ENV_API_URL)
    } else if file.and_then(|f| f.base_url.as_ref()).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    let timeout = if env_set(ENV_TIMEOUT_SECS) {
        ConfigSource::EnvVar(ENV_TIMEOUT_SECS)
    } else if file.and_then(|f| f.timeout_secs).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    ConfigSources { base_url, timeout }
}

/// Read the `[api]` table; a missing or malformed file counts as absent.
pub(crate) fn read_config_file(path: &Path) -> Option<ApiSection> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<ConfigFile>(&content) {
        Ok(config) => config.api,
        Err(e) => {
            log::warn!("Ignoring malformed config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
