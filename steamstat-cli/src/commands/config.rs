use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use steamstat_client::{ApiConfig, ConfigSource};

use crate::error::CliError;

/// Show the resolved API settings and where each one came from.
pub(crate) fn run_config_show(api_url: Option<String>) -> Result<(), CliError> {
    let path = steamstat_client::config_path();
    let sources = steamstat_client::config_sources(api_url.is_some());
    let config = ApiConfig::load(api_url)?;

    log::info!(
        "{}",
        "steamstat Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let fields: [(&str, String, &ConfigSource); 2] = [
        ("base_url", config.base_url.clone(), &sources.base_url),
        (
            "timeout_secs",
            config.timeout.as_secs().to_string(),
            &sources.timeout,
        ),
    ];

    for (name, value, source) in &fields {
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
            format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = steamstat_client::config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}

/// Save a new backend URL to the config file.
pub(crate) fn run_config_set_url(url: String) -> Result<(), CliError> {
    let path = steamstat_client::save_base_url(&url)?;
    log::info!(
        "{} API URL saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
