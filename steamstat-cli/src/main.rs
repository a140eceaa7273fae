//! steamstat CLI
//!
//! Command-line interface for building gaming report cards from Steam
//! profiles.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    let json = matches!(
        cli.command,
        Commands::Report { json: true, .. } | Commands::Store { json: true, .. }
    );
    if let Err(e) = logger::init(cli.quiet, cli.verbose, json, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Report { target, json } => {
            commands::report::run_report(&target, json, cli.api_url, cli.quiet)
        }
        Commands::Parse { url } => commands::parse::run_parse(&url),
        Commands::Store { appid, json } => {
            commands::store::run_store(appid, json, cli.api_url, cli.quiet)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(cli.api_url),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetUrl { url } => commands::config::run_config_set_url(url),
        },
    };

    if let Err(e) = result {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        if let Some(detail) = e.detail() {
            log::debug!("  caused by: {}", detail);
        }
        std::process::exit(1);
    }
}
