//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "steamstat")]
#[command(about = "Gaming report cards for Steam profiles", long_about = None)]
pub(crate) struct Cli {
    /// Base URL of the steamstat API (overrides env and config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the report card for a profile
    Report {
        /// Profile URL, report link (/report?steamid=...), or 17-digit Steam ID
        target: String,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show what a profile URL points to, without contacting the API
    Parse {
        /// Profile URL (e.g., https://steamcommunity.com/profiles/7656119...)
        url: String,
    },

    /// Look up a game's store page details
    Store {
        /// Steam app ID
        appid: u64,

        /// Print the raw store details as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage API configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current configuration and where each value comes from
    Show,

    /// Print the config file path
    Path,

    /// Save the API base URL to the config file
    SetUrl {
        /// e.g., https://api.steamstat.example
        url: String,
    },
}
