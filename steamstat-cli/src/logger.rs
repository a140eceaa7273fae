//! Terminal logging setup.
//!
//! All user-facing output goes through the `log` macros so `--quiet`,
//! `--verbose` and `--logfile` apply uniformly. Normal mode prints bare
//! messages; verbose mode adds timestamps and levels. With `--json`, log
//! lines go to stderr so stdout carries only the document.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use log::LevelFilter;

use crate::error::CliError;

pub(crate) fn init(
    quiet: bool,
    verbose: bool,
    json: bool,
    logfile: Option<&Path>,
) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(Arc::new(Mutex::new(File::create(path)?))),
        None => None,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .target(if json {
            env_logger::Target::Stderr
        } else {
            env_logger::Target::Stdout
        })
        .filter_level(LevelFilter::Warn)
        .filter_module("steamstat", level)
        .parse_env("STEAMSTAT_LOG")
        .format(move |buf, record| {
            let line = if verbose {
                format!(
                    "{} {:<5} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            } else {
                record.args().to_string()
            };

            if let Some(file) = &file {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
                }
            }

            writeln!(buf, "{}", line)
        });

    builder
        .try_init()
        .map_err(|e| CliError::runtime(format!("Failed to initialize logging: {}", e)))
}
