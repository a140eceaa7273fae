use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use steamstat_core::{AnalyzeTarget, extract_identifier, resolve_input};

use crate::error::CliError;

/// Show how a profile link or Steam ID would be interpreted.
pub(crate) fn run_parse(input: &str) -> Result<(), CliError> {
    let identifier = extract_identifier(input);
    log::debug!("Extracted {:?} from '{}'", identifier, input);

    let target = resolve_input(input)?;
    let (kind, value) = match &target {
        AnalyzeTarget::SteamId(id) => ("steamid", id),
        AnalyzeTarget::Vanity(name) => ("vanity", name),
    };

    log::info!(
        "{} {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        format!("{}:", kind).if_supports_color(Stdout, |t| t.cyan()),
        value,
    );
    if let AnalyzeTarget::Vanity(_) = target {
        log::info!(
            "  {}",
            "Vanity names must be resolved to a Steam ID before a report can be built"
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}
