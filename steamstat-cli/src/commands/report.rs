use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use steamstat_client::load_report;
use steamstat_core::scale::MAX_CHART_HEIGHT;
use steamstat_core::util::format_thousands;
use steamstat_core::{AnalyzeTarget, ViewModel, resolve_input};

use crate::error::CliError;
use crate::spinner;

/// Width in characters of a full-height genre bar.
const BAR_WIDTH: f64 = 40.0;

/// Run the report command.
pub(crate) fn run_report(
    target: &str,
    json: bool,
    api_url: Option<String>,
    quiet: bool,
) -> Result<(), CliError> {
    let steam_id = match resolve_input(target)? {
        AnalyzeTarget::SteamId(id) => id,
        AnalyzeTarget::Vanity(name) => {
            return Err(CliError::unsupported(format!(
                "Vanity URL '/id/{}' needs resolving to a Steam ID first; use the /profiles/<steamid> link instead",
                name
            )));
        }
    };

    let client = super::connect(api_url)?;

    let pb = spinner::loading("Loading your gaming shame...", quiet || json);
    let result = super::block_on(load_report(&client, &steam_id))?;
    pb.finish_and_clear();

    let vm = result?.view_model();

    if json {
        println!("{}", serde_json::to_string_pretty(&vm)?);
    } else {
        print_report(&vm);
    }

    Ok(())
}

fn print_report(vm: &ViewModel) {
    print_header(vm);
    crate::log_blank();
    print_genres(vm);
    crate::log_blank();
    print_activity(vm);
    crate::log_blank();
    print_top_games(vm);
}

fn print_header(vm: &ViewModel) {
    let profile = &vm.profile;

    log::info!(
        "{}  {}",
        profile.persona_name.if_supports_color(Stdout, |t| t.bold()),
        format!("Level {} in Addiction", vm.addiction_level)
            .if_supports_color(Stdout, |t| t.yellow()),
    );
    log::info!(
        "  {}",
        profile.profile_url.if_supports_color(Stdout, |t| t.dimmed())
    );
    if let Some(since) = profile.time_created.and_then(format_date) {
        log::info!("  Member since {}", since);
    }
    crate::log_blank();

    log::info!(
        "  Gamer Status:  {}",
        vm.gamer_status.if_supports_color(Stdout, |t| t.magenta()),
    );
    log::info!(
        "  Current Vibe:  {}",
        vm.current_vibe.if_supports_color(Stdout, |t| t.green()),
    );
    log::info!("  Total Games:   {}", vm.total_games);
    log::info!(
        "  Total Hours Wasted: {}",
        format_thousands(vm.total_hours).if_supports_color(Stdout, |t| t.red()),
    );
    log::info!(
        "  {}",
        format!(
            "That's {} days of daylight you'll never see again!",
            format_thousands(vm.days_lost)
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );
}

fn print_genres(vm: &ViewModel) {
    log::info!("{}", "Genre Breakdown".if_supports_color(Stdout, |t| t.bold()));

    if vm.genres.is_empty() {
        log::info!("  No games to categorize");
        return;
    }

    let name_width = vm
        .genres
        .iter()
        .map(|g| g.genre_name.len())
        .max()
        .unwrap_or(0);

    for genre in &vm.genres {
        let width = (genre.bar_height / MAX_CHART_HEIGHT * BAR_WIDTH).round() as usize;
        log::info!(
            "  {:<name_width$}  {:<bar_width$}  {} hours  {}",
            genre.genre_name,
            "\u{2588}".repeat(width),
            format_thousands(genre.total_hours),
            genre.flavor_label.if_supports_color(Stdout, |t| t.dimmed()),
            name_width = name_width,
            bar_width = BAR_WIDTH as usize,
        );
    }

    log::info!(
        "  Total Regret Level: {}   Top Genre: {}",
        vm.regret_level.if_supports_color(Stdout, |t| t.red()),
        vm.top_genre.if_supports_color(Stdout, |t| t.cyan()),
    );
}

fn print_activity(vm: &ViewModel) {
    log::info!("{}", "Lately".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {:.1} hours/day  {}",
        vm.average_daily_hours,
        vm.grind_remark.if_supports_color(Stdout, |t| t.dimmed()),
    );

    match &vm.achievements {
        Some(a) => {
            log::info!(
                "  Achievements: {}/{} in {}",
                a.unlocked,
                a.total,
                a.game_name.if_supports_color(Stdout, |t| t.cyan()),
            );
            log::info!("  {}", vm.achievement_caption);
        }
        None => log::info!("  Achievements: {}", vm.achievement_caption),
    }
}

fn print_top_games(vm: &ViewModel) {
    log::info!("{}", "Hall of Shame".if_supports_color(Stdout, |t| t.bold()));

    if vm.top_games.is_empty() {
        log::info!("  Nothing played yet");
        return;
    }

    for game in &vm.top_games {
        log::info!(
            "  #{} {}  {}",
            game.rank,
            game.game.name.if_supports_color(Stdout, |t| t.bold()),
            format!(
                "{} hours of {}",
                format_thousands(game.hours),
                game.tagline()
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

fn format_date(unix_secs: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(unix_secs, 0).map(|dt| dt.format("%B %-d, %Y").to_string())
}
