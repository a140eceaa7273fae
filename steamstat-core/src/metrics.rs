//! Headline numbers and the joke labels derived from them.

use serde::{Deserialize, Serialize};

use crate::model::{AchievementSet, GameRecord};

/// Number of games in the ranked list.
pub const TOP_GAMES: usize = 5;

/// Length of the "recent playtime" window the API reports, in days.
const RECENT_WINDOW_DAYS: f64 = 14.0;

/// Gamer status ladder, checked top to bottom. Thresholds are exclusive.
const STATUS_LADDER: &[(u64, &str)] = &[
    (10_000, "Legendary No-Lifer"),
    (5_000, "Professional Couch Potato"),
    (2_000, "Hardcore Grinder"),
    (1_000, "Dedicated Gamer"),
    (500, "Casual Enthusiast"),
    (100, "Weekend Warrior"),
];
const STATUS_FLOOR: &str = "Gaming Newbie";

pub const VIBE_ON_BREAK: &str = "Taking a Break (Yeah Right)";
const VIBE_FLOOR: &str = "Just Browsing";

/// One rung of the vibe ladder: above `min_hours` of recent play, the first
/// keyword rule matching the game name wins, else `default`.
struct VibeTier {
    min_hours: f64,
    rules: &'static [(&'static [&'static str], &'static str)],
    default: &'static str,
}

const VIBE_TIERS: &[VibeTier] = &[
    VibeTier {
        min_hours: 40.0,
        rules: &[
            (
                &["counter-strike", "valorant", "apex"],
                "Grinding Ranked (Send Help)",
            ),
            (&["elden ring", "dark souls"], "Suffering Through Pain"),
        ],
        default: "Full Addiction Mode",
    },
    VibeTier {
        min_hours: 20.0,
        rules: &[(&["stardew", "farm"], "Living the Farm Life")],
        default: "Deep in the Zone",
    },
    VibeTier {
        min_hours: 10.0,
        rules: &[],
        default: "Casual Gaming Session",
    },
];

/// A library entry with its position in the playtime ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedGame {
    #[serde(flatten)]
    pub game: GameRecord,
    pub rank: usize,
    pub hours: u64,
    pub header_image_url: String,
}

impl RankedGame {
    pub fn tagline(&self) -> &'static str {
        if self.rank == 1 {
            "pure dedication"
        } else {
            "obsession"
        }
    }
}

/// Lifetime hours across the whole library, floored.
pub fn total_hours(library: &[GameRecord]) -> u64 {
    library
        .iter()
        .map(|g| g.total_playtime_minutes)
        .fold(0u64, u64::saturating_add)
        / 60
}

/// Average hours per day over the two-week recent window, to one decimal.
pub fn average_daily_hours(recent: &[GameRecord]) -> f64 {
    if recent.is_empty() {
        return 0.0;
    }
    let minutes = recent
        .iter()
        .map(|g| g.recent_playtime_minutes)
        .fold(0u64, u64::saturating_add);
    round_to_tenth(minutes as f64 / 60.0 / RECENT_WINDOW_DAYS)
}

/// Library sorted by lifetime playtime, most played first. The sort is
/// stable, so ties keep library order.
pub fn sorted_by_playtime(library: &[GameRecord]) -> Vec<&GameRecord> {
    let mut sorted: Vec<&GameRecord> = library.iter().collect();
    sorted.sort_by(|a, b| b.total_playtime_minutes.cmp(&a.total_playtime_minutes));
    sorted
}

/// The single most played game, used to pick which achievements to fetch.
pub fn most_played(library: &[GameRecord]) -> Option<&GameRecord> {
    sorted_by_playtime(library).into_iter().next()
}

/// The `n` most played games, ranked from 1.
pub fn top_games(library: &[GameRecord], n: usize) -> Vec<RankedGame> {
    sorted_by_playtime(library)
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, game)| RankedGame {
            game: game.clone(),
            rank: i + 1,
            hours: game.hours(),
            header_image_url: game.header_image_url(),
        })
        .collect()
}

pub fn gamer_status(total_hours: u64) -> &'static str {
    STATUS_LADDER
        .iter()
        .find(|(threshold, _)| total_hours > *threshold)
        .map(|(_, label)| *label)
        .unwrap_or(STATUS_FLOOR)
}

/// Label for what the player is up to lately.
///
/// Only the first entry is looked at; callers pass recent activity most
/// recent first, as the API returns it.
pub fn current_vibe(recent: &[GameRecord]) -> &'static str {
    let Some(latest) = recent.first() else {
        return VIBE_ON_BREAK;
    };

    let recent_hours = latest.recent_playtime_minutes as f64 / 60.0;
    let name = latest.name.to_lowercase();

    for tier in VIBE_TIERS {
        if recent_hours > tier.min_hours {
            return tier
                .rules
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
                .map(|(_, label)| *label)
                .unwrap_or(tier.default);
        }
    }

    VIBE_FLOOR
}

/// Share of achievements unlocked, in `[0, 1]`. Zero when there is no
/// achievement data or the game has no achievements.
pub fn achievement_completion_ratio(set: Option<&AchievementSet>) -> f64 {
    match set {
        Some(set) if set.total() > 0 => set.unlocked() as f64 / set.total() as f64,
        _ => 0.0,
    }
}

/// Completion as a whole-number percentage.
pub fn completion_percent(ratio: f64) -> u32 {
    (ratio * 100.0).round() as u32
}

pub fn achievement_caption(set: Option<&AchievementSet>) -> String {
    match set {
        Some(set) => format!(
            "{}% completion - Not a quitter yet!",
            completion_percent(achievement_completion_ratio(Some(set)))
        ),
        None => "No game data".to_string(),
    }
}

pub fn regret_level(total_hours: u64) -> &'static str {
    if total_hours > 5000 { "Maximum" } else { "High" }
}

pub fn grind_remark(average_daily_hours: f64) -> &'static str {
    if average_daily_hours > 5.0 {
        "Grinding extremely hard!"
    } else {
        "Grinding hard lately!"
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "tests/metrics_tests.rs"]
mod tests;
