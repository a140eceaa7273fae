use serde::{Deserialize, Serialize};

use crate::genre::{GenreAggregate, aggregate_genres, max_genre_hours};
use crate::metrics::{
    self, RankedGame, TOP_GAMES, achievement_caption, achievement_completion_ratio,
    completion_percent,
};
use crate::model::{AchievementSet, GameRecord, ProfileSummary};

/// Achievement progress for the most played game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementSummary {
    pub game_name: String,
    pub unlocked: usize,
    pub total: usize,
    pub completion_percent: u32,
}

/// Everything the report shows, derived from one successful load.
///
/// Built fresh each time from the raw inputs; nothing is updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub profile: ProfileSummary,
    pub total_games: usize,
    pub total_hours: u64,
    pub average_daily_hours: f64,
    pub gamer_status: String,
    pub current_vibe: String,
    pub genres: Vec<GenreAggregate>,
    /// Largest genre total, at least 1
    pub max_genre_hours: u64,
    pub top_genre: String,
    pub top_games: Vec<RankedGame>,
    /// In `[0, 1]`; 0 without achievement data
    pub achievement_completion: f64,
    pub achievements: Option<AchievementSummary>,
    pub achievement_caption: String,
    pub addiction_level: u64,
    pub days_lost: u64,
    pub regret_level: String,
    pub grind_remark: String,
}

impl ViewModel {
    /// Derive the full report.
    ///
    /// `recent` must be ordered most recent first; only its first entry
    /// drives the vibe label.
    pub fn build(
        profile: ProfileSummary,
        library: &[GameRecord],
        recent: &[GameRecord],
        achievements: Option<&AchievementSet>,
    ) -> Self {
        let genres = aggregate_genres(library);
        let max_genre_hours = max_genre_hours(&genres);
        let top_genre = genres
            .first()
            .map(|g| g.genre_name.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        let total_hours = metrics::total_hours(library);
        let average_daily_hours = metrics::average_daily_hours(recent);
        let achievement_completion = achievement_completion_ratio(achievements);

        Self {
            profile,
            total_games: library.len(),
            total_hours,
            average_daily_hours,
            gamer_status: metrics::gamer_status(total_hours).to_string(),
            current_vibe: metrics::current_vibe(recent).to_string(),
            genres,
            max_genre_hours,
            top_genre,
            top_games: metrics::top_games(library, TOP_GAMES),
            achievement_completion,
            achievements: achievements.map(|set| AchievementSummary {
                game_name: set.game_name.clone(),
                unlocked: set.unlocked(),
                total: set.total(),
                completion_percent: completion_percent(achievement_completion),
            }),
            achievement_caption: achievement_caption(achievements),
            addiction_level: total_hours / 100,
            days_lost: total_hours / 24,
            regret_level: metrics::regret_level(total_hours).to_string(),
            grind_remark: metrics::grind_remark(average_daily_hours).to_string(),
        }
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
