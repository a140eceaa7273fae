use serde::{Deserialize, Serialize};

use steamstat_core::{AchievementEntry, AchievementSet, GameRecord, ProfileSummary};

/// Response from `user/profile`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileResponse {
    pub steamid: String,
    #[serde(default)]
    pub personaname: String,
    #[serde(default)]
    pub avatarfull: String,
    #[serde(default)]
    pub profileurl: String,
    #[serde(default)]
    pub timecreated: Option<i64>,
    #[serde(default)]
    pub lastlogoff: Option<i64>,
}

impl From<ProfileResponse> for ProfileSummary {
    fn from(p: ProfileResponse) -> Self {
        Self {
            steam_id: p.steamid,
            persona_name: p.personaname,
            avatar_url: p.avatarfull,
            profile_url: p.profileurl,
            time_created: p.timecreated,
            last_logoff: p.lastlogoff,
        }
    }
}

/// Response from `user/library` and `user/recent`.
///
/// A missing `games` array means no games, not an error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GamesResponse {
    #[serde(default)]
    pub games: Vec<GameEntry>,
}

impl GamesResponse {
    pub fn into_records(self) -> Vec<GameRecord> {
        self.games.into_iter().map(GameRecord::from).collect()
    }
}

/// One game as the API reports it. Playtimes are in minutes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameEntry {
    pub appid: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub playtime_forever: u64,
    #[serde(default)]
    pub playtime_2weeks: Option<u64>,
    #[serde(default)]
    pub img_icon_url: Option<String>,
    #[serde(default)]
    pub img_logo_url: Option<String>,
}

impl From<GameEntry> for GameRecord {
    fn from(g: GameEntry) -> Self {
        Self {
            app_id: g.appid,
            name: g.name,
            total_playtime_minutes: g.playtime_forever,
            recent_playtime_minutes: g.playtime_2weeks.unwrap_or(0),
            img_icon_url: g.img_icon_url.filter(|s| !s.is_empty()),
            img_logo_url: g.img_logo_url.filter(|s| !s.is_empty()),
        }
    }
}

/// Response from `user/achievements`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AchievementsResponse {
    pub playerstats: PlayerStats,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerStats {
    #[serde(rename = "steamID", default)]
    pub steam_id: String,
    #[serde(rename = "gameName", default)]
    pub game_name: String,
    /// Absent for games without achievements
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,
    #[serde(default)]
    pub success: Option<bool>,
}

impl PlayerStats {
    /// Whether the backend returned usable stats. Without a `success`
    /// flag, a non-empty achievement list counts.
    pub fn has_stats(&self) -> bool {
        self.success.unwrap_or(!self.achievements.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerAchievement {
    pub apiname: String,
    /// 1 if unlocked, 0 otherwise
    pub achieved: u8,
    #[serde(default)]
    pub unlocktime: i64,
}

impl From<PlayerStats> for AchievementSet {
    fn from(stats: PlayerStats) -> Self {
        Self {
            game_name: stats.game_name,
            entries: stats
                .achievements
                .into_iter()
                .map(|a| AchievementEntry {
                    api_name: a.apiname,
                    achieved: a.achieved == 1,
                    unlock_timestamp: a.unlocktime,
                })
                .collect(),
        }
    }
}

/// Response from `store`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreGame {
    pub appid: u64,
    pub name: String,
    #[serde(default)]
    pub header_image: String,
    #[serde(default)]
    pub price_overview: Option<PriceOverview>,
    #[serde(default)]
    pub short_description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PriceOverview {
    pub final_formatted: String,
    #[serde(default)]
    pub discount_percent: u32,
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
