use serde::{Deserialize, Serialize};

/// One owned title from a profile's library.
///
/// Playtimes are in minutes, as the backing API reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub app_id: u64,
    pub name: String,
    pub total_playtime_minutes: u64,
    /// Minutes played in the last two weeks (0 when not reported)
    #[serde(default)]
    pub recent_playtime_minutes: u64,
    #[serde(default)]
    pub img_icon_url: Option<String>,
    #[serde(default)]
    pub img_logo_url: Option<String>,
}

impl GameRecord {
    pub fn new(app_id: u64, name: impl Into<String>, total_playtime_minutes: u64) -> Self {
        Self {
            app_id,
            name: name.into(),
            total_playtime_minutes,
            ..Self::default()
        }
    }

    pub fn with_recent_playtime(mut self, minutes: u64) -> Self {
        self.recent_playtime_minutes = minutes;
        self
    }

    /// Lifetime playtime in whole hours (floored).
    pub fn hours(&self) -> u64 {
        self.total_playtime_minutes / 60
    }

    /// Store header artwork for this title.
    pub fn header_image_url(&self) -> String {
        format!(
            "https://cdn.cloudflare.steamstatic.com/steam/apps/{}/header.jpg",
            self.app_id
        )
    }
}

/// Public profile details shown at the top of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub steam_id: String,
    pub persona_name: String,
    pub avatar_url: String,
    pub profile_url: String,
    /// Account creation time (Unix seconds)
    #[serde(default)]
    pub time_created: Option<i64>,
    /// Last log-off time (Unix seconds)
    #[serde(default)]
    pub last_logoff: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub api_name: String,
    pub achieved: bool,
    pub unlock_timestamp: i64,
}

/// Achievements for a single game, present only when the fetch succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementSet {
    pub game_name: String,
    pub entries: Vec<AchievementEntry>,
}

impl AchievementSet {
    pub fn unlocked(&self) -> usize {
        self.entries.iter().filter(|e| e.achieved).count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }
}
