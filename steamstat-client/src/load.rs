//! Assembling one report from the backend.
//!
//! Profile, library and recent activity are fetched concurrently and must
//! all succeed. Achievements for the most played game are fetched after
//! the library arrives and are optional: any failure there is logged and
//! the report goes ahead without them.

use steamstat_core::metrics::most_played;
use steamstat_core::{AchievementSet, GameRecord, ProfileSummary, ViewModel, validate_steam_id};

use crate::client::SteamStatClient;
use crate::error::ClientError;

/// Raw inputs for one report, already converted to the core model.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub profile: ProfileSummary,
    pub library: Vec<GameRecord>,
    pub recent: Vec<GameRecord>,
    pub achievements: Option<AchievementSet>,
}

impl ReportData {
    pub fn view_model(&self) -> ViewModel {
        ViewModel::build(
            self.profile.clone(),
            &self.library,
            &self.recent,
            self.achievements.as_ref(),
        )
    }
}

/// Load everything needed for a report.
///
/// The Steam ID is validated before any request goes out.
pub async fn load_report(
    client: &SteamStatClient,
    steam_id: &str,
) -> Result<ReportData, ClientError> {
    validate_steam_id(steam_id)?;

    let (profile, library, recent) = tokio::try_join!(
        client.profile(steam_id),
        client.library(steam_id),
        client.recent(steam_id)
    )?;

    let profile: ProfileSummary = profile.ok_or(ClientError::ProfileNotFound)?.into();
    let library = library.into_records();
    let recent = recent.into_records();
    log::debug!(
        "Loaded {} games ({} played recently) for {}",
        library.len(),
        recent.len(),
        steam_id
    );

    let achievements = match most_played(&library) {
        Some(top) => fetch_achievements(client, steam_id, top).await,
        None => None,
    };

    Ok(ReportData {
        profile,
        library,
        recent,
        achievements,
    })
}

async fn fetch_achievements(
    client: &SteamStatClient,
    steam_id: &str,
    game: &GameRecord,
) -> Option<AchievementSet> {
    match client.achievements(steam_id, game.app_id).await {
        Ok(resp) if resp.playerstats.has_stats() => Some(resp.playerstats.into()),
        Ok(_) => {
            log::debug!("No achievement stats for {} ({})", game.name, game.app_id);
            None
        }
        Err(e) => {
            log::warn!("Skipping achievements for {}: {}", game.name, e);
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/load_tests.rs"]
mod tests;
