use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ClientError, Resource};
use crate::types::{AchievementsResponse, GamesResponse, ProfileResponse, StoreGame};

/// HTTP client for the steamstat backend.
///
/// Every call is a single GET with no retries. Steam IDs are passed through
/// as-is; validate them first (see [`crate::load_report`]).
pub struct SteamStatClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SteamStatClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the public profile. `Ok(None)` when the API answers `null`.
    pub async fn profile(&self, steam_id: &str) -> Result<Option<ProfileResponse>, ClientError> {
        self.get_json(Resource::Profile, &[("steamid", steam_id.to_string())])
            .await
    }

    pub async fn library(&self, steam_id: &str) -> Result<GamesResponse, ClientError> {
        self.get_games(Resource::Library, steam_id).await
    }

    /// Games played in the last two weeks, most recent first.
    pub async fn recent(&self, steam_id: &str) -> Result<GamesResponse, ClientError> {
        self.get_games(Resource::Recent, steam_id).await
    }

    pub async fn achievements(
        &self,
        steam_id: &str,
        app_id: u64,
    ) -> Result<AchievementsResponse, ClientError> {
        self.get_json(
            Resource::Achievements,
            &[
                ("steamid", steam_id.to_string()),
                ("appid", app_id.to_string()),
            ],
        )
        .await
    }

    pub async fn store(&self, app_id: u64) -> Result<StoreGame, ClientError> {
        self.get_json(Resource::Store, &[("appid", app_id.to_string())])
            .await
    }

    async fn get_games(
        &self,
        resource: Resource,
        steam_id: &str,
    ) -> Result<GamesResponse, ClientError> {
        // `null` bodies are treated like an empty library
        let games: Option<GamesResponse> = self
            .get_json(resource, &[("steamid", steam_id.to_string())])
            .await?;
        Ok(games.unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.config.endpoint(resource.path());
        log::debug!("GET {} {:?}", url, params);

        let resp = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| ClientError::fetch_failed(resource, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::fetch_failed(resource, format!("HTTP {}", status)));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ClientError::fetch_failed(resource, e.to_string()))?;

        serde_json::from_str(&text).map_err(|source| {
            log::debug!(
                "Unparseable {} response: {}",
                resource,
                text.chars().take(200).collect::<String>()
            );
            ClientError::Parse { resource, source }
        })
    }
}
