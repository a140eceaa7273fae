use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::*;
use crate::config::ApiConfig;
use crate::error::Resource;

const STEAM_ID: &str = "76561198000000000";

type Route = (&'static str, u16, String);

/// Minimal HTTP/1.1 stub: answers each request by path prefix and records
/// the request targets it saw.
async fn serve(routes: Vec<Route>) -> (SteamStatClient, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                while read < buf.len() {
                    let n = socket.read(&mut buf[read..]).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let head = String::from_utf8_lossy(&buf[..read]).to_string();
                let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
                log.lock().unwrap().push(target.clone());

                let (status, body) = routes
                    .iter()
                    .find(|(prefix, _, _)| target.starts_with(prefix))
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, "{}".to_string()));
                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    let config = ApiConfig {
        base_url: format!("http://{}", addr),
        ..ApiConfig::default()
    };
    (SteamStatClient::new(config).unwrap(), seen)
}

fn profile_json() -> String {
    format!(
        r#"{{"steamid": "{STEAM_ID}", "personaname": "gaben", "avatarfull": "a.jpg", "profileurl": "https://steamcommunity.com/id/gaben/"}}"#
    )
}

fn library_json() -> String {
    r#"{"games": [
        {"appid": 730, "name": "Counter-Strike 2", "playtime_forever": 1200, "img_icon_url": "", "img_logo_url": ""},
        {"appid": 570, "name": "Dota 2", "playtime_forever": 600000, "img_icon_url": "", "img_logo_url": ""}
    ]}"#
    .to_string()
}

fn recent_json() -> String {
    r#"{"games": [
        {"appid": 570, "name": "Dota 2", "playtime_forever": 600000, "playtime_2weeks": 1500, "img_icon_url": "", "img_logo_url": ""}
    ]}"#
    .to_string()
}

fn achievements_json() -> String {
    format!(
        r#"{{"playerstats": {{"steamID": "{STEAM_ID}", "gameName": "Dota 2", "success": true, "achievements": [
            {{"apiname": "A", "achieved": 1, "unlocktime": 1}},
            {{"apiname": "B", "achieved": 0, "unlocktime": 0}}
        ]}}}}"#
    )
}

fn happy_routes() -> Vec<Route> {
    vec![
        ("/user/profile", 200, profile_json()),
        ("/user/library", 200, library_json()),
        ("/user/recent", 200, recent_json()),
        ("/user/achievements", 200, achievements_json()),
    ]
}

#[tokio::test]
async fn full_load() {
    let (client, seen) = serve(happy_routes()).await;

    let data = load_report(&client, STEAM_ID).await.unwrap();

    assert_eq!(data.profile.persona_name, "gaben");
    assert_eq!(data.library.len(), 2);
    assert_eq!(data.recent[0].recent_playtime_minutes, 1500);
    let achievements = data.achievements.as_ref().unwrap();
    assert_eq!(achievements.unlocked(), 1);

    // Achievements are requested for the most played game
    let seen = seen.lock().unwrap().clone();
    assert!(
        seen.iter()
            .any(|t| t.starts_with("/user/achievements") && t.contains("appid=570")),
        "{:?}",
        seen
    );
    assert!(seen.iter().any(|t| t.contains(&format!("steamid={STEAM_ID}"))));

    let vm = data.view_model();
    assert_eq!(vm.total_hours, 10_020);
    assert_eq!(vm.top_games[0].game.app_id, 570);
    assert_eq!(vm.achievements.unwrap().completion_percent, 50);
}

#[tokio::test]
async fn invalid_id_makes_no_requests() {
    let (client, seen) = serve(happy_routes()).await;

    let err = load_report(&client, "1234").await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Report(steamstat_core::ReportError::InvalidIdentifier(_))
    ));
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn any_core_fetch_failure_fails_the_load() {
    for failing in ["/user/profile", "/user/library", "/user/recent"] {
        let routes: Vec<Route> = happy_routes()
            .into_iter()
            .map(|(prefix, status, body)| {
                if prefix == failing {
                    (prefix, 500, body)
                } else {
                    (prefix, status, body)
                }
            })
            .collect();
        let (client, _) = serve(routes).await;

        let err = load_report(&client, STEAM_ID).await.unwrap_err();
        match &err {
            ClientError::FetchFailed { resource, reason } => {
                assert!(resource.is_required());
                assert_eq!(reason, "HTTP 500 Internal Server Error");
            }
            other => panic!("unexpected error for {}: {:?}", failing, other),
        }
        assert_eq!(
            err.user_message(),
            "Couldn't load that profile. Make sure it's public and the link is valid."
        );
    }
}

#[tokio::test]
async fn achievement_failure_is_not_fatal() {
    let mut routes = happy_routes();
    routes.retain(|(prefix, _, _)| *prefix != "/user/achievements");
    routes.push(("/user/achievements", 403, "{}".to_string()));
    let (client, _) = serve(routes).await;

    let data = load_report(&client, STEAM_ID).await.unwrap();

    assert!(data.achievements.is_none());
    assert_eq!(data.view_model().achievement_caption, "No game data");
}

#[tokio::test]
async fn unsuccessful_player_stats_count_as_absent() {
    let mut routes = happy_routes();
    routes.retain(|(prefix, _, _)| *prefix != "/user/achievements");
    routes.push((
        "/user/achievements",
        200,
        r#"{"playerstats": {"error": "Requested app has no stats", "success": false}}"#.to_string(),
    ));
    let (client, _) = serve(routes).await;

    let data = load_report(&client, STEAM_ID).await.unwrap();
    assert!(data.achievements.is_none());
}

#[tokio::test]
async fn empty_library_skips_achievements() {
    let (client, seen) = serve(vec![
        ("/user/profile", 200, profile_json()),
        ("/user/library", 200, "{}".to_string()),
        ("/user/recent", 200, "{}".to_string()),
    ])
    .await;

    let data = load_report(&client, STEAM_ID).await.unwrap();

    assert!(data.library.is_empty());
    assert!(data.achievements.is_none());
    assert!(
        !seen
            .lock()
            .unwrap()
            .iter()
            .any(|t| t.starts_with("/user/achievements"))
    );
    let vm = data.view_model();
    assert_eq!(vm.current_vibe, "Taking a Break (Yeah Right)");
    assert_eq!(vm.average_daily_hours, 0.0);
}

#[tokio::test]
async fn null_profile_is_not_found() {
    let mut routes = happy_routes();
    routes[0] = ("/user/profile", 200, "null".to_string());
    let (client, _) = serve(routes).await;

    let err = load_report(&client, STEAM_ID).await.unwrap_err();
    assert!(matches!(err, ClientError::ProfileNotFound));
}

#[tokio::test]
async fn garbage_body_is_a_parse_error() {
    let mut routes = happy_routes();
    routes[1] = ("/user/library", 200, "<html>oops</html>".to_string());
    let (client, _) = serve(routes).await;

    let err = load_report(&client, STEAM_ID).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Parse {
            resource: Resource::Library,
            ..
        }
    ));
}

#[tokio::test]
async fn unreachable_backend_is_a_fetch_failure() {
    // Bind then drop to get a port nobody is listening on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = SteamStatClient::new(ApiConfig {
        base_url: format!("http://127.0.0.1:{}", port),
        ..ApiConfig::default()
    })
    .unwrap();

    let err = client.store(570).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::FetchFailed {
            resource: Resource::Store,
            ..
        }
    ));
    assert_eq!(err.to_string().split(':').next(), Some("STORE_FETCH_FAILED"));
}

#[tokio::test]
async fn store_lookup() {
    let (client, seen) = serve(vec![(
        "/store",
        200,
        r#"{"appid": 570, "name": "Dota 2", "header_image": "h.jpg", "short_description": "MOBA",
            "price_overview": {"final_formatted": "Free", "discount_percent": 0}}"#
            .to_string(),
    )])
    .await;

    let game = client.store(570).await.unwrap();
    assert_eq!(game.name, "Dota 2");
    assert_eq!(game.price_overview.unwrap().final_formatted, "Free");
    assert_eq!(seen.lock().unwrap()[0], "/store?appid=570");
}
