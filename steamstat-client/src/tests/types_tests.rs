use super::*;

#[test]
fn profile_optional_timestamps() {
    let json = r#"{
        "steamid": "76561197960287930",
        "personaname": "Rabscuttle",
        "avatarfull": "https://avatars.example/full.jpg",
        "profileurl": "https://steamcommunity.com/id/rabscuttle/",
        "timecreated": 1063407589
    }"#;
    let profile: ProfileSummary = serde_json::from_str::<ProfileResponse>(json).unwrap().into();
    assert_eq!(profile.persona_name, "Rabscuttle");
    assert_eq!(profile.time_created, Some(1063407589));
    assert_eq!(profile.last_logoff, None);
}

#[test]
fn library_games_convert_to_records() {
    let json = r#"{"games": [
        {"appid": 570, "name": "Dota 2", "playtime_forever": 600000,
         "img_icon_url": "0bbb630d63262dd66d2fdd0f7d37e8661a410075", "img_logo_url": ""},
        {"appid": 730, "name": "Counter-Strike 2", "playtime_forever": 120, "playtime_2weeks": 45,
         "img_icon_url": "", "img_logo_url": ""}
    ]}"#;
    let records = serde_json::from_str::<GamesResponse>(json)
        .unwrap()
        .into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].app_id, 570);
    assert_eq!(records[0].recent_playtime_minutes, 0);
    assert!(records[0].img_icon_url.is_some());
    assert!(records[0].img_logo_url.is_none());
    assert_eq!(records[1].recent_playtime_minutes, 45);
}

#[test]
fn missing_games_array_is_empty() {
    let response: GamesResponse = serde_json::from_str("{}").unwrap();
    assert!(response.games.is_empty());
}

#[test]
fn achievements_flag_maps_to_bool() {
    let json = r#"{"playerstats": {
        "steamID": "76561197960287930",
        "gameName": "Dota 2",
        "achievements": [
            {"apiname": "A", "achieved": 1, "unlocktime": 1700000000},
            {"apiname": "B", "achieved": 0, "unlocktime": 0}
        ],
        "success": true
    }}"#;
    let response: AchievementsResponse = serde_json::from_str(json).unwrap();
    assert!(response.playerstats.has_stats());
    let set: AchievementSet = response.playerstats.into();
    assert_eq!(set.game_name, "Dota 2");
    assert_eq!(set.unlocked(), 1);
    assert_eq!(set.total(), 2);
    assert_eq!(set.entries[0].unlock_timestamp, 1700000000);
}

#[test]
fn achievements_absent_for_game_without_any() {
    let json = r#"{"playerstats": {"steamID": "1", "gameName": "Tetris", "success": true}}"#;
    let response: AchievementsResponse = serde_json::from_str(json).unwrap();
    assert!(response.playerstats.achievements.is_empty());
}

#[test]
fn missing_success_flag_falls_back_to_achievement_list() {
    let with_list = r#"{"playerstats": {"gameName": "Dota 2", "achievements": [
        {"apiname": "A", "achieved": 1, "unlocktime": 1}
    ]}}"#;
    let response: AchievementsResponse = serde_json::from_str(with_list).unwrap();
    assert!(response.playerstats.has_stats());

    let bare = r#"{"playerstats": {"gameName": "Dota 2"}}"#;
    let response: AchievementsResponse = serde_json::from_str(bare).unwrap();
    assert!(!response.playerstats.has_stats());

    let refused = r#"{"playerstats": {"success": false, "achievements": [
        {"apiname": "A", "achieved": 1, "unlocktime": 1}
    ]}}"#;
    let response: AchievementsResponse = serde_json::from_str(refused).unwrap();
    assert!(!response.playerstats.has_stats());
}

#[test]
fn store_price_is_optional() {
    let json = r#"{"appid": 570, "name": "Dota 2", "header_image": "h.jpg",
                   "short_description": "Every day, millions of players..."}"#;
    let game: StoreGame = serde_json::from_str(json).unwrap();
    assert!(game.price_overview.is_none());
}
