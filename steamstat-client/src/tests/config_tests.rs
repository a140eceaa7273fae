use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

fn file_with(url: Option<&str>, timeout: Option<u64>) -> ApiSection {
    ApiSection {
        base_url: url.map(str::to_string),
        timeout_secs: timeout,
    }
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ApiConfig::resolve(None, no_env, None).unwrap();
    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn flag_beats_env_beats_file() {
    let file = file_with(Some("http://file:1"), Some(5));
    let env = |var: &str| (var == "STEAMSTAT_API_URL").then(|| "http://env:2".to_string());

    let config = ApiConfig::resolve(Some("http://flag:3".to_string()), env, Some(&file)).unwrap();
    assert_eq!(config.base_url, "http://flag:3");

    let config = ApiConfig::resolve(None, env, Some(&file)).unwrap();
    assert_eq!(config.base_url, "http://env:2");
    assert_eq!(config.timeout, Duration::from_secs(5));

    let config = ApiConfig::resolve(None, no_env, Some(&file)).unwrap();
    assert_eq!(config.base_url, "http://file:1");
}

#[test]
fn timeout_from_env() {
    let env = |var: &str| (var == "STEAMSTAT_TIMEOUT_SECS").then(|| "7".to_string());
    let config = ApiConfig::resolve(None, env, None).unwrap();
    assert_eq!(config.timeout, Duration::from_secs(7));

    let bad = |var: &str| (var == "STEAMSTAT_TIMEOUT_SECS").then(|| "soon".to_string());
    assert!(matches!(
        ApiConfig::resolve(None, bad, None),
        Err(ClientError::Config(_))
    ));
}

#[test]
fn rejects_non_http_base_urls() {
    for url in ["not a url", "ftp://example.com", "file:///tmp"] {
        let result = ApiConfig::resolve(Some(url.to_string()), no_env, None);
        assert!(matches!(result, Err(ClientError::Config(_))), "{}", url);
    }
}

#[test]
fn endpoint_joins_with_single_slash() {
    let mut config = ApiConfig::default();
    assert_eq!(
        config.endpoint("user/profile"),
        "http://localhost:8080/user/profile"
    );
    config.base_url = "https://api.example.com/v1/".to_string();
    assert_eq!(
        config.endpoint("/store"),
        "https://api.example.com/v1/store"
    );
}

#[test]
fn sources_report_provenance() {
    let file = file_with(Some("http://file:1"), None);

    let sources = sources_from(true, |_| true, Some(&file));
    assert_eq!(sources.base_url, ConfigSource::Flag);
    assert_eq!(sources.timeout, ConfigSource::EnvVar("STEAMSTAT_TIMEOUT_SECS"));

    let sources = sources_from(false, |_| false, Some(&file));
    assert_eq!(sources.base_url, ConfigSource::ConfigFile);
    assert_eq!(sources.timeout, ConfigSource::Default);

    let sources = sources_from(false, |_| false, None);
    assert_eq!(sources.base_url, ConfigSource::Default);
    assert_eq!(sources.base_url.to_string(), "default");
}

#[test]
fn save_then_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = ApiConfig {
        base_url: "https://steamstat.example".to_string(),
        timeout: Duration::from_secs(12),
    };

    save_to_path(&config, &path).unwrap();

    let section = read_config_file(&path).unwrap();
    assert_eq!(section.base_url.as_deref(), Some("https://steamstat.example"));
    assert_eq!(section.timeout_secs, Some(12));
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn default_timeout_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    save_to_path(&ApiConfig::default(), &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[api]"));
    assert!(!contents.contains("timeout_secs"));
}

#[test]
fn malformed_file_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();
    assert!(read_config_file(&path).is_none());
    assert!(read_config_file(&dir.path().join("missing.toml")).is_none());
}
