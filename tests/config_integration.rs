use larc::config::{Config, DEFAULT_BASE_URL};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(!config.has_api_key());
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        api_key: "abc123".to_string(),
        base_url: Some("http://localhost:9000".to_string()),
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_is_owner_readable_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        api_key: "secret".to_string(),
        base_url: None,
    };
    config.save_to(&path).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_unparsable_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_key = [broken").unwrap();

    let result = Config::load_from(&path);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse configuration file")
    );
}

#[test]
fn test_invalid_base_url_is_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "api_key = \"k\"\nbase_url = \"ftp://example.com\"\n",
    )
    .unwrap();

    let result = Config::load_from(&path);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Invalid URL scheme")
    );
}

#[test]
fn test_key_update_preserves_base_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        api_key: String::new(),
        base_url: Some("http://localhost:1234".to_string()),
    };
    config.save_to(&path).unwrap();

    // Same load -> mutate -> save cycle set_api_key performs
    let mut loaded = Config::load_from(&path).unwrap();
    loaded.api_key = "fresh-key".to_string();
    loaded.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.api_key, "fresh-key");
    assert_eq!(reloaded.base_url.as_deref(), Some("http://localhost:1234"));
}
