use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an isolated home directory holding a larc config file
pub fn temp_home_with_config(content: &str) -> (TempDir, PathBuf) {
    let home = TempDir::new().expect("Failed to create temp dir");
    let config_dir = home.path().join(".larc");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");

    let config_path = config_dir.join("config.toml");
    fs::write(&config_path, content).expect("Failed to write config");

    (home, config_path)
}

pub fn config_with_key(api_key: &str, base_url: &str) -> String {
    format!("api_key = \"{api_key}\"\nbase_url = \"{base_url}\"\n")
}
