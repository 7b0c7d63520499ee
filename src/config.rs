use crate::error::{ErrorContext, LarcError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use url::Url;

/// Production endpoint for the LoLArchiver API
pub const DEFAULT_BASE_URL: &str = "https://api.lolarchiver.com";

/// Persistent client configuration, stored at `~/.larc/config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// API key sent with every request; empty until set via `config set-api-key`
    #[serde(default)]
    pub api_key: String,

    /// Endpoint override; the production URL is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Load the configuration, returning defaults when no file exists yet.
    ///
    /// A missing file is not an error: commands run with an empty API key
    /// and let the server reject them, so the 401 guidance can point the
    /// user at `config set-api-key`.
    pub fn load() -> Result<Self, LarcError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, LarcError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).larc_config_err(format!(
            "Failed to read configuration file at {}",
            path.display()
        ))?;

        let config: Self =
            toml::from_str(&contents).larc_config_err("Failed to parse configuration file")?;

        config.validate()?;

        Ok(config)
    }

    /// Persist the configuration to the default location
    pub fn save(&self) -> Result<(), LarcError> {
        Self::ensure_config_dir()?;
        self.save_to(&Self::config_path()?)
    }

    /// Persist the configuration to an explicit path, owner-readable only
    pub fn save_to(&self, path: &Path) -> Result<(), LarcError> {
        let contents =
            toml::to_string(self).larc_config_err("Failed to serialize configuration")?;

        fs::write(path, contents).larc_config_err(format!(
            "Failed to write configuration file at {}",
            path.display()
        ))?;

        let metadata = fs::metadata(path)
            .larc_config_err(format!("Failed to get metadata for {}", path.display()))?;
        let mut permissions = metadata.permissions();
        permissions.set_mode(0o600);
        fs::set_permissions(path, permissions)
            .larc_config_err(format!("Failed to set permissions for {}", path.display()))?;

        Ok(())
    }

    /// Store a new API key, preserving the rest of the configuration
    pub fn set_api_key(api_key: &str) -> Result<(), LarcError> {
        let mut config = Self::load()?;
        config.api_key = api_key.to_string();
        config.save()
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// The endpoint requests are issued against
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn validate(&self) -> Result<(), LarcError> {
        if let Some(base_url) = &self.base_url {
            Self::validate_url(base_url)?;
        }
        Ok(())
    }

    fn validate_url(url_str: &str) -> Result<(), LarcError> {
        let url = Url::parse(url_str)
            .map_err(|e| LarcError::Config(format!("Invalid URL '{url_str}': {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LarcError::Config(format!(
                "Invalid URL scheme '{scheme}': only HTTP and HTTPS are supported"
            ))),
        }
    }

    fn config_path() -> Result<PathBuf, LarcError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    fn config_dir() -> Result<PathBuf, LarcError> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| LarcError::Config("Could not determine home directory".to_string()))?;
        Ok(home_dir.join(".larc"))
    }

    fn ensure_config_dir() -> Result<(), LarcError> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).larc_config_err({
                format!(
                    "Failed to create configuration directory at {}",
                    config_dir.display()
                )
            })?;

            let metadata = fs::metadata(&config_dir).larc_config_err(format!(
                "Failed to get metadata for {}",
                config_dir.display()
            ))?;
            let mut permissions = metadata.permissions();
            permissions.set_mode(0o700);
            fs::set_permissions(&config_dir, permissions).larc_config_err({
                format!("Failed to set permissions for {}", config_dir.display())
            })?;
        }

        Ok(())
    }
}
