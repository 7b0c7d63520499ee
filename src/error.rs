use std::fmt::Display;

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add a simple string context to the error with a specific error variant
    fn larc_config_err(self, msg: impl Display) -> std::result::Result<T, LarcError>;

    fn larc_transport_err(self, msg: impl Display) -> std::result::Result<T, LarcError>;
}

impl<T, E: Display> ErrorContext<T> for std::result::Result<T, E> {
    fn larc_config_err(self, msg: impl Display) -> std::result::Result<T, LarcError> {
        self.map_err(|e| LarcError::Config(format!("{msg}: {e}")))
    }

    fn larc_transport_err(self, msg: impl Display) -> std::result::Result<T, LarcError> {
        self.map_err(|e| LarcError::Transport(format!("{msg}: {e}")))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LarcError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<toml::de::Error> for LarcError {
    fn from(err: toml::de::Error) -> Self {
        LarcError::Config(format!("Failed to parse TOML: {err}"))
    }
}

impl From<reqwest::Error> for LarcError {
    fn from(err: reqwest::Error) -> Self {
        LarcError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for LarcError {
    fn from(err: serde_json::Error) -> Self {
        LarcError::Transport(format!("Failed to serialize request body: {err}"))
    }
}
