use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown sort mode: {0}")]
    InvalidSortMode(String),
    #[error("Malformed configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
