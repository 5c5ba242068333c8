use thiserror::Error;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Inventory error: {0}")]
    InventoryError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

// Conversion implementations for common error types
impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        HubError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for HubError {
    fn from(err: toml::de::Error) -> Self {
        HubError::ConfigError(err.to_string())
    }
}
