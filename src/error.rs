use thiserror::Error;

use crate::money::ParseError;

#[derive(Error, Debug)]
pub enum BuildLensError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid savings figure: {0}")]
    SavingsError(#[from] ParseError),

    #[error("Not found: {0}")]
    NotFoundError(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BuildLensError>;
