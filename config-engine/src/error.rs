use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source not found: {0}")]
    SourceNotFound(String),

    #[error("Configuration parsing failed: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(path) => ConfigError::SourceNotFound(path),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}

impl From<estimate_service::EstimateError> for ConfigError {
    fn from(err: estimate_service::EstimateError) -> Self {
        ConfigError::ValidationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
