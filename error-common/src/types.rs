use crate::codes;
use thiserror::Error;

/// Workspace-wide error enum for failures that cross crate boundaries
#[derive(Error, Debug)]
pub enum MediCostError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// HTTP server lifecycle errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MediCostError {
    /// Stable error code for API responses and logs
    pub fn code(&self) -> &'static str {
        match self {
            MediCostError::NetworkError(_) => codes::system::NETWORK_FAILURE,
            MediCostError::ServerError(_) => codes::system::SERVER_FAILURE,
            MediCostError::ConfigError(_) => codes::configuration::SOURCE_UNREADABLE,
            MediCostError::InternalError(_) | MediCostError::Other(_) => codes::system::INTERNAL,
        }
    }

    /// Short category name used as a structured log field
    pub fn error_type(&self) -> &'static str {
        match self {
            MediCostError::NetworkError(_) => "network",
            MediCostError::ServerError(_) => "server",
            MediCostError::ConfigError(_) => "configuration",
            MediCostError::InternalError(_) | MediCostError::Other(_) => "internal",
        }
    }
}

/// Result type alias for MediCost operations
pub type Result<T> = std::result::Result<T, MediCostError>;
