use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use error_common::{codes, ErrorContext, ErrorReporter, MediCostError};
use estimate_service::EstimateError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Standard API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Error type
    pub error_type: String,
    /// Stable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field-specific validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, Vec<String>>>,
    /// Timestamp when error occurred
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Suggested actions for resolving the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: &'static str,
        field_errors: Option<HashMap<String, Vec<String>>>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Validation error attributed to a single field
    pub fn field(field: impl Into<String>, code: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.into(), vec![message.clone()]);
        Self::Validation {
            message,
            code,
            field_errors: Some(field_errors),
        }
    }

    /// Request body or query string that could not be read at all
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: codes::validation::INVALID_INPUT,
            field_errors: None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Configuration { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::Configuration { .. } => "configuration_error",
            ApiError::Internal { .. } => "internal_error",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation { code, .. } => code,
            ApiError::Configuration { .. } => codes::configuration::INVALID_PRICING,
            ApiError::Internal { .. } => codes::system::INTERNAL,
        }
    }

    /// Get suggested actions for resolving the error
    pub fn suggestions(&self) -> Option<Vec<String>> {
        match self {
            ApiError::Validation { .. } => Some(vec![
                "Ensure age is a whole number between 0 and 120".to_string(),
                "Use values listed by GET /api/catalog".to_string(),
            ]),
            _ => None,
        }
    }
}

impl From<EstimateError> for ApiError {
    fn from(err: EstimateError) -> Self {
        let message = err.to_string();
        match err {
            EstimateError::MissingField(field) => {
                ApiError::field(field.to_string(), codes::validation::MISSING_REQUIRED_FIELD, message)
            }
            EstimateError::InvalidAge(_) => {
                ApiError::field("age", codes::validation::INVALID_FORMAT, message)
            }
            EstimateError::AgeOutOfRange(_) => {
                ApiError::field("age", codes::validation::OUT_OF_RANGE, message)
            }
            EstimateError::UnknownValue { field, .. } => ApiError::field(
                field.to_string(),
                codes::validation::UNKNOWN_CATALOG_VALUE,
                message,
            ),
            EstimateError::InvalidPricing(_) => ApiError::Configuration { message },
            EstimateError::Overflow => ApiError::Internal { message },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::malformed(rejection.body_text())
    }
}

impl ApiError {
    /// Workspace error carrying the same failure, for server-side reporting
    fn to_medicost_error(&self) -> MediCostError {
        match self {
            ApiError::Configuration { message } => MediCostError::ConfigError(message.clone()),
            other => MediCostError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        // Client mistakes are expected traffic; only server faults are reported.
        let error_id = if status_code.is_server_error() {
            let context = ErrorContext::new()
                .with_request_id(Uuid::new_v4().to_string())
                .with_component("http")
                .add_context("status_code", status_code.as_u16().to_string())
                .add_context("api_error_type", self.error_type());
            ErrorReporter::new()
                .report(&self.to_medicost_error(), context)
                .error_id
                .to_string()
        } else {
            let error_id = Uuid::new_v4().to_string();
            warn!(
                error_id = %error_id,
                error_type = %self.error_type(),
                status_code = %status_code.as_u16(),
                "Request rejected"
            );
            error_id
        };

        let field_errors = match &self {
            ApiError::Validation { field_errors, .. } => field_errors.clone(),
            _ => None,
        };

        let error_response = ApiErrorResponse {
            error_id,
            error_type: self.error_type().to_string(),
            code: self.code().to_string(),
            message: self.to_string(),
            field_errors,
            timestamp: chrono::Utc::now(),
            suggestions: self.suggestions(),
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
