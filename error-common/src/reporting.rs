// Error reporting to the tracing pipeline

use crate::context::ErrorContext;
use crate::types::MediCostError;
use serde::Serialize;
use uuid::Uuid;

/// Serializable record of a reported error
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error_id: Uuid,
    pub code: &'static str,
    pub error_type: &'static str,
    pub message: String,
    pub context: ErrorContext,
    pub reported_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Default)]
pub struct ErrorReporter;

impl ErrorReporter {
    pub fn new() -> Self {
        Self
    }

    /// Emit the error as a structured event and return the report for callers
    /// that echo the correlation id back to a user.
    pub fn report(&self, error: &MediCostError, context: ErrorContext) -> ErrorReport {
        let report = ErrorReport {
            error_id: Uuid::new_v4(),
            code: error.code(),
            error_type: error.error_type(),
            message: error.to_string(),
            context,
            reported_at: chrono::Utc::now(),
        };

        tracing::error!(
            error_id = %report.error_id,
            error_type = report.error_type,
            error_code = report.code,
            request_id = report.context.request_id.as_deref().unwrap_or("-"),
            "Error reported: {}",
            report.message
        );

        report
    }
}
