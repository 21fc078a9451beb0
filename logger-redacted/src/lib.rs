//! Structured logging for the MediCost engine
//!
//! Installs the process-wide `tracing` subscriber and provides the PII
//! redactor applied to patient-supplied values before they are logged.
//!
//! - Development: human-readable, ANSI-colored lines with targets
//! - Production: one JSON object per event
//! - `RUST_LOG` overrides the configured level
//! - Events go to stderr, leaving stdout for command output
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{LoggerConfig, PiiRedactor};
//!
//! let config = LoggerConfig::default();
//! logger_redacted::init(&config).ok();
//!
//! let redactor = PiiRedactor::new(&config).expect("patterns compile");
//! tracing::info!(
//!     department = %redactor.redact("call me on 555-123-4567"),
//!     "Estimate requested"
//! );
//! ```

pub mod config;
pub mod redactor;

pub use config::*;
pub use redactor::*;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter '{0}'")]
    Filter(String),

    #[error("Redaction pattern failed to compile: {0}")]
    Pattern(String),

    #[error("Global subscriber already installed")]
    AlreadyInitialized,
}

/// Install the global subscriber described by `config`.
///
/// Fails with [`LoggerError::AlreadyInitialized`] when called twice, which
/// callers that may run under a test harness can safely ignore.
pub fn init(config: &LoggerConfig) -> Result<(), LoggerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .map_err(|_| LoggerError::Filter(config.log_level.clone()))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_timer(fmt::time::ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(fmt::time::ChronoUtc::rfc_3339())
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(|_| LoggerError::AlreadyInitialized)
}
