//! Common error handling utilities for the MediCost engine
//!
//! Shared error types, error codes and reporting helpers used by every
//! crate in the workspace, so the CLI and the HTTP server describe the same
//! failure the same way.
//!
//! # Error Categories
//!
//! - **ConfigError**: pricing tables or server settings that fail to load
//! - **ServerError** / **NetworkError**: HTTP listener and transport failures
//! - **InternalError**: anything else worth a 500, such as arithmetic overflow
//!
//! Request validation failures stay in the HTTP layer; only server faults
//! are reported through [`ErrorReporter`].
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, ErrorContext, ErrorReporter, MediCostError};
//!
//! let err = MediCostError::ConfigError("pricing.insurance: coverage rate above 1".to_string());
//! assert_eq!(err.code(), codes::configuration::SOURCE_UNREADABLE);
//!
//! let context = ErrorContext::new()
//!     .with_component("startup")
//!     .add_context("config_path", "medicost.yaml");
//! let report = ErrorReporter::new().report(&err, context);
//! assert_eq!(report.error_type, "configuration");
//! ```

pub mod codes;
pub mod context;
pub mod reporting;
pub mod types;

pub use context::*;
pub use reporting::*;
pub use types::*;
