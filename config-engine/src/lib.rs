//! Configuration management for the MediCost engine
//!
//! Layers, lowest precedence first:
//! - Built-in defaults (the standard pricing tables, port 8080)
//! - YAML, TOML or JSON files
//! - `MEDICOST__*` environment variables, `__` separating nested keys
//!
//! The merged result is validated before it is handed out, so an estimator
//! built from it never sees coverage above 100% or a negative price.
//!
//! # Example
//!
//! ```yaml
//! server:
//!   port: 8080
//!   cors_origins: ["http://localhost:3000"]
//! logging:
//!   log_level: info
//!   json: true
//! estimator:
//!   strict_catalog: false
//! pricing:
//!   procedures:
//!     - code: consultation
//!       label: Consultation
//!       base_cost: 250
//!       length_of_stay: Same day
//!   age:
//!     senior_age_over: 65
//!     senior_multiplier: 1.15
//! ```
//!
//! ```rust,no_run
//! use config_engine::ConfigEngine;
//!
//! let config = ConfigEngine::new()
//!     .with_file("medicost.yaml", false)
//!     .load()?;
//! let estimator = config.build_estimator()?;
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod engine;
pub mod error;
pub mod settings;
pub mod validation;

pub use engine::*;
pub use error::*;
pub use settings::*;
