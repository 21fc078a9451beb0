//! Patient Cost Estimation
//!
//! Prices a prospective visit from four patient attributes:
//! - Procedure list price and expected length of stay
//! - Department multiplier (with a specialty-premium note above 1.2x)
//! - Senior and pediatric age adjustments
//! - Insurance coverage rate, with a payment-plan note for self-pay
//!
//! Amounts are exact decimals rounded half-up to cents. The estimator is a
//! pure function of its tables and the request.
//!
//! # Example
//!
//! ```rust
//! use estimate_service::{CostEstimator, EstimateRequest};
//! use rust_decimal::Decimal;
//!
//! let estimator = CostEstimator::default();
//! let request = EstimateRequest::new(45, "private", "Surgery", "major-surgery");
//! let result = estimator.estimate(&request).expect("complete request");
//!
//! assert_eq!(result.estimated_cost, Decimal::new(35_000, 0));
//! assert_eq!(result.out_of_pocket, Decimal::new(8_750, 0));
//! assert_eq!(result.length_of_stay, "5-7 days");
//! ```

pub mod error;
pub mod models;
pub mod pricing;
pub mod service;

pub use error::*;
pub use models::*;
pub use pricing::*;
pub use service::*;
