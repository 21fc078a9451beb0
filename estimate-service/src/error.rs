use thiserror::Error;

use crate::models::Field;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Missing required field: {0}")]
    MissingField(Field),

    #[error("Age '{0}' is not a whole number of years")]
    InvalidAge(String),

    #[error("Age {0} is outside the supported range 0-120")]
    AgeOutOfRange(i64),

    #[error("Unknown {field} '{value}'")]
    UnknownValue { field: Field, value: String },

    #[error("Invalid pricing tables: {0}")]
    InvalidPricing(String),

    #[error("Cost calculation overflowed")]
    Overflow,
}

impl EstimateError {
    /// Whether the caller should simply prompt for the rest of the form
    pub fn is_incomplete_input(&self) -> bool {
        matches!(self, EstimateError::MissingField(_))
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;
