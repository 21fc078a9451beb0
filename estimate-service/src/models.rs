use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EstimateError, Result};

/// Oldest age the estimator accepts, in years
pub const MAX_AGE: u8 = 120;

/// Input field names, as they appear on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Age,
    InsuranceType,
    Department,
    Procedure,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Age => "age",
            Field::InsuranceType => "insuranceType",
            Field::Department => "department",
            Field::Procedure => "procedure",
        };
        f.write_str(name)
    }
}

/// Age as submitted: JSON bodies send numbers, forms and query strings send text.
///
/// Any other JSON value is kept so that validation, not deserialization,
/// decides what happens to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Years(i64),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl From<i64> for AgeInput {
    fn from(years: i64) -> Self {
        AgeInput::Years(years)
    }
}

/// Estimate request as collected from a form; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub age: Option<AgeInput>,
    pub insurance_type: Option<String>,
    pub department: Option<String>,
    pub procedure: Option<String>,
}

impl EstimateRequest {
    /// Fully populated request
    pub fn new(
        age: i64,
        insurance_type: impl Into<String>,
        department: impl Into<String>,
        procedure: impl Into<String>,
    ) -> Self {
        Self {
            age: Some(AgeInput::Years(age)),
            insurance_type: Some(insurance_type.into()),
            department: Some(department.into()),
            procedure: Some(procedure.into()),
        }
    }

    /// Check completeness and the age domain.
    ///
    /// All four fields are checked for presence before the age is parsed, so
    /// an incomplete form always reports [`EstimateError::MissingField`].
    pub fn validate(&self) -> Result<PatientProfile> {
        let age = self.age.as_ref().and_then(|age| match age {
            AgeInput::Text(text) if text.trim().is_empty() => None,
            other => Some(other),
        });
        let age = age.ok_or(EstimateError::MissingField(Field::Age))?;
        let insurance_type = required(&self.insurance_type, Field::InsuranceType)?;
        let department = required(&self.department, Field::Department)?;
        let procedure = required(&self.procedure, Field::Procedure)?;

        Ok(PatientProfile {
            age: parse_age(age)?,
            insurance_type: insurance_type.to_string(),
            department: department.to_string(),
            procedure: procedure.to_string(),
        })
    }
}

fn required(value: &Option<String>, field: Field) -> Result<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(EstimateError::MissingField(field))
}

fn parse_age(input: &AgeInput) -> Result<u8> {
    let years = match input {
        AgeInput::Years(years) => *years,
        AgeInput::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| EstimateError::InvalidAge(text.clone()))?,
        // Whole-number floats such as 45.0 are accepted.
        AgeInput::Number(value) => Decimal::try_from(*value)
            .ok()
            .filter(|years| years.fract().is_zero())
            .and_then(|years| i64::try_from(years).ok())
            .ok_or_else(|| EstimateError::InvalidAge(value.to_string()))?,
        AgeInput::Other(value) => return Err(EstimateError::InvalidAge(value.to_string())),
    };

    u8::try_from(years)
        .ok()
        .filter(|age| *age <= MAX_AGE)
        .ok_or(EstimateError::AgeOutOfRange(years))
}

/// A complete, validated request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    pub age: u8,
    pub insurance_type: String,
    pub department: String,
    pub procedure: String,
}

/// Cost breakdown returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub insurance_coverage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub out_of_pocket: Decimal,
    pub length_of_stay: String,
    pub factors: Vec<String>,
}

/// One cell of a department x procedure estimate grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    pub department: String,
    pub procedure: String,
    #[serde(flatten)]
    pub estimate: EstimateResult,
}
