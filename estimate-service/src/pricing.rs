use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EstimateError, Result};

/// Procedure list price and expected length of stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedurePrice {
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_cost: Decimal,
    pub length_of_stay: String,
}

/// Department cost multiplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub multiplier: Decimal,
}

/// Share of the bill an insurance category pays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceCoverage {
    pub code: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub coverage_rate: Decimal,
}

/// Age-based cost adjustments.
///
/// Seniors are patients strictly older than `senior_age_over`; pediatric
/// patients are strictly younger than `pediatric_age_under`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeAdjustments {
    pub senior_age_over: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub senior_multiplier: Decimal,
    pub pediatric_age_under: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub pediatric_multiplier: Decimal,
}

impl Default for AgeAdjustments {
    fn default() -> Self {
        Self {
            senior_age_over: 65,
            senior_multiplier: Decimal::new(115, 2),
            pediatric_age_under: 18,
            pediatric_multiplier: Decimal::new(85, 2),
        }
    }
}

/// Values used when a request names something the tables do not list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub department_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub coverage_rate: Decimal,
    pub length_of_stay: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            base_cost: Decimal::new(500, 0),
            department_multiplier: Decimal::ONE,
            coverage_rate: Decimal::ZERO,
            length_of_stay: "Varies".to_string(),
        }
    }
}

/// Every lookup table the estimator prices from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTables {
    pub procedures: Vec<ProcedurePrice>,
    pub departments: Vec<DepartmentRate>,
    pub insurance: Vec<InsuranceCoverage>,
    pub age: AgeAdjustments,
    /// Departments whose multiplier exceeds this get a specialty-premium note
    #[serde(with = "rust_decimal::serde::float")]
    pub specialty_premium_over: Decimal,
    /// Insurance code that pays nothing and gets the payment-plan note
    pub self_pay_code: String,
    pub fallbacks: Fallbacks,
}

impl Default for PricingTables {
    fn default() -> Self {
        let procedure = |code: &str, label: &str, base_cost: i64, stay: &str| ProcedurePrice {
            code: code.to_string(),
            label: Some(label.to_string()),
            base_cost: Decimal::new(base_cost, 0),
            length_of_stay: stay.to_string(),
        };
        let department = |name: &str, hundredths: i64| DepartmentRate {
            name: name.to_string(),
            multiplier: Decimal::new(hundredths, 2),
        };
        let insurance = |code: &str, label: &str, hundredths: i64| InsuranceCoverage {
            code: code.to_string(),
            label: Some(label.to_string()),
            coverage_rate: Decimal::new(hundredths, 2),
        };

        Self {
            procedures: vec![
                procedure("consultation", "Consultation", 250, "Same day"),
                procedure("diagnostic", "Diagnostic Test", 800, "Same day"),
                procedure("minor-surgery", "Minor Surgery", 3_500, "1-2 days"),
                procedure("major-surgery", "Major Surgery", 25_000, "5-7 days"),
                procedure("emergency-visit", "Emergency Visit", 1_500, "1-3 days"),
                procedure("follow-up", "Follow-up", 150, "Same day"),
            ],
            departments: vec![
                department("Cardiology", 130),
                department("Emergency", 120),
                department("Surgery", 140),
                department("Orthopedics", 125),
                department("Neurology", 135),
                department("Pediatrics", 90),
                department("Oncology", 150),
            ],
            insurance: vec![
                insurance("medicare", "Medicare", 80),
                insurance("medicaid", "Medicaid", 85),
                insurance("private", "Private Insurance", 75),
                insurance("commercial", "Commercial", 70),
                insurance("self-pay", "Self-Pay", 0),
            ],
            age: AgeAdjustments::default(),
            specialty_premium_over: Decimal::new(12, 1),
            self_pay_code: "self-pay".to_string(),
            fallbacks: Fallbacks::default(),
        }
    }
}

impl PricingTables {
    pub fn procedure(&self, code: &str) -> Option<&ProcedurePrice> {
        self.procedures.iter().find(|p| p.code == code)
    }

    pub fn department(&self, name: &str) -> Option<&DepartmentRate> {
        self.departments.iter().find(|d| d.name == name)
    }

    pub fn insurance(&self, code: &str) -> Option<&InsuranceCoverage> {
        self.insurance.iter().find(|i| i.code == code)
    }

    pub fn base_cost(&self, procedure: &str) -> Decimal {
        self.procedure(procedure)
            .map_or(self.fallbacks.base_cost, |p| p.base_cost)
    }

    pub fn department_multiplier(&self, department: &str) -> Decimal {
        self.department(department)
            .map_or(self.fallbacks.department_multiplier, |d| d.multiplier)
    }

    pub fn coverage_rate(&self, insurance_type: &str) -> Decimal {
        self.insurance(insurance_type)
            .map_or(self.fallbacks.coverage_rate, |i| i.coverage_rate)
    }

    pub fn length_of_stay(&self, procedure: &str) -> &str {
        self.procedure(procedure)
            .map_or(self.fallbacks.length_of_stay.as_str(), |p| {
                p.length_of_stay.as_str()
            })
    }

    /// Reject tables that could produce a negative bill or coverage above 100%
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(EstimateError::InvalidPricing(msg));

        unique("procedure", self.procedures.iter().map(|p| p.code.as_str()))?;
        unique("department", self.departments.iter().map(|d| d.name.as_str()))?;
        unique("insurance", self.insurance.iter().map(|i| i.code.as_str()))?;

        for p in &self.procedures {
            if p.base_cost.is_sign_negative() {
                return invalid(format!("procedure '{}' has a negative base cost", p.code));
            }
        }
        for d in &self.departments {
            if d.multiplier <= Decimal::ZERO {
                return invalid(format!("department '{}' multiplier must be positive", d.name));
            }
        }
        for i in &self.insurance {
            if !is_rate(i.coverage_rate) {
                return invalid(format!("insurance '{}' coverage rate must be within 0-1", i.code));
            }
        }

        if self.age.senior_multiplier <= Decimal::ZERO
            || self.age.pediatric_multiplier <= Decimal::ZERO
        {
            return invalid("age multipliers must be positive".to_string());
        }
        if self.age.pediatric_age_under > self.age.senior_age_over {
            return invalid(format!(
                "pediatric bracket (< {}) overlaps senior bracket (> {})",
                self.age.pediatric_age_under, self.age.senior_age_over
            ));
        }
        if self.fallbacks.base_cost.is_sign_negative()
            || self.fallbacks.department_multiplier <= Decimal::ZERO
            || !is_rate(self.fallbacks.coverage_rate)
        {
            return invalid("fallback values out of range".to_string());
        }
        if let Some(self_pay) = self.insurance(&self.self_pay_code) {
            if !self_pay.coverage_rate.is_zero() {
                return invalid(format!("'{}' must have a zero coverage rate", self.self_pay_code));
            }
        }

        Ok(())
    }
}

fn is_rate(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= Decimal::ONE
}

fn unique<'a>(kind: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(EstimateError::InvalidPricing(format!("duplicate {kind} '{key}'")));
        }
    }
    Ok(())
}
