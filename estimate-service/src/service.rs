use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::error::{EstimateError, Result};
use crate::models::{EstimateRequest, EstimateResult, Field, MatrixRow, PatientProfile};
use crate::pricing::PricingTables;

/// Explanation attached to an estimate, in the order adjustments are evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostFactor {
    SeniorCare { multiplier: Decimal },
    PediatricDiscount { multiplier: Decimal },
    SpecialtyPremium { department: String },
    SelfPay,
}

impl fmt::Display for CostFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostFactor::SeniorCare { multiplier } => {
                write!(f, "Senior care adjustment (+{}%)", percent(*multiplier - Decimal::ONE))
            }
            CostFactor::PediatricDiscount { multiplier } => {
                write!(f, "Pediatric discount (-{}%)", percent(Decimal::ONE - *multiplier))
            }
            CostFactor::SpecialtyPremium { department } => {
                write!(f, "{department} specialty premium")
            }
            CostFactor::SelfPay => {
                f.write_str("Self-pay: no insurance coverage, payment plans available")
            }
        }
    }
}

fn percent(fraction: Decimal) -> Decimal {
    (fraction * Decimal::ONE_HUNDRED).normalize()
}

/// Round half-up to whole cents
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Cost estimator over a fixed set of pricing tables.
///
/// Holds no mutable state; share it behind an `Arc` across request handlers.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    tables: PricingTables,
    strict_catalog: bool,
}

impl CostEstimator {
    /// Create an estimator over validated tables
    pub fn new(tables: PricingTables) -> Result<Self> {
        tables.validate()?;
        Ok(Self {
            tables,
            strict_catalog: false,
        })
    }

    /// Reject insurance types, departments and procedures missing from the
    /// tables instead of pricing them with the fallback values.
    pub fn with_strict_catalog(mut self, strict: bool) -> Self {
        self.strict_catalog = strict;
        self
    }

    pub fn tables(&self) -> &PricingTables {
        &self.tables
    }

    pub fn is_strict(&self) -> bool {
        self.strict_catalog
    }

    /// Estimate a bill, or `None` when the request cannot be priced.
    ///
    /// Incomplete forms are the common case; callers that need the reason
    /// use [`CostEstimator::try_estimate`].
    pub fn estimate(&self, request: &EstimateRequest) -> Option<EstimateResult> {
        self.try_estimate(request).ok()
    }

    pub fn try_estimate(&self, request: &EstimateRequest) -> Result<EstimateResult> {
        self.estimate_profile(&request.validate()?)
    }

    /// Price an already validated profile, honoring strict catalog mode
    pub fn estimate_profile(&self, profile: &PatientProfile) -> Result<EstimateResult> {
        if self.strict_catalog {
            self.check_catalog(profile)?;
        }
        self.price(profile)
    }

    fn price(&self, profile: &PatientProfile) -> Result<EstimateResult> {
        let tables = &self.tables;
        let mut factors = Vec::new();

        let base_cost = tables.base_cost(&profile.procedure);
        let department_multiplier = tables.department_multiplier(&profile.department);
        let mut cost = base_cost
            .checked_mul(department_multiplier)
            .ok_or(EstimateError::Overflow)?;

        if profile.age > tables.age.senior_age_over {
            let multiplier = tables.age.senior_multiplier;
            cost = cost.checked_mul(multiplier).ok_or(EstimateError::Overflow)?;
            factors.push(CostFactor::SeniorCare { multiplier });
        } else if profile.age < tables.age.pediatric_age_under {
            let multiplier = tables.age.pediatric_multiplier;
            cost = cost.checked_mul(multiplier).ok_or(EstimateError::Overflow)?;
            factors.push(CostFactor::PediatricDiscount { multiplier });
        }

        // Informational only: the multiplier is already part of `cost`.
        if department_multiplier > tables.specialty_premium_over {
            factors.push(CostFactor::SpecialtyPremium {
                department: profile.department.clone(),
            });
        }

        let coverage_rate = tables.coverage_rate(&profile.insurance_type);
        if profile.insurance_type == tables.self_pay_code {
            factors.push(CostFactor::SelfPay);
        }

        // Coverage is taken from the rounded bill so that coverage plus
        // out-of-pocket always equals the estimated cost to the cent.
        let estimated_cost = round_to_cents(cost);
        let insurance_coverage = round_to_cents(
            estimated_cost
                .checked_mul(coverage_rate)
                .ok_or(EstimateError::Overflow)?,
        );
        let out_of_pocket = estimated_cost - insurance_coverage;

        tracing::debug!(
            %base_cost,
            %department_multiplier,
            %coverage_rate,
            %estimated_cost,
            "Estimate priced"
        );

        Ok(EstimateResult {
            estimated_cost,
            insurance_coverage,
            out_of_pocket,
            length_of_stay: tables.length_of_stay(&profile.procedure).to_string(),
            factors: factors.iter().map(ToString::to_string).collect(),
        })
    }

    /// Estimate every department x procedure combination for one patient
    pub fn estimate_matrix(&self, age: i64, insurance_type: &str) -> Result<Vec<MatrixRow>> {
        let mut rows =
            Vec::with_capacity(self.tables.departments.len() * self.tables.procedures.len());

        for department in &self.tables.departments {
            for procedure in &self.tables.procedures {
                let request =
                    EstimateRequest::new(age, insurance_type, &department.name, &procedure.code);
                rows.push(MatrixRow {
                    department: department.name.clone(),
                    procedure: procedure.code.clone(),
                    estimate: self.try_estimate(&request)?,
                });
            }
        }

        Ok(rows)
    }

    fn check_catalog(&self, profile: &PatientProfile) -> Result<()> {
        let unknown = |field, value: &str| EstimateError::UnknownValue {
            field,
            value: value.to_string(),
        };

        if self.tables.insurance(&profile.insurance_type).is_none() {
            return Err(unknown(Field::InsuranceType, &profile.insurance_type));
        }
        if self.tables.department(&profile.department).is_none() {
            return Err(unknown(Field::Department, &profile.department));
        }
        if self.tables.procedure(&profile.procedure).is_none() {
            return Err(unknown(Field::Procedure, &profile.procedure));
        }
        Ok(())
    }
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self {
            tables: PricingTables::default(),
            strict_catalog: false,
        }
    }
}
