use estimate_service::{AgeInput, CostEstimator, EstimateRequest, EstimateResult};
use rust_decimal::Decimal;

fn dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn estimate(age: i64, insurance: &str, department: &str, procedure: &str) -> Option<EstimateResult> {
    CostEstimator::default().estimate(&EstimateRequest::new(age, insurance, department, procedure))
}

#[test]
fn test_private_major_surgery() {
    let result = estimate(45, "private", "Surgery", "major-surgery").unwrap();

    assert_eq!(result.estimated_cost, dollars(3_500_000));
    assert_eq!(result.insurance_coverage, dollars(2_625_000));
    assert_eq!(result.out_of_pocket, dollars(875_000));
    assert_eq!(result.length_of_stay, "5-7 days");
    assert_eq!(result.factors, vec!["Surgery specialty premium".to_string()]);
}

#[test]
fn test_pediatric_medicaid_consultation() {
    let result = estimate(10, "medicaid", "Pediatrics", "consultation").unwrap();

    assert_eq!(result.estimated_cost, dollars(19_125));
    assert_eq!(result.insurance_coverage, dollars(16_256));
    assert_eq!(result.out_of_pocket, dollars(2_869));
    assert_eq!(result.length_of_stay, "Same day");
    assert_eq!(result.factors, vec!["Pediatric discount (-15%)".to_string()]);
}

#[test]
fn test_senior_self_pay_oncology_emergency() {
    let result = estimate(70, "self-pay", "Oncology", "emergency-visit").unwrap();

    assert_eq!(result.estimated_cost, dollars(258_750));
    assert_eq!(result.insurance_coverage, Decimal::ZERO);
    assert_eq!(result.out_of_pocket, dollars(258_750));
    assert_eq!(result.length_of_stay, "1-3 days");
    assert_eq!(
        result.factors,
        vec![
            "Senior care adjustment (+15%)".to_string(),
            "Oncology specialty premium".to_string(),
            "Self-pay: no insurance coverage, payment plans available".to_string(),
        ]
    );
}

#[test]
fn test_missing_insurance_type_yields_nothing() {
    assert!(estimate(30, "", "Cardiology", "diagnostic").is_none());
}

#[test]
fn test_unknown_department_and_procedure_use_fallbacks() {
    let result = estimate(40, "private", "UnknownDept", "unknown-proc").unwrap();

    assert_eq!(result.estimated_cost, dollars(50_000));
    assert_eq!(result.insurance_coverage, dollars(37_500));
    assert_eq!(result.out_of_pocket, dollars(12_500));
    assert_eq!(result.length_of_stay, "Varies");
    assert!(result.factors.is_empty());
}

#[test]
fn test_emergency_multiplier_gets_no_premium_note() {
    let result = estimate(40, "commercial", "Emergency", "emergency-visit").unwrap();

    assert_eq!(result.estimated_cost, dollars(180_000));
    assert_eq!(result.insurance_coverage, dollars(126_000));
    assert!(result.factors.is_empty());
}

#[test]
fn test_unknown_insurance_pays_nothing() {
    let result = estimate(40, "barter", "Cardiology", "follow-up").unwrap();

    assert_eq!(result.estimated_cost, dollars(19_500));
    assert_eq!(result.insurance_coverage, Decimal::ZERO);
    assert_eq!(result.out_of_pocket, dollars(19_500));
    assert_eq!(result.factors, vec!["Cardiology specialty premium".to_string()]);
}

#[test]
fn test_age_bracket_boundaries() {
    let cost = |age| estimate(age, "medicare", "Emergency", "diagnostic").unwrap();

    assert_eq!(cost(17).factors, vec!["Pediatric discount (-15%)".to_string()]);
    assert!(cost(18).factors.is_empty());
    assert!(cost(65).factors.is_empty());
    assert_eq!(cost(66).factors, vec!["Senior care adjustment (+15%)".to_string()]);
    assert_eq!(cost(17).estimated_cost, dollars(81_600));
    assert!(cost(18).estimated_cost > cost(17).estimated_cost);
    assert!(cost(66).estimated_cost > cost(65).estimated_cost);
}

#[test]
fn test_three_decimal_bill_is_rounded_consistently() {
    // 250 x 1.35 x 1.15 = 388.125
    let result = estimate(80, "medicare", "Neurology", "consultation").unwrap();

    assert_eq!(result.estimated_cost, dollars(38_813));
    assert_eq!(result.insurance_coverage, dollars(31_050));
    assert_eq!(result.out_of_pocket, dollars(7_763));
}

#[test]
fn test_coverage_is_taken_from_the_rounded_bill() {
    // 388.13 x 0.75 = 291.0975, not 388.125 x 0.75 = 291.09375
    let result = estimate(80, "private", "Neurology", "consultation").unwrap();

    assert_eq!(result.estimated_cost, dollars(38_813));
    assert_eq!(result.insurance_coverage, dollars(29_110));
    assert_eq!(result.out_of_pocket, dollars(9_703));
}

#[test]
fn test_form_text_age() {
    let request = EstimateRequest {
        age: Some(AgeInput::Text("45".to_string())),
        insurance_type: Some("private".to_string()),
        department: Some("Surgery".to_string()),
        procedure: Some("major-surgery".to_string()),
    };
    let result = CostEstimator::default().estimate(&request).unwrap();
    assert_eq!(result.estimated_cost, dollars(3_500_000));
}

#[test]
fn test_out_of_range_age_yields_nothing() {
    assert!(estimate(-5, "private", "Surgery", "consultation").is_none());
    assert!(estimate(121, "private", "Surgery", "consultation").is_none());
}

#[test]
fn test_result_serializes_with_camel_case_numbers() {
    let result = estimate(45, "private", "Surgery", "major-surgery").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["estimatedCost"], serde_json::json!(35000.0));
    assert_eq!(json["insuranceCoverage"], serde_json::json!(26250.0));
    assert_eq!(json["outOfPocket"], serde_json::json!(8750.0));
    assert_eq!(json["lengthOfStay"], "5-7 days");
    assert_eq!(json["factors"][0], "Surgery specialty premium");
}
