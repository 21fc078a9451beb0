use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use config_engine::EngineConfig;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

use medicost_server::{create_app, MediCostServer};

fn app_with(config: EngineConfig) -> Router {
    create_app(MediCostServer::new(config).expect("valid test configuration"))
}

fn app() -> Router {
    app_with(EngineConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn post_estimate(body: Value) -> Request<Body> {
    Request::builder()
        .uri("/api/estimate")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_post_estimate_major_surgery() {
    let (status, body) = send(
        app(),
        post_estimate(json!({
            "age": 45,
            "insuranceType": "private",
            "department": "Surgery",
            "procedure": "major-surgery"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimatedCost"], json!(35000.0));
    assert_eq!(body["insuranceCoverage"], json!(26250.0));
    assert_eq!(body["outOfPocket"], json!(8750.0));
    assert_eq!(body["lengthOfStay"], "5-7 days");
    assert_eq!(body["factors"], json!(["Surgery specialty premium"]));
}

#[tokio::test]
async fn test_post_estimate_missing_field_returns_null() {
    let (status, body) = send(
        app(),
        post_estimate(json!({
            "age": 30,
            "insuranceType": "",
            "department": "Cardiology",
            "procedure": "diagnostic"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_post_estimate_omitted_field_returns_null() {
    let (status, body) = send(app(), post_estimate(json!({ "age": 30 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_post_estimate_out_of_range_age_is_rejected() {
    let (status, body) = send(
        app(),
        post_estimate(json!({
            "age": 130,
            "insuranceType": "private",
            "department": "Surgery",
            "procedure": "consultation"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(body["code"], "VALIDATION_1004");
    assert!(body["field_errors"]["age"].is_array());
}

#[tokio::test]
async fn test_post_estimate_non_numeric_age_is_rejected() {
    let (status, body) = send(
        app(),
        post_estimate(json!({
            "age": "forty",
            "insuranceType": "private",
            "department": "Surgery",
            "procedure": "consultation"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_1003");
}

fn surgery_consultation(age: Value) -> Value {
    json!({
        "age": age,
        "insuranceType": "private",
        "department": "Surgery",
        "procedure": "consultation"
    })
}

#[tokio::test]
async fn test_post_estimate_whole_number_float_age() {
    let (status, body) = send(app(), post_estimate(surgery_consultation(json!(45.0)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimatedCost"], json!(350.0));
    assert_eq!(body["insuranceCoverage"], json!(262.5));
    assert_eq!(body["outOfPocket"], json!(87.5));
}

#[tokio::test]
async fn test_post_estimate_non_integer_ages_are_rejected() {
    for age in [json!(45.5), json!(true), json!([45]), json!({ "years": 45 })] {
        let (status, body) = send(app(), post_estimate(surgery_consultation(age.clone()))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "age {age}");
        assert_eq!(body["error_type"], "validation_error", "age {age}");
        assert_eq!(body["code"], "VALIDATION_1003", "age {age}");
        assert!(body["field_errors"]["age"].is_array(), "age {age}");
    }
}

#[tokio::test]
async fn test_post_estimate_fractional_age_without_other_fields_returns_null() {
    let (status, body) = send(app(), post_estimate(json!({ "age": 45.5 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_post_estimate_malformed_json_uses_error_body() {
    let request = Request::builder()
        .uri("/api/estimate")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"age\": 45,"))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_1001");
    assert!(body["error_id"].is_string());
}

#[tokio::test]
async fn test_post_estimate_non_string_field_uses_error_body() {
    let (status, body) = send(
        app(),
        post_estimate(json!({
            "age": 45,
            "insuranceType": 7,
            "department": "Surgery",
            "procedure": "consultation"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_cost_overflow_is_a_server_error() {
    let mut config = EngineConfig::default();
    for procedure in &mut config.pricing.procedures {
        procedure.base_cost = Decimal::MAX;
    }

    let (status, body) = send(
        app_with(config),
        post_estimate(surgery_consultation(json!(45))),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_type"], "internal_error");
    assert_eq!(body["code"], "SYSTEM_5003");
    assert!(body["error_id"].is_string());
}

#[tokio::test]
async fn test_get_estimate_from_query_string() {
    let (status, body) = send(
        app(),
        get("/api/estimate?age=10&insuranceType=medicaid&department=Pediatrics&procedure=consultation"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimatedCost"], json!(191.25));
    assert_eq!(body["insuranceCoverage"], json!(162.56));
    assert_eq!(body["outOfPocket"], json!(28.69));
    assert_eq!(body["lengthOfStay"], "Same day");
}

#[tokio::test]
async fn test_get_estimate_incomplete_query_returns_null() {
    let (status, body) = send(app(), get("/api/estimate?age=10&department=Pediatrics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_unknown_values_fall_back_by_default() {
    let (status, body) = send(
        app(),
        post_estimate(json!({
            "age": 40,
            "insuranceType": "private",
            "department": "UnknownDept",
            "procedure": "unknown-proc"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimatedCost"], json!(500.0));
    assert_eq!(body["insuranceCoverage"], json!(375.0));
    assert_eq!(body["outOfPocket"], json!(125.0));
    assert_eq!(body["lengthOfStay"], "Varies");
}

#[tokio::test]
async fn test_strict_catalog_rejects_unknown_values() {
    let mut config = EngineConfig::default();
    config.estimator.strict_catalog = true;

    let (status, body) = send(
        app_with(config),
        post_estimate(json!({
            "age": 40,
            "insuranceType": "private",
            "department": "UnknownDept",
            "procedure": "consultation"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_1005");
    assert!(body["field_errors"]["department"].is_array());
}

#[tokio::test]
async fn test_catalog_lists_pricing_tables() {
    let (status, body) = send(app(), get("/api/catalog")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["strictCatalog"], json!(false));
    assert_eq!(body["pricing"]["procedures"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["pricing"]["departments"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["pricing"]["insurance"][4]["code"], "self-pay");
    assert_eq!(body["pricing"]["procedures"][3]["base_cost"], json!(25000.0));
}

#[tokio::test]
async fn test_health_and_version() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app(), get("/version")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "MediCost Engine");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = send(app(), get("/api/physicians")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
