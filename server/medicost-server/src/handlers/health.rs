use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::MediCostServer;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: u64,
}

/// Version information response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
}

/// Health check handler
pub async fn health_check(State(server): State<MediCostServer>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: server.uptime_secs(),
    })
}

/// Version information handler
pub async fn version_info(State(server): State<MediCostServer>) -> Json<VersionResponse> {
    let mut features = vec!["cost-estimate".to_string(), "pii-redacted-logging".to_string()];
    if server.estimator.is_strict() {
        features.push("strict-catalog".to_string());
    }

    Json(VersionResponse {
        name: "MediCost Engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features,
    })
}
