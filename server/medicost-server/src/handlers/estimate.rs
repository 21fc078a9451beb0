use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use estimate_service::{EstimateRequest, EstimateResult, PricingTables};
use logger_redacted::age_bracket;
use serde::Serialize;

use crate::error::ApiResult;
use crate::server::MediCostServer;

/// Supported values and their pricing, for populating estimate forms
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub strict_catalog: bool,
    pub pricing: PricingTables,
}

/// POST /api/estimate
pub async fn create_estimate(
    State(server): State<MediCostServer>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> ApiResult<Json<Option<EstimateResult>>> {
    let Json(request) = payload?;
    run_estimate(&server, &request)
}

/// GET /api/estimate?age=..&insuranceType=..&department=..&procedure=..
pub async fn query_estimate(
    State(server): State<MediCostServer>,
    query: Result<Query<EstimateRequest>, QueryRejection>,
) -> ApiResult<Json<Option<EstimateResult>>> {
    let Query(request) = query?;
    run_estimate(&server, &request)
}

/// GET /api/catalog
pub async fn catalog(State(server): State<MediCostServer>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        strict_catalog: server.estimator.is_strict(),
        pricing: server.estimator.tables().clone(),
    })
}

fn run_estimate(
    server: &MediCostServer,
    request: &EstimateRequest,
) -> ApiResult<Json<Option<EstimateResult>>> {
    let profile = match request.validate() {
        Ok(profile) => profile,
        Err(err) if err.is_incomplete_input() => {
            tracing::debug!(reason = %err, "Incomplete estimate request");
            return Ok(Json(None));
        }
        Err(err) => return Err(err.into()),
    };

    let result = server.estimator.estimate_profile(&profile)?;

    tracing::info!(
        age_bracket = age_bracket(i64::from(profile.age)),
        insurance_type = %server.redactor.redact(&profile.insurance_type),
        department = %server.redactor.redact(&profile.department),
        procedure = %server.redactor.redact(&profile.procedure),
        estimated_cost = %result.estimated_cost,
        factors = result.factors.len(),
        "Estimate computed"
    );

    Ok(Json(Some(result)))
}
