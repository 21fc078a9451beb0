use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{estimate, health},
    server::MediCostServer,
};

/// Create health check routes
pub fn health_routes() -> Router<MediCostServer> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// Create cost estimate routes
pub fn estimate_routes() -> Router<MediCostServer> {
    Router::new()
        .route(
            "/estimate",
            post(estimate::create_estimate).get(estimate::query_estimate),
        )
        .route("/catalog", get(estimate::catalog))
}

/// Create all routes
pub fn create_routes() -> Router<MediCostServer> {
    Router::new()
        .merge(health_routes())
        .nest("/api", estimate_routes())
}
