//! MediCost Server - patient cost estimate API
//!
//! Serves the cost estimator over HTTP:
//! - `POST /api/estimate` and `GET /api/estimate` price a patient profile
//! - `GET /api/catalog` lists supported insurance types, departments and procedures
//! - `GET /health`, `GET /version`

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::*;
pub use server::MediCostServer;

use axum::{extract::Request, middleware::from_fn, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Create the main application router with all routes and middleware
pub fn create_app(server: MediCostServer) -> Router {
    let settings = &server.config.server;
    let cors = middleware::create_cors_layer(&settings.cors_origins);
    let timeout = Duration::from_secs(settings.request_timeout_secs);

    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                    // Query strings are left out of spans; they can carry patient attributes.
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }))
                .layer(cors)
                .layer(TimeoutLayer::new(timeout))
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
