//! # Routes
//!
//! Axum router configuration for the dispatch service.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /api/v1/providers - Supported backend kinds
/// - GET  /api/v1/gateways - Configured gateways (redacted)
/// - GET  /api/v1/gateways/{id}/methods - Payment methods for a gateway
/// - POST /api/v1/gateways/{id}/validate - Validate a gateway's credentials
/// - POST /api/v1/gateways/{id}/test - Connectivity test (validate + minimal payment)
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/providers", get(handlers::list_providers))
        .route("/gateways", get(handlers::list_gateways))
        .route("/gateways/{id}/methods", get(handlers::gateway_methods))
        .route("/gateways/{id}/validate", post(handlers::validate_gateway))
        .route("/gateways/{id}/test", post(handlers::test_gateway));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
