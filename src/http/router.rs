//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        // Buildings
        .route("/buildings", get(handlers::list_buildings))
        .route("/buildings/import", post(handlers::import_buildings))
        .route("/buildings/{building_id}", get(handlers::get_building))
        .route("/buildings/{building_id}/status", post(handlers::mark_building))
        // Apartments
        .route(
            "/buildings/{building_id}/apartments/{apartment_id}/status",
            post(handlers::set_apartment_status),
        )
        .route(
            "/buildings/{building_id}/apartments/{apartment_id}/attempts",
            post(handlers::record_attempt),
        )
        // Route planning
        .route("/route", get(handlers::plan_route));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // CSV imports stay small; cap request bodies accordingly.
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
