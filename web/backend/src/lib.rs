pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use axum::{Router, routing::get};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/regions", get(handlers::list_regions))
        .route("/api/departments", get(handlers::list_departments))
        .route("/api/cities", get(handlers::list_cities))
        .route("/api/communes/search", get(handlers::search_communes))
        .route("/api/communes", get(handlers::get_commune))
        .route("/api/housing", get(handlers::get_housing))
        .route("/api/compare", get(handlers::compare_cities))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
