//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    health, list_exhibitors, list_orders, orders_by_booth, orders_by_exhibitor, stats, AppState,
};

/// Create the API router.
///
/// CORS is fully permissive so the dashboard can be served from any origin.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/exhibitors", get(list_exhibitors))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/exhibitor/:exhibitor", get(orders_by_exhibitor))
        .route("/api/orders/booth/:booth", get(orders_by_booth))
        .route("/api/stats", get(stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
