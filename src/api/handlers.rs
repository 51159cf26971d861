//! HTTP API handlers.
//!
//! Every handler triggers a fresh fetch-and-recompute cycle against the
//! configured data source; there is no cache and no shared mutable state.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::orders::{
    filter_by_booth, filter_by_exhibitor, summarize_exhibitors, ExhibitorSummary, Order,
    OrderStats, OrderStatus,
};
use crate::source::DataSource;

/// Application state shared with handlers.
///
/// The data source is constructed once at startup and passed in here rather
/// than living in a module-level singleton.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Data source backing every request.
    pub source: Arc<DataSource>,
}

impl AppState {
    /// Create app state around a data source.
    pub fn new(source: DataSource) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

/// Current time as an RFC 3339 string, generated at response time.
fn now_iso8601() -> Result<String, ApiError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}

/// Internal handler error, rendered as a JSON 500.
#[derive(Debug)]
pub struct ApiError(String);

/// Generic error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: self.0 }),
        )
            .into_response()
    }
}

impl From<time::error::Format> for ApiError {
    fn from(e: time::error::Format) -> Self {
        Self(format!("failed to format timestamp: {}", e))
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Response timestamp.
    pub timestamp: String,
}

/// Orders for one exhibitor.
///
/// On failure the same shape is returned with empty orders, zero counts,
/// and the `error` field populated.
#[derive(Debug, Serialize)]
pub struct ExhibitorOrdersResponse {
    /// Exhibitor name as requested.
    pub exhibitor: String,
    /// Matching orders.
    pub orders: Vec<Order>,
    /// Number of matching orders.
    pub total_orders: u64,
    /// Matching orders with status `delivered`.
    pub delivered_orders: u64,
    /// Response timestamp.
    pub last_updated: String,
    /// Error message, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Orders for one booth.
#[derive(Debug, Serialize)]
pub struct BoothOrdersResponse {
    /// Booth number as requested.
    pub booth: String,
    /// Matching orders.
    pub orders: Vec<Order>,
    /// Number of matching orders.
    pub total_orders: u64,
    /// Response timestamp.
    pub last_updated: String,
}

/// Global statistics response.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Per-status counters.
    #[serde(flatten)]
    pub stats: OrderStats,
    /// Response timestamp.
    pub last_updated: String,
}

/// `GET /api/health`
pub async fn health() -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp: now_iso8601()?,
    }))
}

/// `GET /api/exhibitors` - one aggregate per exhibitor, first-occurrence order.
pub async fn list_exhibitors(State(state): State<AppState>) -> Json<Vec<ExhibitorSummary>> {
    let orders = state.source.orders_or_fallback().await;
    Json(summarize_exhibitors(&orders))
}

/// `GET /api/orders` - the full order sequence.
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.source.orders_or_fallback().await)
}

/// `GET /api/orders/exhibitor/:exhibitor`
///
/// Unlike the other endpoints, a failure here is surfaced in the response
/// body with an empty result set instead of the generic error shape.
pub async fn orders_by_exhibitor(
    State(state): State<AppState>,
    Path(exhibitor): Path<String>,
) -> Response {
    let orders = state.source.orders_or_fallback().await;
    let matching = filter_by_exhibitor(&orders, &exhibitor);

    match now_iso8601() {
        Ok(last_updated) => {
            let delivered = matching
                .iter()
                .filter(|o| o.status == OrderStatus::Delivered)
                .count() as u64;

            Json(ExhibitorOrdersResponse {
                exhibitor,
                total_orders: matching.len() as u64,
                delivered_orders: delivered,
                orders: matching,
                last_updated,
                error: None,
            })
            .into_response()
        }
        Err(ApiError(message)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ExhibitorOrdersResponse {
                exhibitor,
                orders: Vec::new(),
                total_orders: 0,
                delivered_orders: 0,
                last_updated: String::new(),
                error: Some(message),
            }),
        )
            .into_response(),
    }
}

/// `GET /api/orders/booth/:booth` - exact booth match.
pub async fn orders_by_booth(
    State(state): State<AppState>,
    Path(booth): Path<String>,
) -> Result<Json<BoothOrdersResponse>, ApiError> {
    let orders = state.source.orders_or_fallback().await;
    let matching = filter_by_booth(&orders, &booth);

    Ok(Json(BoothOrdersResponse {
        booth,
        total_orders: matching.len() as u64,
        orders: matching,
        last_updated: now_iso8601()?,
    }))
}

/// `GET /api/stats` - the six global counters.
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let orders = state.source.orders_or_fallback().await;

    Ok(Json(StatsResponse {
        stats: OrderStats::from_orders(&orders),
        last_updated: now_iso8601()?,
    }))
}
