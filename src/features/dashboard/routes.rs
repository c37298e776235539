use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create public dashboard routes
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard", get(handlers::get_overview))
        // Individual charts
        .route("/api/dashboard/by-category", get(handlers::get_by_category))
        .route("/api/dashboard/per-day", get(handlers::get_per_day))
        .route("/api/dashboard/map", get(handlers::get_map))
        .with_state(dashboard_service)
}
