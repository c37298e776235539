use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::donations::handlers;
use crate::features::donations::services::DonationService;

/// Create routes for the donations feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<DonationService>) -> Router {
    Router::new()
        .route(
            "/api/donations",
            get(handlers::list_donations).post(handlers::create_donation),
        )
        .route("/api/donations/summary", get(handlers::get_summary))
        .route("/api/donations/filters", get(handlers::get_filter_options))
        .route("/api/donations/collect", post(handlers::mark_collected))
        .route("/api/donations/{id}", get(handlers::get_donation))
        .with_state(service)
}

/// Create admin routes for donation housekeeping
pub fn admin_routes(service: Arc<DonationService>) -> Router {
    Router::new()
        .route("/api/admin/donations", delete(handlers::delete_donations))
        .with_state(service)
}
