use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers;
use crate::features::locations::services::LocationService;

/// Create routes for the locations feature
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/locations/cities", get(handlers::list_cities))
        .route("/api/locations/cities/{name}", get(handlers::get_city))
        .with_state(service)
}
