use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::dashboard::dtos::*;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::{ApiResponse, Meta};

// ============================================================================
// Overview
// ============================================================================

/// Get every dashboard view in one response
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard overview", body = ApiResponse<DashboardOverviewDto>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_overview(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardOverviewDto>>, AppError> {
    let overview = service.overview().await?;
    let message = (overview.total_donations == 0)
        .then(|| "No donation data available for dashboard.".to_string());
    Ok(Json(ApiResponse::success(Some(overview), message, None)))
}

// ============================================================================
// Individual charts
// ============================================================================

/// Donation counts per category
#[utoipa::path(
    get,
    path = "/api/dashboard/by-category",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Counts per category", body = ApiResponse<Vec<CategoryCountDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_by_category(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<CategoryCountDto>>>, AppError> {
    let data = service.by_category().await?;
    let meta = Meta::of_len(data.len());
    Ok(Json(ApiResponse::success(Some(data), None, Some(meta))))
}

/// Donation counts per expiry day, ascending
#[utoipa::path(
    get,
    path = "/api/dashboard/per-day",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Counts per day", body = ApiResponse<Vec<DailyCountDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_per_day(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<DailyCountDto>>>, AppError> {
    let data = service.per_day_counts().await?;
    let meta = Meta::of_len(data.len());
    Ok(Json(ApiResponse::success(Some(data), None, Some(meta))))
}

/// Donations with usable coordinates for the map
#[utoipa::path(
    get,
    path = "/api/dashboard/map",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Map points", body = ApiResponse<Vec<MapPointDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_map(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<MapPointDto>>>, AppError> {
    let points = service.map().await?;
    let message = points
        .is_empty()
        .then(|| "No geolocation data available for mapping.".to_string());
    let meta = Meta::of_len(points.len());
    Ok(Json(ApiResponse::success(Some(points), message, Some(meta))))
}
