use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::locations::dtos::CityResponseDto;
use crate::features::locations::services::LocationService;
use crate::shared::types::{ApiResponse, Meta};

/// List cities with known coordinates
#[utoipa::path(
    get,
    path = "/api/locations/cities",
    responses(
        (status = 200, description = "Known cities", body = ApiResponse<Vec<CityResponseDto>>),
    ),
    tag = "locations"
)]
pub async fn list_cities(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<CityResponseDto>>>> {
    let cities = service.list();
    let meta = Meta::of_len(cities.len());
    Ok(Json(ApiResponse::success(Some(cities), None, Some(meta))))
}

/// Get coordinates for one city
#[utoipa::path(
    get,
    path = "/api/locations/cities/{name}",
    params(
        ("name" = String, Path, description = "City name, exact match")
    ),
    responses(
        (status = 200, description = "City found", body = ApiResponse<CityResponseDto>),
        (status = 404, description = "City not found")
    ),
    tag = "locations"
)]
pub async fn get_city(
    State(service): State<Arc<LocationService>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<CityResponseDto>>> {
    let city = service.get(&name)?;
    Ok(Json(ApiResponse::success(Some(city), None, None)))
}
