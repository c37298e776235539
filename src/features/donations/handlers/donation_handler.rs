use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::donations::dtos::{
    AsOfQuery, BulkActionResultDto, CreateDonationDto, DonationListDto, DonationListQuery,
    DonationResponseDto, DonationSummaryDto, DonorActionDto, FilterOptionsDto,
};
use crate::features::donations::query::{CategoryFilter, StatusFilter};
use crate::features::donations::services::DonationService;
use crate::shared::types::{ApiResponse, Meta};

fn today_or(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Utc::now().date_naive())
}

/// Log a new food donation
///
/// Coordinates are taken from `latitude`/`longitude` when both are given,
/// otherwise from the `city` lookup table.
#[utoipa::path(
    post,
    path = "/api/donations",
    request_body = CreateDonationDto,
    responses(
        (status = 201, description = "Donation submitted", body = ApiResponse<DonationResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "donations"
)]
pub async fn create_donation(
    State(service): State<Arc<DonationService>>,
    AppJson(dto): AppJson<CreateDonationDto>,
) -> Result<(StatusCode, Json<ApiResponse<DonationResponseDto>>)> {
    dto.validate()?;

    let donation = service.create(dto, today_or(None)).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(donation),
            Some("Donation submitted!".to_string()),
            None,
        )),
    ))
}

/// List donations filtered by category and status
///
/// Each row carries an `expired` flag. When any row is expired the response
/// message holds the review warning.
///
/// Selectors match exactly. A category outside "All", "Cooked", "Packaged"
/// and "Raw" is rejected with 400, while a status nobody holds just yields
/// an empty list since status is free text.
#[utoipa::path(
    get,
    path = "/api/donations",
    params(DonationListQuery),
    responses(
        (status = 200, description = "Filtered donations", body = ApiResponse<DonationListDto>),
        (status = 400, description = "Unknown category")
    ),
    tag = "donations"
)]
pub async fn list_donations(
    State(service): State<Arc<DonationService>>,
    AppQuery(query): AppQuery<DonationListQuery>,
) -> Result<Json<ApiResponse<DonationListDto>>> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<CategoryFilter>)
        .transpose()
        .map_err(AppError::Validation)?
        .unwrap_or_default();
    let status = query
        .status
        .as_deref()
        .map(StatusFilter::parse)
        .unwrap_or_default();

    let list = service
        .list(category, &status, today_or(query.as_of))
        .await?;

    let message = (list.expired_count > 0).then(|| {
        format!(
            "{} donation(s) have expired. Please review.",
            list.expired_count
        )
    });
    let meta = Meta::of_len(list.items.len());

    Ok(Json(ApiResponse::success(Some(list), message, Some(meta))))
}

/// Active, total and expired donation counts
#[utoipa::path(
    get,
    path = "/api/donations/summary",
    params(AsOfQuery),
    responses(
        (status = 200, description = "Donation counts", body = ApiResponse<DonationSummaryDto>),
    ),
    tag = "donations"
)]
pub async fn get_summary(
    State(service): State<Arc<DonationService>>,
    AppQuery(query): AppQuery<AsOfQuery>,
) -> Result<Json<ApiResponse<DonationSummaryDto>>> {
    let summary = service.summary(today_or(query.as_of)).await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Options for the category and status selectors
#[utoipa::path(
    get,
    path = "/api/donations/filters",
    responses(
        (status = 200, description = "Selector options", body = ApiResponse<FilterOptionsDto>),
    ),
    tag = "donations"
)]
pub async fn get_filter_options(
    State(service): State<Arc<DonationService>>,
) -> Result<Json<ApiResponse<FilterOptionsDto>>> {
    let options = service.filter_options().await?;
    Ok(Json(ApiResponse::success(Some(options), None, None)))
}

/// Get donation by id
#[utoipa::path(
    get,
    path = "/api/donations/{id}",
    params(
        ("id" = Uuid, Path, description = "Donation ID"),
        AsOfQuery
    ),
    responses(
        (status = 200, description = "Donation found", body = ApiResponse<DonationResponseDto>),
        (status = 404, description = "Donation not found")
    ),
    tag = "donations"
)]
pub async fn get_donation(
    State(service): State<Arc<DonationService>>,
    Path(id): Path<Uuid>,
    AppQuery(query): AppQuery<AsOfQuery>,
) -> Result<Json<ApiResponse<DonationResponseDto>>> {
    let donation = service.get(id, today_or(query.as_of)).await?;
    Ok(Json(ApiResponse::success(Some(donation), None, None)))
}

/// Mark all donations of a donor as collected
///
/// The donor name must match exactly. No match is not an error, the
/// response then reports zero affected donations.
#[utoipa::path(
    post,
    path = "/api/donations/collect",
    request_body = DonorActionDto,
    responses(
        (status = 200, description = "Donations marked as collected", body = ApiResponse<BulkActionResultDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "donations"
)]
pub async fn mark_collected(
    State(service): State<Arc<DonationService>>,
    AppJson(dto): AppJson<DonorActionDto>,
) -> Result<Json<ApiResponse<BulkActionResultDto>>> {
    dto.validate()?;

    let result = service.mark_collected(&dto.donor).await?;
    let message = format!("Donations by {} marked as collected.", result.donor);
    Ok(Json(ApiResponse::success(Some(result), Some(message), None)))
}

/// Delete all donations of a donor
///
/// The donor name must match exactly. No match is not an error.
#[utoipa::path(
    delete,
    path = "/api/admin/donations",
    params(DonorActionDto),
    responses(
        (status = 200, description = "Donations deleted", body = ApiResponse<BulkActionResultDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "admin"
)]
pub async fn delete_donations(
    State(service): State<Arc<DonationService>>,
    AppQuery(dto): AppQuery<DonorActionDto>,
) -> Result<Json<ApiResponse<BulkActionResultDto>>> {
    dto.validate()?;

    let result = service.delete_by_donor(&dto.donor).await?;
    let message = format!("All donations by {} have been deleted.", result.donor);
    Ok(Json(ApiResponse::success(Some(result), Some(message), None)))
}
