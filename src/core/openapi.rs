use utoipa::{Modify, OpenApi};

use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::donations::{
    dtos as donations_dtos, handlers as donations_handlers, models as donations_models,
};
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Locations
        locations_handlers::list_cities,
        locations_handlers::get_city,
        // Donations
        donations_handlers::create_donation,
        donations_handlers::list_donations,
        donations_handlers::get_summary,
        donations_handlers::get_filter_options,
        donations_handlers::get_donation,
        donations_handlers::mark_collected,
        // Admin
        donations_handlers::delete_donations,
        // Dashboard
        dashboard_handlers::get_overview,
        dashboard_handlers::get_by_category,
        dashboard_handlers::get_per_day,
        dashboard_handlers::get_map,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Locations
            locations_dtos::CityResponseDto,
            ApiResponse<locations_dtos::CityResponseDto>,
            ApiResponse<Vec<locations_dtos::CityResponseDto>>,
            // Donations
            donations_models::DonationCategory,
            donations_dtos::CreateDonationDto,
            donations_dtos::DonorActionDto,
            donations_dtos::DonationResponseDto,
            donations_dtos::DonationListDto,
            donations_dtos::DonationSummaryDto,
            donations_dtos::BulkActionResultDto,
            donations_dtos::FilterOptionsDto,
            ApiResponse<donations_dtos::DonationResponseDto>,
            ApiResponse<donations_dtos::DonationListDto>,
            ApiResponse<donations_dtos::DonationSummaryDto>,
            ApiResponse<donations_dtos::BulkActionResultDto>,
            ApiResponse<donations_dtos::FilterOptionsDto>,
            // Dashboard
            dashboard_dtos::CategoryCountDto,
            dashboard_dtos::DailyCountDto,
            dashboard_dtos::MapPointDto,
            dashboard_dtos::DashboardOverviewDto,
            ApiResponse<dashboard_dtos::DashboardOverviewDto>,
            ApiResponse<Vec<dashboard_dtos::CategoryCountDto>>,
            ApiResponse<Vec<dashboard_dtos::DailyCountDto>>,
            ApiResponse<Vec<dashboard_dtos::MapPointDto>>,
        )
    ),
    tags(
        (name = "locations", description = "City coordinate lookup (public)"),
        (name = "donations", description = "Donation logging and viewing"),
        (name = "admin", description = "Donation housekeeping"),
        (name = "Dashboard", description = "Aggregated donation charts"),
    ),
    info(
        title = "NourishNet API",
        version = "0.1.0",
        description = "Food donation logging and tracking",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
