use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::donations::models::{Donation, DonationCategory};
use crate::features::donations::query::FlaggedDonation;
use crate::shared::validation::NOT_BLANK_REGEX;

/// Request DTO for logging a new donation
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationDto {
    /// Donor or restaurant name
    #[validate(
        length(min = 1, max = 100, message = "Donor must be 1-100 characters"),
        regex(
            path = *NOT_BLANK_REGEX,
            message = "Donor must not be blank"
        )
    )]
    pub donor: String,

    /// Phone number or email
    #[validate(
        length(min = 1, max = 100, message = "Contact must be 1-100 characters"),
        regex(
            path = *NOT_BLANK_REGEX,
            message = "Contact must not be blank"
        )
    )]
    pub contact: String,

    pub category: DonationCategory,

    #[validate(
        length(min = 1, max = 100, message = "Food item must be 1-100 characters"),
        regex(
            path = *NOT_BLANK_REGEX,
            message = "Food item must not be blank"
        )
    )]
    pub food_item: String,

    /// Number of servings
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    pub expiry_date: NaiveDate,

    /// Pickup location
    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,

    /// City whose coordinates fill in latitude/longitude when they are omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Request DTO naming the donor whose donations an action applies to
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DonorActionDto {
    /// Donor name, matched exactly (case-sensitive)
    #[validate(length(min = 1, max = 100, message = "Donor must be 1-100 characters"))]
    pub donor: String,
}

/// Query params for the donation view
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DonationListQuery {
    /// "All" (default), "Cooked", "Packaged" or "Raw"
    pub category: Option<String>,
    /// "All" (default), "Available", "Collected", or any other stored status
    pub status: Option<String>,
    /// Date the expired flag is computed against, defaults to today (UTC)
    pub as_of: Option<NaiveDate>,
}

/// Query params for endpoints that only depend on the current date
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AsOfQuery {
    /// Date the expired flag is computed against, defaults to today (UTC)
    pub as_of: Option<NaiveDate>,
}

/// Response DTO for donation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponseDto {
    pub id: Uuid,
    pub donor: String,
    pub contact: String,
    pub category: DonationCategory,
    pub food_item: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub expired: bool,
    pub created_at: DateTime<Utc>,
}

impl DonationResponseDto {
    pub fn from_donation(d: Donation, today: NaiveDate) -> Self {
        let expired = d.is_expired(today);
        Self::flagged(d, expired)
    }

    fn flagged(d: Donation, expired: bool) -> Self {
        Self {
            id: d.id,
            donor: d.donor,
            contact: d.contact,
            category: d.category,
            food_item: d.food_item,
            quantity: d.quantity,
            expiry_date: d.expiry_date,
            location: d.location,
            latitude: d.latitude,
            longitude: d.longitude,
            status: d.status,
            expired,
            created_at: d.created_at,
        }
    }
}

impl From<FlaggedDonation> for DonationResponseDto {
    fn from(row: FlaggedDonation) -> Self {
        Self::flagged(row.donation, row.expired)
    }
}

/// Filtered donation view with the expired count for the warning banner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationListDto {
    pub items: Vec<DonationResponseDto>,
    pub expired_count: usize,
}

/// Header counts shown above every tab
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationSummaryDto {
    pub active_donations: usize,
    pub total_donations: usize,
    pub expired_donations: usize,
}

/// Outcome of a donor-keyed bulk action
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkActionResultDto {
    pub donor: String,
    pub affected: u64,
}

/// Options for the category and status selectors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsDto {
    /// "All" followed by the categories present in the collection
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
}
