use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::donations::models::{Donation, DonationCategory};
use crate::features::donations::query::GeoPoint;

// ============================================================================
// Category breakdown (pie chart)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCountDto {
    pub category: DonationCategory,
    pub count: usize,
}

// ============================================================================
// Per-day series (line chart)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyCountDto {
    pub date: NaiveDate,
    pub count: usize,
}

// ============================================================================
// Map
// ============================================================================

/// One donation with usable coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapPointDto {
    pub id: Uuid,
    /// "{donor} - {food item}"
    pub label: String,
    pub category: DonationCategory,
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint<'_, Donation>> for MapPointDto {
    fn from(point: GeoPoint<'_, Donation>) -> Self {
        Self {
            id: point.record.id,
            label: point.record.to_string(),
            category: point.record.category,
            status: point.record.status.clone(),
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}

// ============================================================================
// Overview
// ============================================================================

/// Everything the dashboard tab renders, built from a single snapshot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewDto {
    pub total_donations: usize,
    pub categories: Vec<CategoryCountDto>,
    pub per_day: Vec<DailyCountDto>,
    pub map_points: Vec<MapPointDto>,
}
