use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::locations::services::City;

/// Response DTO for a known city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponseDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&City> for CityResponseDto {
    fn from(c: &City) -> Self {
        Self {
            name: c.name.to_string(),
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}
