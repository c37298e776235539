use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::STATUS_AVAILABLE;

/// Donation category enum matching database enum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "donation_category")]
pub enum DonationCategory {
    Cooked,
    Packaged,
    Raw,
}

impl DonationCategory {
    /// All categories in form order
    pub const ALL: [DonationCategory; 3] = [
        DonationCategory::Cooked,
        DonationCategory::Packaged,
        DonationCategory::Raw,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationCategory::Cooked => "Cooked",
            DonationCategory::Packaged => "Packaged",
            DonationCategory::Raw => "Raw",
        }
    }
}

impl std::fmt::Display for DonationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DonationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonationCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}': expected one of Cooked, Packaged, Raw",
                    s
                )
            })
    }
}

/// Database model for donation
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Donation {
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
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// A donation is expired once its expiry date lies strictly before `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }
}

impl std::fmt::Display for Donation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.donor, self.food_item)
    }
}

/// Data for creating a new donation
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub donor: String,
    pub contact: String,
    pub category: DonationCategory,
    pub food_item: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl NewDonation {
    /// Materialize the record a store persists: fresh id, status Available
    pub fn into_donation(self, id: Uuid, created_at: DateTime<Utc>) -> Donation {
        Donation {
            id,
            donor: self.donor,
            contact: self.contact,
            category: self.category,
            food_item: self.food_item,
            quantity: self.quantity,
            expiry_date: self.expiry_date,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            status: STATUS_AVAILABLE.to_string(),
            created_at,
        }
    }
}
