//! Pure query and aggregation functions over a donation snapshot.
//!
//! Every function here works on a collection fetched from the store at the
//! start of a request. None of them touch storage, so the filtering and
//! aggregation rules can be exercised without a database.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::features::donations::models::{Donation, DonationCategory};
use crate::shared::constants::FILTER_ALL;

// ============================================================================
// Filters
// ============================================================================

/// Category selector, either "All" or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DonationCategory),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == FILTER_ALL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Status selector, either "All" or an exact status value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == FILTER_ALL {
            StatusFilter::All
        } else {
            StatusFilter::Only(raw.to_string())
        }
    }
}

pub fn filter_by_category(donations: Vec<Donation>, filter: CategoryFilter) -> Vec<Donation> {
    match filter {
        CategoryFilter::All => donations,
        CategoryFilter::Only(category) => donations
            .into_iter()
            .filter(|d| d.category == category)
            .collect(),
    }
}

pub fn filter_by_status(donations: Vec<Donation>, filter: &StatusFilter) -> Vec<Donation> {
    match filter {
        StatusFilter::All => donations,
        StatusFilter::Only(status) => donations
            .into_iter()
            .filter(|d| &d.status == status)
            .collect(),
    }
}

/// Distinct categories present in the snapshot, in form order
pub fn category_options(donations: &[Donation]) -> Vec<DonationCategory> {
    DonationCategory::ALL
        .into_iter()
        .filter(|category| donations.iter().any(|d| d.category == *category))
        .collect()
}

// ============================================================================
// Expiry
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedDonation {
    pub donation: Donation,
    pub expired: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpiryReport {
    pub rows: Vec<FlaggedDonation>,
    pub expired_count: usize,
}

/// Flag every donation whose expiry date lies before `today`
pub fn compute_expired(donations: Vec<Donation>, today: NaiveDate) -> ExpiryReport {
    let rows: Vec<FlaggedDonation> = donations
        .into_iter()
        .map(|donation| FlaggedDonation {
            expired: donation.is_expired(today),
            donation,
        })
        .collect();
    let expired_count = rows.iter().filter(|row| row.expired).count();

    ExpiryReport {
        rows,
        expired_count,
    }
}

// ============================================================================
// Bulk mutations (exact donor-name match)
// ============================================================================

/// Set `status` on every donation from `donor`, returning how many matched
pub fn bulk_update_status(donations: &mut [Donation], donor: &str, status: &str) -> usize {
    let mut affected = 0;
    for donation in donations.iter_mut().filter(|d| d.donor == donor) {
        donation.status = status.to_string();
        affected += 1;
    }
    affected
}

/// Remove every donation from `donor`, returning how many were removed
pub fn bulk_delete(donations: &mut Vec<Donation>, donor: &str) -> usize {
    let before = donations.len();
    donations.retain(|d| d.donor != donor);
    before - donations.len()
}

// ============================================================================
// Aggregations
// ============================================================================

/// Record count for each category that occurs at least once, in form order
pub fn category_distribution(donations: &[Donation]) -> Vec<(DonationCategory, usize)> {
    let mut counts: BTreeMap<DonationCategory, usize> = BTreeMap::new();
    for donation in donations {
        *counts.entry(donation.category).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Record count per expiry day, ascending by date
pub fn per_day_aggregation(donations: &[Donation]) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for donation in donations {
        *counts.entry(donation.expiry_date).or_default() += 1;
    }
    counts.into_iter().collect()
}

// ============================================================================
// Geolocation
// ============================================================================

/// A raw coordinate value that may or may not hold a usable number
pub trait CoordinateValue {
    fn to_coordinate(&self) -> Option<f64>;
}

impl CoordinateValue for f64 {
    fn to_coordinate(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl CoordinateValue for str {
    fn to_coordinate(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Anything carrying an optional latitude/longitude pair
pub trait GeoTagged {
    type Coordinate: CoordinateValue + ?Sized;

    fn latitude(&self) -> Option<&Self::Coordinate>;
    fn longitude(&self) -> Option<&Self::Coordinate>;
}

impl GeoTagged for Donation {
    type Coordinate = f64;

    fn latitude(&self) -> Option<&f64> {
        self.latitude.as_ref()
    }

    fn longitude(&self) -> Option<&f64> {
        self.longitude.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint<'a, T> {
    pub record: &'a T,
    pub latitude: f64,
    pub longitude: f64,
}

/// Keep the records whose latitude and longitude are both present and numeric.
/// Missing or malformed values drop the record without an error.
pub fn geo_validate<T: GeoTagged>(records: &[T]) -> Vec<GeoPoint<'_, T>> {
    records
        .iter()
        .filter_map(|record| {
            let latitude = record.latitude()?.to_coordinate()?;
            let longitude = record.longitude()?.to_coordinate()?;
            Some(GeoPoint {
                record,
                latitude,
                longitude,
            })
        })
        .collect()
}
