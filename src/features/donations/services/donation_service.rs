use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::donations::dtos::{
    BulkActionResultDto, CreateDonationDto, DonationListDto, DonationResponseDto,
    DonationSummaryDto, FilterOptionsDto,
};
use crate::features::donations::models::NewDonation;
use crate::features::donations::query::{self, CategoryFilter, StatusFilter};
use crate::features::donations::stores::DonationStore;
use crate::features::locations::LocationService;
use crate::shared::constants::{FILTER_ALL, STATUS_COLLECTED, STATUS_OPTIONS};

/// Service for donation submission, viewing and donor-keyed actions
pub struct DonationService {
    store: Arc<dyn DonationStore>,
    locations: Arc<LocationService>,
}

impl DonationService {
    pub fn new(store: Arc<dyn DonationStore>, locations: Arc<LocationService>) -> Self {
        Self { store, locations }
    }

    /// Log a new donation. Status always starts as Available.
    pub async fn create(
        &self,
        dto: CreateDonationDto,
        today: NaiveDate,
    ) -> Result<DonationResponseDto> {
        if dto.expiry_date < today {
            return Err(AppError::Validation(format!(
                "Expiry date {} is before today ({})",
                dto.expiry_date, today
            )));
        }

        let (latitude, longitude) = self.resolve_coordinates(&dto)?;

        let donation = self
            .store
            .create(NewDonation {
                donor: dto.donor,
                contact: dto.contact,
                category: dto.category,
                food_item: dto.food_item,
                quantity: dto.quantity,
                expiry_date: dto.expiry_date,
                location: dto.location,
                latitude,
                longitude,
            })
            .await?;

        tracing::info!(
            "Donation created: id={}, donation={}, category={}",
            donation.id,
            donation,
            donation.category
        );

        Ok(DonationResponseDto::from_donation(donation, today))
    }

    /// An explicit pair wins, otherwise the city table fills both values in
    fn resolve_coordinates(&self, dto: &CreateDonationDto) -> Result<(Option<f64>, Option<f64>)> {
        match (dto.latitude, dto.longitude, dto.city.as_deref()) {
            (Some(lat), Some(lon), _) => Ok((Some(lat), Some(lon))),
            (lat, lon, Some(city)) if !city.trim().is_empty() => {
                let (city_lat, city_lon) = self.locations.coordinates(city.trim())?;
                Ok((lat.or(Some(city_lat)), lon.or(Some(city_lon))))
            }
            (lat, lon, _) => Ok((lat, lon)),
        }
    }

    /// Filtered view of the collection with expired flags
    pub async fn list(
        &self,
        category: CategoryFilter,
        status: &StatusFilter,
        today: NaiveDate,
    ) -> Result<DonationListDto> {
        let snapshot = self.store.all().await?;
        let filtered = query::filter_by_status(query::filter_by_category(snapshot, category), status);
        let report = query::compute_expired(filtered, today);

        tracing::debug!(
            "Donation view: category={:?}, status={:?}, rows={}, expired={}",
            category,
            status,
            report.rows.len(),
            report.expired_count
        );

        Ok(DonationListDto {
            items: report.rows.into_iter().map(DonationResponseDto::from).collect(),
            expired_count: report.expired_count,
        })
    }

    /// Get a single donation by id
    pub async fn get(&self, id: Uuid, today: NaiveDate) -> Result<DonationResponseDto> {
        self.store
            .all()
            .await?
            .into_iter()
            .find(|d| d.id == id)
            .map(|d| DonationResponseDto::from_donation(d, today))
            .ok_or_else(|| AppError::NotFound(format!("Donation {} not found", id)))
    }

    /// Active, total and expired counts over the whole collection
    pub async fn summary(&self, today: NaiveDate) -> Result<DonationSummaryDto> {
        let snapshot = self.store.all().await?;
        let total_donations = snapshot.len();
        let active_donations = snapshot.iter().filter(|d| d.is_available()).count();
        let expired_donations = query::compute_expired(snapshot, today).expired_count;

        Ok(DonationSummaryDto {
            active_donations,
            total_donations,
            expired_donations,
        })
    }

    /// Mark every donation from `donor` as collected
    pub async fn mark_collected(&self, donor: &str) -> Result<BulkActionResultDto> {
        let affected = self
            .store
            .update_status_by_donor(donor, STATUS_COLLECTED)
            .await?;

        tracing::info!(
            "Marked donations collected: donor={:?}, affected={}",
            donor,
            affected
        );

        Ok(BulkActionResultDto {
            donor: donor.to_string(),
            affected,
        })
    }

    /// Delete every donation from `donor`
    pub async fn delete_by_donor(&self, donor: &str) -> Result<BulkActionResultDto> {
        let affected = self.store.delete_by_donor(donor).await?;

        tracing::warn!(
            "Deleted donations: donor={:?}, affected={}",
            donor,
            affected
        );

        Ok(BulkActionResultDto {
            donor: donor.to_string(),
            affected,
        })
    }

    /// Selector options, categories limited to those present
    pub async fn filter_options(&self) -> Result<FilterOptionsDto> {
        let snapshot = self.store.all().await?;
        let categories = std::iter::once(FILTER_ALL.to_string())
            .chain(
                query::category_options(&snapshot)
                    .into_iter()
                    .map(|c| c.to_string()),
            )
            .collect();

        Ok(FilterOptionsDto {
            categories,
            statuses: STATUS_OPTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::donations::models::DonationCategory;
    use crate::features::donations::stores::InMemoryDonationStore;
    use crate::shared::test_helpers::{date, donation_from};

    fn service_with(store: InMemoryDonationStore) -> DonationService {
        DonationService::new(Arc::new(store), Arc::new(LocationService::new()))
    }

    fn create_dto(donor: &str, expiry_date: NaiveDate) -> CreateDonationDto {
        CreateDonationDto {
            donor: donor.to_string(),
            contact: "9876543210".to_string(),
            category: DonationCategory::Cooked,
            food_item: "Veg biryani".to_string(),
            quantity: 25,
            expiry_date,
            location: "Anna Nagar".to_string(),
            city: None,
            latitude: None,
            longitude: None,
        }
    }

    #[tokio::test]
    async fn test_create_fills_coordinates_from_city() {
        let service = service_with(InMemoryDonationStore::new());
        let today = date(2024, 5, 1);
        let mut dto = create_dto("Saravana Bhavan", date(2024, 5, 3));
        dto.city = Some("Chennai".to_string());

        let created = service.create(dto, today).await.unwrap();

        assert_eq!(created.latitude, Some(13.0827));
        assert_eq!(created.longitude, Some(80.2707));
        assert_eq!(created.status, "Available");
        assert!(!created.expired);
    }

    #[tokio::test]
    async fn test_create_explicit_coordinates_win() {
        let service = service_with(InMemoryDonationStore::new());
        let mut dto = create_dto("Saravana Bhavan", date(2024, 5, 3));
        dto.city = Some("Chennai".to_string());
        dto.latitude = Some(13.05);
        dto.longitude = Some(80.25);

        let created = service.create(dto, date(2024, 5, 1)).await.unwrap();

        assert_eq!(created.latitude, Some(13.05));
        assert_eq!(created.longitude, Some(80.25));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_city_and_past_expiry() {
        let service = service_with(InMemoryDonationStore::new());

        let mut dto = create_dto("Saravana Bhavan", date(2024, 5, 3));
        dto.city = Some("Atlantis".to_string());
        assert!(matches!(
            service.create(dto, date(2024, 5, 1)).await,
            Err(AppError::Validation(_))
        ));

        let dto = create_dto("Saravana Bhavan", date(2024, 4, 30));
        assert!(matches!(
            service.create(dto, date(2024, 5, 1)).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_applies_filters_and_expiry() {
        let mut collected = donation_from("Annapurna", DonationCategory::Raw, date(2024, 1, 1));
        collected.status = STATUS_COLLECTED.to_string();
        let store = InMemoryDonationStore::with_donations(vec![
            donation_from("Annapurna", DonationCategory::Cooked, date(2024, 1, 1)),
            donation_from("Saravana", DonationCategory::Cooked, date(2024, 7, 1)),
            collected,
        ]);
        let service = service_with(store);
        let today = date(2024, 6, 1);

        let cooked = service
            .list(
                CategoryFilter::Only(DonationCategory::Cooked),
                &StatusFilter::All,
                today,
            )
            .await
            .unwrap();
        assert_eq!(cooked.items.len(), 2);
        assert_eq!(cooked.expired_count, 1);

        let collected = service
            .list(CategoryFilter::All, &StatusFilter::parse("Collected"), today)
            .await
            .unwrap();
        assert_eq!(collected.items.len(), 1);
        assert_eq!(collected.items[0].category, DonationCategory::Raw);
        assert!(collected.items[0].expired);
    }

    #[tokio::test]
    async fn test_summary_and_filter_options() {
        let store = InMemoryDonationStore::with_donations(vec![
            donation_from("Annapurna", DonationCategory::Raw, date(2024, 1, 1)),
            donation_from("Saravana", DonationCategory::Cooked, date(2024, 7, 1)),
        ]);
        let service = service_with(store);
        service.mark_collected("Saravana").await.unwrap();

        let summary = service.summary(date(2024, 6, 1)).await.unwrap();
        assert_eq!(summary.total_donations, 2);
        assert_eq!(summary.active_donations, 1);
        assert_eq!(summary.expired_donations, 1);

        let options = service.filter_options().await.unwrap();
        assert_eq!(options.categories, vec!["All", "Cooked", "Raw"]);
        assert_eq!(options.statuses, vec!["All", "Available", "Collected"]);
    }

    #[tokio::test]
    async fn test_donor_actions_are_noops_without_match() {
        let service = service_with(InMemoryDonationStore::new());

        let collected = service.mark_collected("Nobody").await.unwrap();
        assert_eq!(collected.affected, 0);

        let deleted = service.delete_by_donor("Nobody").await.unwrap();
        assert_eq!(deleted.affected, 0);
    }

    #[tokio::test]
    async fn test_get_missing_donation() {
        let service = service_with(InMemoryDonationStore::new());
        assert!(matches!(
            service.get(Uuid::now_v7(), date(2024, 1, 1)).await,
            Err(AppError::NotFound(_))
        ));
    }
}
