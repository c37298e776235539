use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::*;
use crate::features::donations::models::Donation;
use crate::features::donations::query;
use crate::features::donations::stores::DonationStore;

/// Service for dashboard aggregations
pub struct DashboardService {
    store: Arc<dyn DonationStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DonationStore>) -> Self {
        Self { store }
    }

    /// Get every dashboard view from one snapshot
    pub async fn overview(&self) -> Result<DashboardOverviewDto> {
        let snapshot = self.store.all().await?;

        Ok(DashboardOverviewDto {
            total_donations: snapshot.len(),
            categories: Self::categories(&snapshot),
            per_day: Self::per_day(&snapshot),
            map_points: Self::map_points(&snapshot),
        })
    }

    pub async fn by_category(&self) -> Result<Vec<CategoryCountDto>> {
        let snapshot = self.store.all().await?;
        Ok(Self::categories(&snapshot))
    }

    pub async fn per_day_counts(&self) -> Result<Vec<DailyCountDto>> {
        let snapshot = self.store.all().await?;
        Ok(Self::per_day(&snapshot))
    }

    pub async fn map(&self) -> Result<Vec<MapPointDto>> {
        let snapshot = self.store.all().await?;
        let points = Self::map_points(&snapshot);

        tracing::debug!(
            "Map points: {} of {} donations have usable coordinates",
            points.len(),
            snapshot.len()
        );

        Ok(points)
    }

    fn categories(snapshot: &[Donation]) -> Vec<CategoryCountDto> {
        query::category_distribution(snapshot)
            .into_iter()
            .map(|(category, count)| CategoryCountDto { category, count })
            .collect()
    }

    fn per_day(snapshot: &[Donation]) -> Vec<DailyCountDto> {
        query::per_day_aggregation(snapshot)
            .into_iter()
            .map(|(date, count)| DailyCountDto { date, count })
            .collect()
    }

    fn map_points(snapshot: &[Donation]) -> Vec<MapPointDto> {
        query::geo_validate(snapshot)
            .into_iter()
            .map(MapPointDto::from)
            .collect()
    }
}
