use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::donations::models::{Donation, NewDonation};

use super::DonationStore;

const DONATION_COLUMNS: &str = "id, donor, contact, category, food_item, quantity, expiry_date, \
     location, latitude, longitude, status, created_at";

/// Donation store backed by the `donations` table
pub struct PgDonationStore {
    pool: PgPool,
}

impl PgDonationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonationStore for PgDonationStore {
    async fn create(&self, donation: NewDonation) -> Result<Donation> {
        let sql = format!(
            r#"
            INSERT INTO donations
                (id, donor, contact, category, food_item, quantity, expiry_date, location, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            DONATION_COLUMNS
        );

        let created = sqlx::query_as::<_, Donation>(&sql)
            .bind(Uuid::now_v7())
            .bind(&donation.donor)
            .bind(&donation.contact)
            .bind(donation.category)
            .bind(&donation.food_item)
            .bind(donation.quantity)
            .bind(donation.expiry_date)
            .bind(&donation.location)
            .bind(donation.latitude)
            .bind(donation.longitude)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create donation: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(created)
    }

    async fn all(&self) -> Result<Vec<Donation>> {
        let sql = format!(
            "SELECT {} FROM donations ORDER BY created_at, id",
            DONATION_COLUMNS
        );

        sqlx::query_as::<_, Donation>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list donations: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update_status_by_donor(&self, donor: &str, status: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE donations SET status = $1 WHERE donor = $2")
            .bind(status)
            .bind(donor)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update donation status: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_by_donor(&self, donor: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM donations WHERE donor = $1")
            .bind(donor)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete donations: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }
}
