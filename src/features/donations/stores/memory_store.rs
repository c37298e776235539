use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::donations::models::{Donation, NewDonation};
use crate::features::donations::query;

use super::DonationStore;

/// Process-local donation store
#[derive(Default)]
pub struct InMemoryDonationStore {
    donations: RwLock<Vec<Donation>>,
}

impl InMemoryDonationStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_donations(donations: Vec<Donation>) -> Self {
        Self {
            donations: RwLock::new(donations),
        }
    }
}

#[async_trait]
impl DonationStore for InMemoryDonationStore {
    async fn create(&self, donation: NewDonation) -> Result<Donation> {
        let donation = donation.into_donation(Uuid::now_v7(), Utc::now());
        self.donations.write().await.push(donation.clone());
        Ok(donation)
    }

    async fn all(&self) -> Result<Vec<Donation>> {
        Ok(self.donations.read().await.clone())
    }

    async fn update_status_by_donor(&self, donor: &str, status: &str) -> Result<u64> {
        let mut donations = self.donations.write().await;
        Ok(query::bulk_update_status(&mut donations, donor, status) as u64)
    }

    async fn delete_by_donor(&self, donor: &str) -> Result<u64> {
        let mut donations = self.donations.write().await;
        Ok(query::bulk_delete(&mut donations, donor) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::donations::models::DonationCategory;
    use crate::shared::constants::{STATUS_AVAILABLE, STATUS_COLLECTED};
    use crate::shared::test_helpers::{date, new_donation};

    #[test]
    fn test_create_then_all_keeps_submission_order() {
        let store = InMemoryDonationStore::new();
        tokio_test::block_on(async {
            let first = store
                .create(new_donation("Annapurna", DonationCategory::Cooked, date(2024, 1, 2)))
                .await
                .unwrap();
            let second = store
                .create(new_donation("Saravana", DonationCategory::Raw, date(2024, 1, 1)))
                .await
                .unwrap();

            assert_eq!(first.status, STATUS_AVAILABLE);
            let all = store.all().await.unwrap();
            assert_eq!(all, vec![first, second]);
        });
    }

    #[test]
    fn test_bulk_mutations() {
        let store = InMemoryDonationStore::new();
        tokio_test::block_on(async {
            for donor in ["Annapurna", "Annapurna", "Saravana"] {
                store
                    .create(new_donation(donor, DonationCategory::Packaged, date(2024, 1, 1)))
                    .await
                    .unwrap();
            }

            assert_eq!(
                store
                    .update_status_by_donor("Annapurna", STATUS_COLLECTED)
                    .await
                    .unwrap(),
                2
            );
            assert_eq!(
                store
                    .update_status_by_donor("Nobody", STATUS_COLLECTED)
                    .await
                    .unwrap(),
                0
            );
            assert_eq!(store.delete_by_donor("Saravana").await.unwrap(), 1);
            assert_eq!(store.delete_by_donor("Saravana").await.unwrap(), 0);

            let all = store.all().await.unwrap();
            assert_eq!(all.len(), 2);
            assert!(all.iter().all(|d| d.status == STATUS_COLLECTED));
        });
    }
}
